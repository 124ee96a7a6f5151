//! Core Connect Four game logic: board, pieces, rules, and the game state
//! machine driven by the presentation layer.

mod board;
mod piece;
pub mod rules;
mod state;

pub use board::{Board, Cell, CENTER_COL, COLS, ROWS};
pub use piece::Piece;
pub use rules::{apply_move, is_draw, is_winning_board, legal_moves, windows, Window};
pub use state::{GameState, GameStatus, MoveOutcome};
