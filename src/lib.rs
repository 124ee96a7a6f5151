//! # Connect Four AI
//!
//! Connect Four against a computer opponent that searches the game tree with
//! depth-bounded minimax and alpha-beta pruning. Ships a terminal UI built
//! with Ratatui and a plain line-oriented mode.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, pieces, rules, game state machine
//! - [`ai`] — Heuristic evaluation and minimax search
//! - [`ui`] — Terminal UI and plain-text driver
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
