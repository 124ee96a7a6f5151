use tracing::trace;

use crate::ai::Searcher;
use crate::error::MoveError;

use super::rules;
use super::{Board, Piece};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerWins,
    ComputerWins,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Piece> {
        match self {
            GameStatus::PlayerWins => Some(Piece::Player),
            GameStatus::ComputerWins => Some(Piece::Computer),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

/// Where a piece landed and what the game looks like afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: Piece,
    pub column: usize,
    pub row: usize,
    pub status: GameStatus,
}

/// One game between the human player and the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    to_move: Piece,
    status: GameStatus,
}

impl GameState {
    /// Fresh empty board, `first` to move.
    pub fn new(first: Piece) -> Self {
        GameState {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side whose turn it is
    pub fn to_move(&self) -> Piece {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Apply the human's move. Nothing changes if the move is rejected.
    pub fn attempt_player_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        self.apply(column, Piece::Player)
    }

    /// Ask `searcher` for the computer's column without playing it.
    pub fn compute_computer_move(&self, searcher: &mut Searcher) -> Result<usize, MoveError> {
        self.check_turn(Piece::Computer)?;
        Ok(searcher.choose_move(&self.board))
    }

    /// Apply a column chosen for the computer.
    pub fn apply_computer_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        self.apply(column, Piece::Computer)
    }

    /// Search and play the computer's move in one step.
    pub fn play_computer_turn(&mut self, searcher: &mut Searcher) -> Result<MoveOutcome, MoveError> {
        let column = self.compute_computer_move(searcher)?;
        self.apply_computer_move(column)
    }

    fn check_turn(&self, piece: Piece) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != piece {
            return Err(MoveError::NotYourTurn(piece));
        }
        Ok(())
    }

    fn apply(&mut self, column: usize, piece: Piece) -> Result<MoveOutcome, MoveError> {
        self.check_turn(piece)?;

        let row = rules::apply_move(&mut self.board, column, piece)?;
        self.status = rules::game_status(&self.board);
        self.to_move = piece.other();

        trace!(piece = piece.name(), column, row, status = ?self.status, "move applied");

        Ok(MoveOutcome {
            piece,
            column,
            row,
            status: self.status,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Piece::Player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IllegalMoveError;
    use crate::game::{Cell, COLS, ROWS};

    #[test]
    fn test_initial_state() {
        let state = GameState::new(Piece::Player);
        assert_eq!(state.to_move(), Piece::Player);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(!state.is_terminal());
        assert_eq!(state.board(), &Board::new());
    }

    #[test]
    fn test_player_move_passes_turn() {
        let mut state = GameState::new(Piece::Player);
        let outcome = state.attempt_player_move(3).unwrap();

        assert_eq!(outcome.row, 0);
        assert_eq!(outcome.column, 3);
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(state.to_move(), Piece::Computer);
        assert_eq!(state.board().get(0, 3), Cell::Player);
    }

    #[test]
    fn test_illegal_move_keeps_state() {
        let mut state = GameState::new(Piece::Player);
        let before = state;
        assert_eq!(
            state.attempt_player_move(COLS),
            Err(MoveError::Illegal(IllegalMoveError::OutOfRange { column: COLS }))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_full_column_keeps_turn() {
        let mut state = GameState::new(Piece::Player);
        for i in 0..ROWS {
            if i % 2 == 0 {
                state.attempt_player_move(0).unwrap();
            } else {
                state.apply_computer_move(0).unwrap();
            }
        }
        assert_eq!(state.to_move(), Piece::Player);
        assert_eq!(
            state.attempt_player_move(0),
            Err(MoveError::Illegal(IllegalMoveError::ColumnFull { column: 0 }))
        );
        assert_eq!(state.to_move(), Piece::Player);
    }

    #[test]
    fn test_out_of_turn_move_rejected() {
        let mut state = GameState::new(Piece::Computer);
        assert_eq!(
            state.attempt_player_move(3),
            Err(MoveError::NotYourTurn(Piece::Player))
        );
    }

    #[test]
    fn test_player_win_ends_game() {
        let mut state = GameState::new(Piece::Player);
        for col in 0..3 {
            state.attempt_player_move(col).unwrap();
            state.apply_computer_move(col).unwrap();
        }
        let outcome = state.attempt_player_move(3).unwrap();

        assert_eq!(outcome.status, GameStatus::PlayerWins);
        assert_eq!(state.status().winner(), Some(Piece::Player));
        assert!(state.is_terminal());
        assert_eq!(state.apply_computer_move(4), Err(MoveError::GameOver));
    }

    #[test]
    fn test_computer_turn_plays_legal_column() {
        let mut state = GameState::new(Piece::Player);
        state.attempt_player_move(0).unwrap();

        let mut searcher = Searcher::with_depth(2);
        let outcome = state.play_computer_turn(&mut searcher).unwrap();

        assert_eq!(outcome.piece, Piece::Computer);
        assert_eq!(state.board().get(outcome.row, outcome.column), Cell::Computer);
        assert_eq!(state.to_move(), Piece::Player);
    }

    #[test]
    fn test_compute_move_requires_computer_turn() {
        let state = GameState::new(Piece::Player);
        let mut searcher = Searcher::with_depth(1);
        assert_eq!(
            state.compute_computer_move(&mut searcher),
            Err(MoveError::NotYourTurn(Piece::Computer))
        );
    }

    #[test]
    fn test_self_play_reaches_terminal_state() {
        let mut state = GameState::new(Piece::Computer);
        let mut computer = Searcher::with_depth(3);
        let mut turns = 0;

        while !state.is_terminal() {
            match state.to_move() {
                Piece::Computer => {
                    state.play_computer_turn(&mut computer).unwrap();
                }
                Piece::Player => {
                    let col = rules::legal_moves(state.board())[0];
                    state.attempt_player_move(col).unwrap();
                }
            }
            turns += 1;
            assert!(turns <= ROWS * COLS);
        }

        assert!(state.status().is_terminal());
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::InProgress.winner(), None);
        assert_eq!(GameStatus::Draw.winner(), None);
        assert_eq!(GameStatus::ComputerWins.winner(), Some(Piece::Computer));
        assert!(GameStatus::Draw.is_terminal());
        assert!(!GameStatus::InProgress.is_terminal());
    }
}
