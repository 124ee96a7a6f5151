//! Move validation, move application, and win/draw detection.

use crate::error::IllegalMoveError;

use super::board::{Board, COLS, ROWS};
use super::piece::Piece;
use super::state::GameStatus;

/// Four board coordinates `(row, col)` in a straight line.
pub type Window = [(usize, usize); 4];

/// Every 4-cell window on the board: horizontal, vertical, rising diagonal
/// (`/`) and falling diagonal (`\`), in that order.
pub fn windows() -> impl Iterator<Item = Window> {
    let horizontal = (0..ROWS)
        .flat_map(|row| (0..COLS - 3).map(move |col| line(row, col, 0, 1)));
    let vertical = (0..COLS)
        .flat_map(|col| (0..ROWS - 3).map(move |row| line(row, col, 1, 0)));
    let rising = (0..ROWS - 3)
        .flat_map(|row| (0..COLS - 3).map(move |col| line(row, col, 1, 1)));
    let falling = (3..ROWS)
        .flat_map(|row| (0..COLS - 3).map(move |col| line(row, col, -1, 1)));

    horizontal.chain(vertical).chain(rising).chain(falling)
}

fn line(row: usize, col: usize, d_row: isize, d_col: usize) -> Window {
    let mut window = [(0, 0); 4];
    for (i, cell) in window.iter_mut().enumerate() {
        let r = row as isize + d_row * i as isize;
        *cell = (r as usize, col + d_col * i);
    }
    window
}

/// Columns that can still take a piece, left to right.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    (0..COLS).filter(|&col| board.is_valid_drop(col)).collect()
}

/// Drop `piece` into `col`, returning the row it landed on.
///
/// The board is left untouched when the move is rejected.
pub fn apply_move(board: &mut Board, col: usize, piece: Piece) -> Result<usize, IllegalMoveError> {
    if col >= COLS {
        return Err(IllegalMoveError::OutOfRange { column: col });
    }
    if !board.is_valid_drop(col) {
        return Err(IllegalMoveError::ColumnFull { column: col });
    }

    let row = board.next_open_row(col);
    board.drop_piece(row, col, piece.to_cell());
    Ok(row)
}

/// True if `piece` owns all four cells of any window.
pub fn is_winning_board(board: &Board, piece: Piece) -> bool {
    let cell = piece.to_cell();
    windows().any(|window| window.iter().all(|&(row, col)| board.get(row, col) == cell))
}

/// Board full with no winner.
pub fn is_draw(board: &Board) -> bool {
    legal_moves(board).is_empty()
        && !is_winning_board(board, Piece::Player)
        && !is_winning_board(board, Piece::Computer)
}

/// Derive the game status from the board alone.
pub fn game_status(board: &Board) -> GameStatus {
    if is_winning_board(board, Piece::Computer) {
        GameStatus::ComputerWins
    } else if is_winning_board(board, Piece::Player) {
        GameStatus::PlayerWins
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn place(board: &mut Board, cells: &[(usize, usize)], piece: Piece) {
        for &(row, col) in cells {
            board.drop_piece(row, col, piece.to_cell());
        }
    }

    /// Full board with no four-in-a-row for either side.
    fn drawn_board() -> Board {
        let mut board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                let piece = if (row / 2 + col) % 2 == 0 {
                    Piece::Player
                } else {
                    Piece::Computer
                };
                board.drop_piece(row, col, piece.to_cell());
            }
        }
        board
    }

    fn assert_gravity(board: &Board) {
        for col in 0..COLS {
            let mut seen_empty = false;
            for row in 0..ROWS {
                match board.get(row, col) {
                    Cell::Empty => seen_empty = true,
                    _ => assert!(!seen_empty, "floating piece at ({row}, {col})"),
                }
            }
        }
    }

    #[test]
    fn test_window_count() {
        // 24 horizontal + 21 vertical + 12 + 12 diagonal
        assert_eq!(windows().count(), 69);
    }

    #[test]
    fn test_windows_stay_on_board() {
        for window in windows() {
            for (row, col) in window {
                assert!(row < ROWS && col < COLS);
            }
        }
    }

    #[test]
    fn test_legal_moves_on_empty_board() {
        assert_eq!(legal_moves(&Board::new()), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_legal_moves_skip_full_column() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            apply_move(&mut board, 2, Piece::Player).unwrap();
        }
        assert_eq!(legal_moves(&board), vec![0, 1, 3, 4, 5, 6]);
    }

    #[test]
    fn test_apply_move_returns_landing_row() {
        let mut board = Board::new();
        assert_eq!(apply_move(&mut board, 4, Piece::Player), Ok(0));
        assert_eq!(apply_move(&mut board, 4, Piece::Computer), Ok(1));
        assert_eq!(board.get(0, 4), Cell::Player);
        assert_eq!(board.get(1, 4), Cell::Computer);
    }

    #[test]
    fn test_apply_move_rejects_full_column_without_mutation() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            apply_move(&mut board, 0, Piece::Computer).unwrap();
        }
        let before = board;
        assert_eq!(
            apply_move(&mut board, 0, Piece::Player),
            Err(IllegalMoveError::ColumnFull { column: 0 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            apply_move(&mut board, COLS, Piece::Player),
            Err(IllegalMoveError::OutOfRange { column: COLS })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_random_moves_keep_gravity_and_touch_one_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut board = Board::new();
            let mut piece = Piece::Player;
            loop {
                let legal = legal_moves(&board);
                if legal.is_empty() {
                    break;
                }
                let col = legal[rng.random_range(0..legal.len())];
                let expected_row = board.next_open_row(col);
                let before = board;

                let row = apply_move(&mut board, col, piece).unwrap();
                assert_eq!(row, expected_row);
                for r in 0..ROWS {
                    for c in 0..COLS {
                        if (r, c) == (row, col) {
                            assert_eq!(board.get(r, c), piece.to_cell());
                        } else {
                            assert_eq!(board.get(r, c), before.get(r, c));
                        }
                    }
                }
                assert_gravity(&board);
                piece = piece.other();
            }
        }
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        place(&mut board, &[(2, 1), (2, 2), (2, 3), (2, 4)], Piece::Player);
        assert!(is_winning_board(&board, Piece::Player));
        assert!(!is_winning_board(&board, Piece::Computer));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        place(&mut board, &[(2, 6), (3, 6), (4, 6), (5, 6)], Piece::Computer);
        assert!(is_winning_board(&board, Piece::Computer));
        assert!(!is_winning_board(&board, Piece::Player));
    }

    #[test]
    fn test_rising_diagonal_win() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (1, 1), (2, 2), (3, 3)], Piece::Player);
        assert!(is_winning_board(&board, Piece::Player));
        assert!(!is_winning_board(&board, Piece::Computer));
    }

    #[test]
    fn test_falling_diagonal_win() {
        let mut board = Board::new();
        place(&mut board, &[(5, 3), (4, 4), (3, 5), (2, 6)], Piece::Computer);
        assert!(is_winning_board(&board, Piece::Computer));
        assert!(!is_winning_board(&board, Piece::Player));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (0, 1), (0, 2)], Piece::Player);
        place(&mut board, &[(0, 3)], Piece::Computer);
        assert!(!is_winning_board(&board, Piece::Player));
        assert!(!is_winning_board(&board, Piece::Computer));
    }

    #[test]
    fn test_draw_on_full_board_without_winner() {
        let board = drawn_board();
        assert!(legal_moves(&board).is_empty());
        assert!(!is_winning_board(&board, Piece::Player));
        assert!(!is_winning_board(&board, Piece::Computer));
        assert!(is_draw(&board));
        assert_eq!(game_status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let mut board = drawn_board();
        place(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3)], Piece::Computer);
        assert!(!is_draw(&board));
        assert_eq!(game_status(&board), GameStatus::ComputerWins);
    }

    #[test]
    fn test_game_status_in_progress() {
        let mut board = Board::new();
        apply_move(&mut board, 3, Piece::Player).unwrap();
        assert_eq!(game_status(&board), GameStatus::InProgress);
        assert!(!is_draw(&board));
    }
}
