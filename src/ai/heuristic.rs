use crate::game::{windows, Board, Piece, CENTER_COL, ROWS};

/// Trait for evaluating a board position from a piece's perspective.
///
/// Only the relative order of sibling scores matters to the search.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, piece: Piece) -> i64;
}

/// Default heuristic: scores every 4-cell window plus a center-column bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    pub const FOUR: i64 = 100;
    pub const THREE: i64 = 5;
    pub const TWO: i64 = 2;
    pub const OPPONENT_THREE: i64 = -4;
    pub const CENTER: i64 = 3;

    fn score_window(own: usize, opp: usize, empty: usize) -> i64 {
        let mut score = if own == 4 {
            Self::FOUR
        } else if own == 3 && empty == 1 {
            Self::THREE
        } else if own == 2 && empty == 2 {
            Self::TWO
        } else {
            0
        };

        // independent of the branches above
        if opp == 3 && empty == 1 {
            score += Self::OPPONENT_THREE;
        }

        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, piece: Piece) -> i64 {
        let own_cell = piece.to_cell();
        let opp_cell = piece.other().to_cell();

        let center = (0..ROWS)
            .filter(|&row| board.get(row, CENTER_COL) == own_cell)
            .count() as i64;
        let mut score = center * Self::CENTER;

        for window in windows() {
            let mut own = 0;
            let mut opp = 0;
            let mut empty = 0;
            for (row, col) in window {
                match board.get(row, col) {
                    c if c == own_cell => own += 1,
                    c if c == opp_cell => opp += 1,
                    _ => empty += 1,
                }
            }
            score += Self::score_window(own, opp, empty);
        }

        score
    }
}
