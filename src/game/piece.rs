use super::board::Cell;

/// The two sides of a game. Also selects whose score the evaluator computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Player,
    Computer,
}

impl Piece {
    /// Get the opposing piece
    pub fn other(self) -> Piece {
        match self {
            Piece::Player => Piece::Computer,
            Piece::Computer => Piece::Player,
        }
    }

    /// Convert piece to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Piece::Player => Cell::Player,
            Piece::Computer => Cell::Computer,
        }
    }

    /// Get piece name for display
    pub fn name(self) -> &'static str {
        match self {
            Piece::Player => "Player",
            Piece::Computer => "Computer",
        }
    }
}
