use std::fmt;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CENTER_COL: usize = COLS / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player,
    Computer,
}

/// The playing grid. Row 0 is the bottom row; columns fill upward.
///
/// `Board` is a plain value: search copies it freely, so hypothetical moves
/// never touch the real game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// True iff `col` is on the board and its top cell is still empty.
    pub fn is_valid_drop(&self, col: usize) -> bool {
        col < COLS && self.cells[ROWS - 1][col] == Cell::Empty
    }

    /// Lowest empty row in `col`.
    ///
    /// Callers must check [`Board::is_valid_drop`] first; on a full column
    /// this returns `ROWS`, which is not a valid row.
    pub fn next_open_row(&self, col: usize) -> usize {
        (0..ROWS)
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .unwrap_or(ROWS)
    }

    /// Set a single cell. No validation.
    pub fn drop_piece(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_valid_drop(col))
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let symbol = match self.cells[row][col] {
                    Cell::Empty => '.',
                    Cell::Player => 'X',
                    Cell::Computer => 'O',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
