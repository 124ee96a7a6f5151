use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::game::{apply_move, is_winning_board, legal_moves, Board, Piece};

use super::heuristic::{Heuristic, WindowHeuristic};

/// Plies searched for the computer's move, counting the root drop.
pub const SEARCH_DEPTH: usize = 4;

/// Magnitude returned for a decided game. Dominates any heuristic score.
pub const WIN_SCORE: i64 = 100_000_000_000_000;

/// How the root picks among columns that share the best score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Leftmost of the equal-best columns.
    #[default]
    FirstBest,
    /// Uniformly random among the equal-best columns.
    Random,
}

/// Depth-bounded minimax with alpha-beta pruning, always searching for the
/// computer. The player is the minimizing side.
pub struct Searcher {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    tie_break: TieBreak,
    rng: StdRng,
}

impl Searcher {
    pub fn new() -> Self {
        Self::with_depth(SEARCH_DEPTH)
    }

    pub fn with_depth(depth: usize) -> Self {
        Self::with_heuristic(depth, Box::new(WindowHeuristic))
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        assert!(depth >= 1, "search depth must be at least 1");
        Searcher {
            depth,
            heuristic,
            tie_break: TieBreak::FirstBest,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Set the root tie-break policy. `seed` makes random tie-breaks
    /// reproducible.
    pub fn with_tie_break(mut self, tie_break: TieBreak, seed: Option<u64>) -> Self {
        self.tie_break = tie_break;
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Column the computer should play.
    ///
    /// # Panics
    ///
    /// If `board` has no legal moves. Callers check for a terminal board first.
    pub fn choose_move(&mut self, board: &Board) -> usize {
        let scores = self.root_scores(board);
        assert!(!scores.is_empty(), "No legal actions available");

        let best_score = scores
            .iter()
            .map(|&(_, score)| score)
            .max()
            .unwrap_or(i64::MIN);
        let best: Vec<usize> = scores
            .iter()
            .filter(|&&(_, score)| score == best_score)
            .map(|&(col, _)| col)
            .collect();

        let col = match self.tie_break {
            TieBreak::FirstBest => best[0],
            TieBreak::Random => best[self.rng.random_range(0..best.len())],
        };

        debug!(?scores, best_score, col, "computer move chosen");
        col
    }

    /// Score of each legal column after the computer drops there, left to right.
    pub fn root_scores(&self, board: &Board) -> Vec<(usize, i64)> {
        legal_moves(board)
            .into_iter()
            .map(|col| {
                let mut next = *board;
                // legal_moves only yields droppable columns
                let _ = apply_move(&mut next, col, Piece::Computer);
                let score = self.minimax(&next, self.depth - 1, i64::MIN, i64::MAX, false);
                (col, score)
            })
            .collect()
    }

    /// Minimax value of `board` searched `depth` more plies.
    ///
    /// `maximizing` is true when the computer is to move. Pruning never
    /// changes the returned value.
    pub fn minimax(
        &self,
        board: &Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> i64 {
        let computer_won = is_winning_board(board, Piece::Computer);
        let player_won = is_winning_board(board, Piece::Player);
        let legal = legal_moves(board);

        if depth == 0 || computer_won || player_won || legal.is_empty() {
            return if computer_won {
                WIN_SCORE
            } else if player_won {
                -WIN_SCORE
            } else {
                self.heuristic.evaluate(board, Piece::Computer)
            };
        }

        let piece = if maximizing {
            Piece::Computer
        } else {
            Piece::Player
        };
        let mut best = if maximizing { i64::MIN } else { i64::MAX };

        for col in legal {
            let mut next = *board;
            let _ = apply_move(&mut next, col, piece);
            let score = self.minimax(&next, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
