//! Computer opponent: static board evaluation and minimax search.

mod heuristic;
mod search;

pub use heuristic::{Heuristic, WindowHeuristic};
pub use search::{Searcher, TieBreak, SEARCH_DEPTH, WIN_SCORE};
