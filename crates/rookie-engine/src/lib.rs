//! Evaluation and search for rookie.

pub mod eval;
pub mod search;

pub use eval::config::EvalConfig;
pub use eval::score::{INF, MATE_SCORE, Score};
pub use eval::{Breakdown, Evaluator, evaluate};
pub use search::{SearchResult, Searcher};
