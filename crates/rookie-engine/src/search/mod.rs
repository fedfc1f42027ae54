//! Move selection by fixed-depth game-tree search.

mod minimax;

use std::time::Instant;

use rookie_core::{Color, Move, Position};
use tracing::{debug, trace};

use crate::eval::Evaluator;
use crate::eval::score::{INF, Score};
use minimax::SearchContext;

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, or `None` when the position has no legal moves.
    pub best_move: Option<Move>,
    /// Score of the best move, White-positive. Stays at the starting
    /// sentinel (`-INF` for White, `INF` for Black) when no move was scored.
    pub score: Score,
    /// Total nodes visited, root included.
    pub nodes: u64,
    /// Requested depth.
    pub depth: u8,
}

/// Fixed-depth minimax searcher.
///
/// Searches mutate the position in place and restore it before
/// returning; the caller must hand over exclusive access for the call.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    evaluator: Evaluator,
}

impl Searcher {
    /// Create a searcher scoring leaves with `evaluator`.
    pub fn new(evaluator: Evaluator) -> Self {
        Self { evaluator }
    }

    /// The evaluator used at leaves and terminal nodes.
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Return the best move at `depth` plies, or `None` if there are no
    /// legal moves.
    ///
    /// Callers are expected to pass `depth >= 1` and a position that is
    /// not already over.
    pub fn find_best_move(&self, position: &mut Position, depth: u8) -> Option<Move> {
        self.search(position, depth).best_move
    }

    /// Minimax with alpha-beta pruning from `position`, `depth` plies deep.
    ///
    /// Scores are White-positive; pass `maximizing = true` for nodes where
    /// White is to move.
    pub fn minimax(
        &self,
        position: &mut Position,
        depth: u8,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> Score {
        let mut ctx = SearchContext::new(&self.evaluator);
        minimax::minimax(position, depth, alpha, beta, maximizing, &mut ctx)
    }

    /// Search every root move and report the best one with its score.
    ///
    /// White maximizes and Black minimizes. Root moves are compared with
    /// strict inequality, so the first of equally scored moves wins.
    /// A `depth` of zero scores each root move by static evaluation.
    pub fn search(&self, position: &mut Position, depth: u8) -> SearchResult {
        let start = Instant::now();
        let mut ctx = SearchContext::new(&self.evaluator);
        let root_maximizing = position.side_to_move() == Color::White;

        let mut best_move = None;
        let mut best_score = if root_maximizing { -INF } else { INF };

        ctx.nodes += 1;
        for mv in position.legal_moves() {
            let score = {
                let mut child = position.play(mv);
                let maximizing = child.side_to_move() == Color::White;
                minimax::minimax(
                    &mut child,
                    depth.saturating_sub(1),
                    -INF,
                    INF,
                    maximizing,
                    &mut ctx,
                )
            };
            trace!(mv = %mv, score, "root move scored");

            let improves = if root_maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_move = Some(mv);
            }
        }

        if best_move.is_none() {
            best_move = position.legal_moves().first().copied();
        }

        debug!(
            depth,
            nodes = ctx.nodes,
            score = best_score,
            best = ?best_move.map(|mv| mv.to_string()),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search complete"
        );

        SearchResult {
            best_move,
            score: best_score,
            nodes: ctx.nodes,
            depth,
        }
    }
}
