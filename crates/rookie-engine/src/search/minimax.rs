//! Fixed-depth minimax with alpha-beta pruning.

use rookie_core::Position;

use crate::eval::Evaluator;
use crate::eval::score::{INF, Score};

/// Search state threaded through minimax calls.
pub(super) struct SearchContext<'a> {
    /// Leaf and terminal scorer.
    pub evaluator: &'a Evaluator,
    /// Total nodes visited.
    pub nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub fn new(evaluator: &'a Evaluator) -> Self {
        Self {
            evaluator,
            nodes: 0,
        }
    }
}

/// Minimax with alpha-beta pruning over White-positive scores.
///
/// `maximizing` is `true` when the node should take the largest child
/// score. Moves are tried in generator order; each is undone before the
/// next is tried, and the loop stops once `beta <= alpha`.
pub(super) fn minimax(
    position: &mut Position,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    ctx: &mut SearchContext<'_>,
) -> Score {
    ctx.nodes += 1;

    if depth == 0 || position.is_game_over() {
        return ctx.evaluator.evaluate(position);
    }

    let mut best = if maximizing { -INF } else { INF };

    for mv in position.legal_moves() {
        let value = {
            let mut child = position.play(mv);
            minimax(&mut child, depth - 1, alpha, beta, !maximizing, ctx)
        };

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(value);
        } else {
            best = best.min(value);
            beta = beta.min(value);
        }

        if beta <= alpha {
            break;
        }
    }

    best
}
