//! King safety, reduced to one question: can the side to move still castle?

use rookie_core::Position;

use crate::eval::config::EvalConfig;
use crate::eval::score::{Score, color_sign};

/// Penalize the side to move for having lost every castling right.
///
/// The penalty is signed by the side to move: `-penalty` with White to
/// move, `+penalty` with Black to move, and zero while castling remains.
pub fn king_safety(position: &Position, config: &EvalConfig) -> Score {
    let side = position.side_to_move();
    if position.has_castling_rights(side) {
        0
    } else {
        -config.castling_loss_penalty * color_sign(side)
    }
}
