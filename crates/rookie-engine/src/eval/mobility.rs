//! Mobility: how many legal moves the side to move has.

use rookie_core::Position;

use crate::eval::config::EvalConfig;
use crate::eval::score::{Score, color_sign};

/// Legal move count of the side to move, weighted and signed by the side to move.
///
/// Only the mover's moves are counted; the opponent's mobility does not enter.
pub fn mobility(position: &Position, config: &EvalConfig) -> Score {
    let moves = position.legal_move_count() as Score;
    moves * config.mobility_weight * color_sign(position.side_to_move())
}
