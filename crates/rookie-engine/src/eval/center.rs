//! Center control: occupation of the central squares.

use rookie_core::Position;

use crate::eval::config::EvalConfig;
use crate::eval::score::{Score, color_sign};

/// Bonus per occupied central square, signed by the occupant's color.
pub fn center_control(position: &Position, config: &EvalConfig) -> Score {
    config
        .center_squares
        .iter()
        .filter_map(|&sq| position.piece_at(sq))
        .map(|(_, color)| config.center_bonus * color_sign(color))
        .sum()
}
