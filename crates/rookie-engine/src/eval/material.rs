//! Material balance.
//!
//! Sums piece values over the whole board, White positive and Black
//! negative. Kings are counted too, so they always cancel in legal
//! positions.

use rookie_core::{ALL_COLORS, ALL_PIECES, Position};

use crate::eval::config::EvalConfig;
use crate::eval::score::{Score, color_sign};

/// Evaluate material balance from White's perspective.
pub fn material(position: &Position, config: &EvalConfig) -> Score {
    let mut score = 0;
    for color in ALL_COLORS {
        for piece in ALL_PIECES {
            let count = position.pieces(piece, color).count() as Score;
            score += color_sign(color) * config.piece_value(piece) * count;
        }
    }
    score
}
