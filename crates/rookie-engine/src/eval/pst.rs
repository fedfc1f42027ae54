//! Pawn piece-square bonus.
//!
//! The table is defined from White's perspective; Black pawns look up the
//! vertically mirrored square and contribute with the opposite sign.

use rookie_core::{ALL_COLORS, Color, Piece, Position, Square, square_mirror};

use crate::eval::config::EvalConfig;
use crate::eval::score::{Score, color_sign};

/// Signed table bonus for a pawn of `color` on `sq`.
#[inline]
pub fn pawn_square_bonus(config: &EvalConfig, color: Color, sq: Square) -> Score {
    let idx = match color {
        Color::White => sq.to_index(),
        Color::Black => square_mirror(sq).to_index(),
    };
    config.pawn_table[idx] * color_sign(color)
}

/// Sum of [`pawn_square_bonus`] over every pawn on the board.
pub fn pawn_table(position: &Position, config: &EvalConfig) -> Score {
    ALL_COLORS
        .iter()
        .flat_map(|&color| {
            position
                .pieces(Piece::Pawn, color)
                .map(move |sq| pawn_square_bonus(config, color, sq))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use rookie_core::{Color, Position, Square};

    use super::{pawn_square_bonus, pawn_table};
    use crate::eval::config::EvalConfig;

    #[test]
    fn white_e2() {
        let config = EvalConfig::default();
        // E2 is LERF index 12.
        assert_eq!(pawn_square_bonus(&config, Color::White, Square::E2), 250);
    }

    #[test]
    fn black_mirrors_white() {
        let config = EvalConfig::default();
        let white_e2 = pawn_square_bonus(&config, Color::White, Square::E2);
        let black_e7 = pawn_square_bonus(&config, Color::Black, Square::E7);
        assert_eq!(black_e7, -white_e2);
    }

    #[test]
    fn starting_position_is_symmetric() {
        let config = EvalConfig::default();
        assert_eq!(pawn_table(&Position::starting_position(), &config), 0);
    }

    #[test]
    fn single_white_pawn() {
        let config = EvalConfig::default();
        // d5 is LERF index 35.
        let pos: Position = "4k3/8/8/3P4/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(pawn_table(&pos, &config), -150);
    }
}
