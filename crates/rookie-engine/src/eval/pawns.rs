//! Pawn structure: doubled and isolated pawns.

use rookie_core::{ALL_COLORS, Color, Piece, Position, square_file};

use crate::eval::config::EvalConfig;
use crate::eval::score::{Score, color_sign};

/// Count friendly pawns on each file for one side.
fn file_counts(position: &Position, color: Color) -> [u8; 8] {
    let mut counts = [0u8; 8];
    for sq in position.pieces(Piece::Pawn, color) {
        counts[square_file(sq)] += 1;
    }
    counts
}

/// Penalties for one side's pawns, as a non-positive number.
fn penalties_for_side(position: &Position, color: Color, config: &EvalConfig) -> Score {
    let counts = file_counts(position, color);
    let mut score = 0;

    for sq in position.pieces(Piece::Pawn, color) {
        let file = square_file(sq);

        if counts[file] > 1 {
            score -= config.doubled_pawn_penalty;
        }

        let left = file.checked_sub(1).map_or(0, |f| counts[f]);
        let right = counts.get(file + 1).copied().unwrap_or(0);
        if left == 0 && right == 0 {
            score -= config.isolated_pawn_penalty;
        }
    }

    score
}

/// Evaluate pawn structure for both sides, signed by the side to move.
///
/// Every doubled or isolated pawn of *either* color adds a penalty; the
/// combined total is then multiplied by the side-to-move sign, so the
/// term does not distinguish whose pawns are weak.
pub fn pawn_structure(position: &Position, config: &EvalConfig) -> Score {
    let total: Score = ALL_COLORS
        .iter()
        .map(|&color| penalties_for_side(position, color, config))
        .sum();
    total * color_sign(position.side_to_move())
}

#[cfg(test)]
mod tests {
    use rookie_core::Position;

    use super::pawn_structure;
    use crate::eval::config::EvalConfig;

    #[test]
    fn starting_position_is_clean() {
        let config = EvalConfig::default();
        assert_eq!(pawn_structure(&Position::starting_position(), &config), 0);
    }

    #[test]
    fn doubled_pawns_each_penalized() {
        let config = EvalConfig::default();
        // White e2/e3 doubled, supported by the d2 pawn so neither is isolated.
        let pos: Position = "4k3/8/8/8/8/4P3/3PP3/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(pawn_structure(&pos, &config), -10);
    }

    #[test]
    fn isolated_pawn_penalized() {
        let config = EvalConfig::default();
        // Lone a-pawn for White.
        let pos: Position = "4k3/8/8/8/8/8/P7/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(pawn_structure(&pos, &config), -5);
    }

    #[test]
    fn doubled_and_isolated_stack() {
        let config = EvalConfig::default();
        // White h2/h3: both doubled and both isolated.
        let pos: Position = "4k3/8/8/8/8/7P/7P/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(pawn_structure(&pos, &config), -20);
    }

    #[test]
    fn black_weakness_with_black_to_move_is_positive() {
        let config = EvalConfig::default();
        // Lone Black a-pawn, Black to move: the penalty flips sign.
        let pos: Position = "4k3/p7/8/8/8/8/8/4K3 b - - 0 1".parse().unwrap();
        assert_eq!(pawn_structure(&pos, &config), 5);
    }

    #[test]
    fn black_weakness_with_white_to_move_is_negative() {
        let config = EvalConfig::default();
        let pos: Position = "4k3/p7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(pawn_structure(&pos, &config), -5);
    }
}
