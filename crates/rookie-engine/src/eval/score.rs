//! Score type and sentinels.
//!
//! Scores are integers in tenths of a point (a pawn is 1000), positive
//! when White is better. Every heuristic weight is an exact multiple of
//! this unit, so sums never drift.

use rookie_core::Color;

/// Evaluation score, positive = White advantage.
pub type Score = i32;

/// Score units per point of the classic scale (pawn = 100 points).
pub const SCALE: Score = 10;

/// Magnitude of a checkmate score.
///
/// Larger than any finite material plus positional sum: even nine queens
/// and both kings stay well below 200_000.
pub const MATE_SCORE: Score = 1_000_000;

/// Search bound strictly outside every reachable score, mates included.
pub const INF: Score = 2 * MATE_SCORE;

/// `+1` for White, `-1` for Black.
#[inline]
pub fn color_sign(color: Color) -> Score {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Return `true` if `score` is a checkmate sentinel.
#[inline]
pub fn is_mate(score: Score) -> bool {
    score.abs() == MATE_SCORE
}
