//! Evaluation weights.

use rookie_core::{CENTER_SQUARES, Piece, Square};

use crate::eval::score::{SCALE, Score};

/// Pawn piece-square table in LERF order (index 0 = A1), White's view.
///
/// Entries are already multiplied by [`SCALE`].
#[rustfmt::skip]
pub const PAWN_TABLE: [Score; 64] = [
    // Rank 1 (indices 0-7)
      0,   50,  100,  150,  150,  100,   50,    0,
    // Rank 2 (indices 8-15)
     50,  100,  150,  250,  250,  150,  100,   50,
    // Rank 3 (indices 16-23)
      0,   50,  100,  200,  200,  100,   50,    0,
    // Rank 4 (indices 24-31)
      0,    0,    0,  150,  150,    0,    0,    0,
    // Rank 5 (indices 32-39)
      0,    0,    0, -150, -150,    0,    0,    0,
    // Rank 6 (indices 40-47)
      0,  -50, -100, -200, -200, -100,  -50,    0,
    // Rank 7 (indices 48-55)
     50, -100, -100, -200, -200, -100, -100,   50,
    // Rank 8 (indices 56-63)
      0,    0,    0,    0,    0,    0,    0,    0,
];

/// All tunable constants of the evaluator.
///
/// [`EvalConfig::default`] reproduces the classic weights: pawn 100,
/// knight 300, bishop 300, rook 500, queen 1100, king 2000, mobility 0.1
/// per move, castling loss 0.5, doubled and isolated pawns 0.5 each,
/// center occupation 0.2; all multiplied by [`SCALE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalConfig {
    /// Material value per piece, indexed by `Piece::to_index()`
    /// (pawn, knight, bishop, rook, queen, king).
    pub piece_values: [Score; 6],
    /// Bonus per legal move of the side to move.
    pub mobility_weight: Score,
    /// Penalty when the side to move has no castling rights left.
    pub castling_loss_penalty: Score,
    /// Penalty per pawn sharing its file with a friendly pawn.
    pub doubled_pawn_penalty: Score,
    /// Penalty per pawn with no friendly pawn on an adjacent file.
    pub isolated_pawn_penalty: Score,
    /// Bonus per occupied central square, by occupant color.
    pub center_bonus: Score,
    /// Squares that earn [`EvalConfig::center_bonus`].
    pub center_squares: Vec<Square>,
    /// Pawn piece-square table, White's view, LERF order.
    pub pawn_table: [Score; 64],
    /// Whether the pawn table term is part of the total.
    pub use_pawn_table: bool,
}

impl EvalConfig {
    /// Material value of `piece`.
    #[inline]
    pub fn piece_value(&self, piece: Piece) -> Score {
        self.piece_values[piece.to_index()]
    }

    /// Return this configuration with the pawn table term switched on or off.
    pub fn with_pawn_table(mut self, enabled: bool) -> Self {
        self.use_pawn_table = enabled;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            piece_values: [
                100 * SCALE,  // Pawn
                300 * SCALE,  // Knight
                300 * SCALE,  // Bishop
                500 * SCALE,  // Rook
                1100 * SCALE, // Queen
                2000 * SCALE, // King
            ],
            mobility_weight: 1,
            castling_loss_penalty: 5,
            doubled_pawn_penalty: 5,
            isolated_pawn_penalty: 5,
            center_bonus: 2,
            center_squares: CENTER_SQUARES.to_vec(),
            pawn_table: PAWN_TABLE,
            use_pawn_table: false,
        }
    }
}
