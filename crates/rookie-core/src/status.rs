//! Game-over classification.

use std::fmt;

use chess::{Board, Color, Piece};

/// Dark squares (a1, c1, ..., b2, d2, ...) as a raw bitboard.
const DARK_SQUARES: u64 = 0xAA55_AA55_AA55_AA55;

/// Halfmove clock value at which the seventy-five-move rule ends the game.
pub const SEVENTY_FIVE_MOVE_PLIES: u16 = 150;

/// Number of occurrences of one position that ends the game.
pub const FIVEFOLD: usize = 5;

/// Whether the game is still running and, if not, why it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The side to move has at least one legal move and no draw rule applies.
    Ongoing,
    /// The side to move is in check with no legal moves.
    Checkmate,
    /// The side to move is not in check but has no legal moves.
    Stalemate,
    /// Neither side has enough material to deliver mate.
    InsufficientMaterial,
    /// 150 plies without a capture or pawn move.
    SeventyFiveMoves,
    /// The same position occurred five times.
    FivefoldRepetition,
}

impl GameStatus {
    /// Return `true` for every status except [`GameStatus::Ongoing`].
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    /// Return `true` if the game ended without a winner.
    #[inline]
    pub fn is_draw(self) -> bool {
        self.is_over() && self != GameStatus::Checkmate
    }

    /// PGN-style result string, given the side to move in the final position.
    pub fn result(self, side_to_move: Color) -> &'static str {
        match self {
            GameStatus::Ongoing => "*",
            GameStatus::Checkmate => match side_to_move {
                Color::White => "0-1",
                Color::Black => "1-0",
            },
            _ => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::InsufficientMaterial => "insufficient material",
            GameStatus::SeventyFiveMoves => "seventy-five-move rule",
            GameStatus::FivefoldRepetition => "fivefold repetition",
        };
        f.write_str(text)
    }
}

/// Return `true` if neither side can possibly checkmate.
pub(crate) fn is_insufficient_material(board: &Board) -> bool {
    has_insufficient_material(board, Color::White) && has_insufficient_material(board, Color::Black)
}

/// Return `true` if `color` cannot deliver mate by any sequence of legal moves.
///
/// A lone king never can. A single knight can only mate with help from
/// enemy pieces other than queens. Bishops can only mate if bishops stand
/// on both square colors or a knight or pawn is on the board.
fn has_insufficient_material(board: &Board, color: Color) -> bool {
    let ours = board.color_combined(color).0;
    let theirs = board.color_combined(!color).0;
    let pawns = board.pieces(Piece::Pawn).0;
    let knights = board.pieces(Piece::Knight).0;
    let bishops = board.pieces(Piece::Bishop).0;
    let rooks = board.pieces(Piece::Rook).0;
    let queens = board.pieces(Piece::Queen).0;
    let kings = board.pieces(Piece::King).0;

    if ours & (pawns | rooks | queens) != 0 {
        return false;
    }

    if ours & knights != 0 {
        return ours.count_ones() <= 2 && theirs & !kings & !queens == 0;
    }

    if ours & bishops != 0 {
        let same_color = bishops & DARK_SQUARES == 0 || bishops & !DARK_SQUARES == 0;
        return same_color && pawns == 0 && knights == 0;
    }

    true
}
