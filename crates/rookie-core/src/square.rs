//! File, rank and mirror helpers for [`Square`].
//!
//! Squares use Little-Endian Rank-File order: index = rank * 8 + file, so
//! A1 = 0, H1 = 7, A8 = 56.

use chess::{ALL_SQUARES, Square};

/// The four central squares: d4, e4, d5, e5.
pub const CENTER_SQUARES: [Square; 4] = [Square::D4, Square::E4, Square::D5, Square::E5];

/// Zero-based file of `sq` (0 = a-file, 7 = h-file).
#[inline]
pub fn square_file(sq: Square) -> usize {
    sq.get_file().to_index()
}

/// Zero-based rank of `sq` (0 = rank 1, 7 = rank 8).
#[inline]
pub fn square_rank(sq: Square) -> usize {
    sq.get_rank().to_index()
}

/// Mirror `sq` vertically: same file, rank `r` becomes rank `7 - r`.
#[inline]
pub fn square_mirror(sq: Square) -> Square {
    ALL_SQUARES[sq.to_index() ^ 56]
}
