//! Unicode board rendering with file letters and rank numbers.

use std::fmt;

use chess::{ALL_SQUARES, Color, Piece};

use crate::position::Position;

/// Glyph for a piece: outlined figurines for White, filled for Black.
fn glyph(piece: Piece, color: Color) -> char {
    match (color, piece) {
        (Color::White, Piece::Pawn) => '♙',
        (Color::White, Piece::Knight) => '♘',
        (Color::White, Piece::Bishop) => '♗',
        (Color::White, Piece::Rook) => '♖',
        (Color::White, Piece::Queen) => '♕',
        (Color::White, Piece::King) => '♔',
        (Color::Black, Piece::Pawn) => '♟',
        (Color::Black, Piece::Knight) => '♞',
        (Color::Black, Piece::Bishop) => '♝',
        (Color::Black, Piece::Rook) => '♜',
        (Color::Black, Piece::Queen) => '♛',
        (Color::Black, Piece::King) => '♚',
    }
}

/// Wrapper for pretty-printing a position as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a Position);

impl<'a> PrettyBoard<'a> {
    pub(crate) fn new(position: &'a Position) -> Self {
        PrettyBoard(position)
    }
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.0;
        writeln!(f, "    a  b  c  d  e  f  g  h ")?;
        writeln!(f, "   ------------------------")?;
        for rank_idx in (0..8).rev() {
            write!(f, "{} | ", rank_idx + 1)?;
            for file_idx in 0..8 {
                let sq = ALL_SQUARES[rank_idx * 8 + file_idx];
                let c = match position.piece_at(sq) {
                    Some((piece, color)) => glyph(piece, color),
                    None => '·',
                };
                write!(f, "{c}  ")?;
            }
            writeln!(f, "| {}", rank_idx + 1)?;
        }
        writeln!(f, "   ------------------------")?;
        write!(f, "    a  b  c  d  e  f  g  h ")
    }
}

#[cfg(test)]
mod tests {
    use crate::position::Position;

    #[test]
    fn starting_position_rows() {
        let pos = Position::starting_position();
        let output = format!("{}", pos.pretty());
        assert!(output.contains("8 | ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜  | 8"));
        assert!(output.contains("1 | ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖  | 1"));
        assert!(output.contains("4 | ·  ·  ·  ·  ·  ·  ·  ·  | 4"));
        assert!(output.starts_with("    a  b  c  d  e  f  g  h"));
    }

    #[test]
    fn rank_eight_is_printed_first() {
        let pos = Position::starting_position();
        let output = format!("{}", pos.pretty());
        let eight = output.find("8 |").unwrap();
        let one = output.find("1 |").unwrap();
        assert!(eight < one);
    }
}
