//! Rules-engine adapter: positions with move undo, game-over detection,
//! square helpers and board rendering, on top of the `chess` crate.

mod error;
mod position;
mod pretty;
mod square;
mod status;

pub use chess::{ALL_COLORS, ALL_PIECES, ALL_SQUARES, Board, ChessMove as Move, Color, Piece, Square};
pub use error::PositionError;
pub use position::{Played, Position};
pub use pretty::PrettyBoard;
pub use square::{CENTER_SQUARES, square_file, square_mirror, square_rank};
pub use status::GameStatus;

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
