//! Error types for position setup and move parsing.

/// Errors produced while building a [`Position`](crate::Position) or
/// turning user text into a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The FEN string could not be parsed into a legal board.
    #[error("invalid FEN: {fen}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
    },

    /// The text is not UCI move notation (e.g. `e2e4`, `e7e8q`).
    #[error("malformed move: \"{text}\"")]
    MalformedMove {
        /// The text that failed to parse.
        text: String,
    },

    /// The notation is well formed but the move is not legal here.
    #[error("illegal move: {text}")]
    IllegalMove {
        /// The move in UCI notation.
        text: String,
    },
}
