//! Mutable game state with an apply/undo stack.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use chess::{Board, BoardStatus, CastleRights, ChessMove, Color, MoveGen, Piece, Square};
use tracing::trace;

use crate::error::PositionError;
use crate::pretty::PrettyBoard;
use crate::status::{self, FIVEFOLD, GameStatus, SEVENTY_FIVE_MOVE_PLIES};

/// State saved by [`Position::push`] and restored by [`Position::pop`].
#[derive(Clone, Copy, PartialEq, Eq)]
struct Undo {
    board: Board,
    mv: ChessMove,
    halfmove_clock: u16,
}

/// A chess game in progress: the current board plus everything needed to
/// take moves back and to detect draws by rule.
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    /// Plies since the last capture or pawn move.
    halfmove_clock: u16,
    /// One entry per applied move, oldest first.
    history: Vec<Undo>,
}

impl Position {
    /// Return the standard starting position.
    pub fn starting_position() -> Position {
        Position::from_board(Board::default())
    }

    /// Wrap a board with an empty history and a zero halfmove clock.
    pub fn from_board(board: Board) -> Position {
        Position {
            board,
            halfmove_clock: 0,
            history: Vec::new(),
        }
    }

    /// Borrow the underlying board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Return the halfmove clock.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Number of moves applied since this position was created.
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// The most recently applied move, if any.
    pub fn last_move(&self) -> Option<ChessMove> {
        self.history.last().map(|undo| undo.mv)
    }

    /// Legal moves in generator order.
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    /// Number of legal moves for the side to move.
    pub fn legal_move_count(&self) -> usize {
        MoveGen::new_legal(&self.board).len()
    }

    /// Return `true` if `mv` is legal in this position.
    pub fn is_legal(&self, mv: ChessMove) -> bool {
        self.board.legal(mv)
    }

    /// Apply `mv`, which must be legal.
    pub fn push(&mut self, mv: ChessMove) {
        debug_assert!(self.board.legal(mv), "push called with illegal move {mv}");

        let resets_clock = self.board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            || self.board.piece_on(mv.get_dest()).is_some();

        self.history.push(Undo {
            board: self.board,
            mv,
            halfmove_clock: self.halfmove_clock,
        });
        self.board = self.board.make_move_new(mv);
        self.halfmove_clock = if resets_clock {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
    }

    /// Take back the most recent move, returning it.
    ///
    /// Returns `None` (and changes nothing) when no move has been applied.
    pub fn pop(&mut self) -> Option<ChessMove> {
        let undo = self.history.pop()?;
        self.board = undo.board;
        self.halfmove_clock = undo.halfmove_clock;
        Some(undo.mv)
    }

    /// Apply `mv` for the lifetime of the returned guard.
    ///
    /// The guard dereferences to this position and takes the move back when
    /// dropped, so the position is restored on every exit path.
    pub fn play(&mut self, mv: ChessMove) -> Played<'_> {
        self.push(mv);
        Played { position: self }
    }

    /// Classify the position as ongoing or finished.
    pub fn status(&self) -> GameStatus {
        match self.board.status() {
            BoardStatus::Checkmate => GameStatus::Checkmate,
            BoardStatus::Stalemate => GameStatus::Stalemate,
            BoardStatus::Ongoing => {
                if status::is_insufficient_material(&self.board) {
                    GameStatus::InsufficientMaterial
                } else if self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES {
                    GameStatus::SeventyFiveMoves
                } else if self.repetitions() >= FIVEFOLD {
                    GameStatus::FivefoldRepetition
                } else {
                    GameStatus::Ongoing
                }
            }
        }
    }

    /// Return `true` if the game has ended for any reason.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    /// Return `true` if the side to move is checkmated.
    pub fn is_checkmate(&self) -> bool {
        self.board.status() == BoardStatus::Checkmate
    }

    /// Return `true` if the side to move is stalemated.
    pub fn is_stalemate(&self) -> bool {
        self.board.status() == BoardStatus::Stalemate
    }

    /// Return `true` if neither side has mating material.
    pub fn is_insufficient_material(&self) -> bool {
        status::is_insufficient_material(&self.board)
    }

    /// Return `true` if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.board.checkers().popcnt() > 0
    }

    /// How many times the current position has occurred, counting now.
    ///
    /// Only positions since the last irreversible move are compared.
    pub fn repetitions(&self) -> usize {
        let hash = self.board.get_hash();
        let earlier = self
            .history
            .iter()
            .rev()
            .take(self.halfmove_clock as usize)
            .filter(|undo| undo.board.get_hash() == hash)
            .count();
        earlier + 1
    }

    /// Return the piece and its color on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        let piece = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some((piece, color))
    }

    /// Iterate over the squares holding `piece` of `color`.
    pub fn pieces(&self, piece: Piece, color: Color) -> impl Iterator<Item = Square> + use<> {
        *self.board.pieces(piece) & *self.board.color_combined(color)
    }

    /// Return `true` if `color` may still castle on either side.
    pub fn has_castling_rights(&self, color: Color) -> bool {
        self.board.castle_rights(color) != CastleRights::NoRights
    }

    /// Parse UCI notation (`e2e4`, `e7e8q`) into a legal move of this position.
    pub fn parse_uci(&self, text: &str) -> Result<ChessMove, PositionError> {
        let text = text.trim();
        if !is_uci_notation(text) {
            return Err(PositionError::MalformedMove {
                text: text.to_string(),
            });
        }

        let wanted = text.to_ascii_lowercase();
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.to_string() == wanted)
            .ok_or_else(|| PositionError::IllegalMove { text: wanted.clone() })
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard::new(self)
    }
}

/// Check the shape of a UCI move: two squares and an optional promotion piece.
fn is_uci_notation(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return false;
    }
    let is_square = |file: u8, rank: u8| {
        (b'a'..=b'h').contains(&file.to_ascii_lowercase()) && (b'1'..=b'8').contains(&rank)
    };
    let promotion_ok = bytes
        .get(4)
        .is_none_or(|p| matches!(p.to_ascii_lowercase(), b'n' | b'b' | b'r' | b'q'));
    is_square(bytes[0], bytes[1]) && is_square(bytes[2], bytes[3]) && promotion_ok
}

impl Default for Position {
    fn default() -> Self {
        Position::starting_position()
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Parse a FEN string. The halfmove clock field is honored; the
    /// history starts empty.
    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidFen {
            fen: fen.to_string(),
        };

        let board = Board::from_str(fen).map_err(|_| invalid())?;
        let halfmove_clock = match fen.split_whitespace().nth(4) {
            Some(field) => field.parse::<u16>().map_err(|_| invalid())?,
            None => 0,
        };

        trace!(%fen, halfmove_clock, "position parsed");
        Ok(Position {
            board,
            halfmove_clock,
            history: Vec::new(),
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position(\"{}\", halfmove_clock: {}, ply: {})",
            self.board,
            self.halfmove_clock,
            self.history.len()
        )
    }
}

/// A move applied by [`Position::play`]; undone on drop.
pub struct Played<'a> {
    position: &'a mut Position,
}

impl Played<'_> {
    /// The move this guard applied.
    pub fn mv(&self) -> Option<ChessMove> {
        self.position.last_move()
    }
}

impl Deref for Played<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for Played<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for Played<'_> {
    fn drop(&mut self) {
        self.position.pop();
    }
}

#[cfg(test)]
mod tests {
    use chess::{Color, Piece, Square};

    use super::Position;
    use crate::error::PositionError;
    use crate::status::GameStatus;

    #[test]
    fn starting_position_has_twenty_moves() {
        let pos = Position::starting_position();
        assert_eq!(pos.legal_moves().len(), 20);
        assert_eq!(pos.legal_move_count(), 20);
        assert_eq!(pos.side_to_move(), Color::White);
    }

    #[test]
    fn push_then_pop_restores_everything() {
        let mut pos = Position::starting_position();
        let before = pos.clone();
        let mv = pos.parse_uci("e2e4").unwrap();
        pos.push(mv);
        assert_ne!(pos, before);
        assert_eq!(pos.side_to_move(), Color::Black);
        assert_eq!(pos.pop(), Some(mv));
        assert_eq!(pos, before);
    }

    #[test]
    fn pop_on_fresh_position_is_none() {
        let mut pos = Position::starting_position();
        assert_eq!(pos.pop(), None);
        assert_eq!(pos, Position::starting_position());
    }

    #[test]
    fn played_guard_undoes_on_drop() {
        let mut pos = Position::starting_position();
        let before = pos.clone();
        let mv = pos.parse_uci("g1f3").unwrap();
        {
            let child = pos.play(mv);
            assert_eq!(child.side_to_move(), Color::Black);
            assert_eq!(child.mv(), Some(mv));
            assert_eq!(child.piece_at(Square::F3), Some((Piece::Knight, Color::White)));
        }
        assert_eq!(pos, before);
    }

    #[test]
    fn nested_guards_unwind_in_order() {
        let mut pos = Position::starting_position();
        let before = pos.clone();
        let e4 = pos.parse_uci("e2e4").unwrap();
        {
            let mut child = pos.play(e4);
            let e5 = child.parse_uci("e7e5").unwrap();
            let grandchild = child.play(e5);
            assert_eq!(grandchild.ply(), 2);
        }
        assert_eq!(pos, before);
    }

    #[test]
    fn halfmove_clock_resets_on_pawn_move() {
        let mut pos = Position::starting_position();
        pos.push(pos.parse_uci("g1f3").unwrap());
        assert_eq!(pos.halfmove_clock(), 1);
        pos.push(pos.parse_uci("e7e5").unwrap());
        assert_eq!(pos.halfmove_clock(), 0);
    }

    #[test]
    fn fen_halfmove_clock_is_read() {
        let pos: Position = "4k3/8/8/8/8/8/8/R3K3 w - - 37 60".parse().unwrap();
        assert_eq!(pos.halfmove_clock(), 37);
    }

    #[test]
    fn bad_fen_is_rejected() {
        let err = "not a fen".parse::<Position>().unwrap_err();
        assert!(matches!(err, PositionError::InvalidFen { .. }));
    }

    #[test]
    fn parse_uci_distinguishes_malformed_and_illegal() {
        let pos = Position::starting_position();
        assert!(matches!(
            pos.parse_uci("e2"),
            Err(PositionError::MalformedMove { .. })
        ));
        assert!(matches!(
            pos.parse_uci("z9e4"),
            Err(PositionError::MalformedMove { .. })
        ));
        assert!(matches!(
            pos.parse_uci("e2e5"),
            Err(PositionError::IllegalMove { .. })
        ));
        assert!(pos.parse_uci("E2E4").is_ok());
    }

    #[test]
    fn parse_uci_promotion() {
        let pos: Position = "8/4P2k/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let mv = pos.parse_uci("e7e8q").unwrap();
        assert_eq!(mv.get_promotion(), Some(Piece::Queen));
        assert!(matches!(
            pos.parse_uci("e7e8"),
            Err(PositionError::IllegalMove { .. })
        ));
    }

    #[test]
    fn checkmate_status() {
        let pos: Position = "7k/6Q1/5K2/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert_eq!(pos.status(), GameStatus::Checkmate);
        assert!(pos.is_checkmate());
        assert!(pos.is_check());
        assert!(pos.legal_moves().is_empty());
    }

    #[test]
    fn stalemate_status() {
        let pos: Position = "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert_eq!(pos.status(), GameStatus::Stalemate);
        assert!(pos.is_stalemate());
    }

    #[test]
    fn insufficient_material_status() {
        let pos: Position = "8/8/4k3/8/8/3KN3/8/8 w - - 0 1".parse().unwrap();
        assert_eq!(pos.status(), GameStatus::InsufficientMaterial);
        assert!(pos.is_insufficient_material());
    }

    #[test]
    fn seventy_five_move_rule() {
        let pos: Position = "4k3/8/8/8/8/8/8/R3K3 w - - 150 120".parse().unwrap();
        assert_eq!(pos.status(), GameStatus::SeventyFiveMoves);
    }

    #[test]
    fn fivefold_repetition() {
        let mut pos = Position::starting_position();
        for _ in 0..4 {
            for uci in ["g1f3", "g8f6", "f3g1", "f6g8"] {
                let mv = pos.parse_uci(uci).unwrap();
                pos.push(mv);
            }
        }
        assert_eq!(pos.repetitions(), 5);
        assert_eq!(pos.status(), GameStatus::FivefoldRepetition);
        pos.pop();
        assert_eq!(pos.status(), GameStatus::Ongoing);
    }

    #[test]
    fn piece_queries() {
        let pos = Position::starting_position();
        assert_eq!(pos.piece_at(Square::E1), Some((Piece::King, Color::White)));
        assert_eq!(pos.piece_at(Square::D8), Some((Piece::Queen, Color::Black)));
        assert_eq!(pos.piece_at(Square::E4), None);
        assert_eq!(pos.pieces(Piece::Pawn, Color::White).count(), 8);
        assert_eq!(pos.pieces(Piece::Knight, Color::Black).count(), 2);
    }

    #[test]
    fn castling_rights_query() {
        let pos = Position::starting_position();
        assert!(pos.has_castling_rights(Color::White));
        let pos: Position = "r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1".parse().unwrap();
        assert!(!pos.has_castling_rights(Color::White));
        assert!(pos.has_castling_rights(Color::Black));
    }
}
