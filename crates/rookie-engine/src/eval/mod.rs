//! Hand-crafted position evaluation.
//!
//! The total is a plain sum of independent terms. Material, center control
//! and the pawn table are signed by piece color; mobility, king safety and
//! pawn structure are signed by the side to move.

pub mod center;
pub mod config;
pub mod king_safety;
pub mod material;
pub mod mobility;
pub mod pawns;
pub mod pst;
pub mod score;

use std::fmt;

use rookie_core::{Color, GameStatus, Position};

use config::EvalConfig;
use score::{MATE_SCORE, Score};

/// Per-term scores of a non-terminal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Breakdown {
    pub material: Score,
    pub mobility: Score,
    pub king_safety: Score,
    pub pawn_structure: Score,
    pub center_control: Score,
    /// Pawn piece-square bonus; only part of [`Breakdown::total`] when enabled.
    pub pawn_table: Score,
    /// Whether [`Breakdown::pawn_table`] counts towards the total.
    pub pawn_table_active: bool,
}

impl Breakdown {
    /// Sum of the active terms.
    pub fn total(&self) -> Score {
        let base = self.material
            + self.mobility
            + self.king_safety
            + self.pawn_structure
            + self.center_control;
        if self.pawn_table_active {
            base + self.pawn_table
        } else {
            base
        }
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "material       {:>8}", self.material)?;
        writeln!(f, "mobility       {:>8}", self.mobility)?;
        writeln!(f, "king safety    {:>8}", self.king_safety)?;
        writeln!(f, "pawn structure {:>8}", self.pawn_structure)?;
        writeln!(f, "center control {:>8}", self.center_control)?;
        let marker = if self.pawn_table_active { "" } else { " (off)" };
        writeln!(f, "pawn table     {:>8}{marker}", self.pawn_table)?;
        write!(f, "total          {:>8}", self.total())
    }
}

/// Scores positions from White's point of view.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    /// Create an evaluator with the given weights.
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// The weights in use.
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate `position`, positive when White is better.
    ///
    /// Checkmate scores [`MATE_SCORE`] against the side to move; stalemate
    /// and insufficient material score exactly zero. Other positions get
    /// the heuristic total, even when another draw rule has ended the game.
    pub fn evaluate(&self, position: &Position) -> Score {
        match terminal_score(position) {
            Some(score) => score,
            None => self.breakdown(position).total(),
        }
    }

    /// Compute every heuristic term, ignoring game-over states.
    pub fn breakdown(&self, position: &Position) -> Breakdown {
        let config = &self.config;
        Breakdown {
            material: material::material(position, config),
            mobility: mobility::mobility(position, config),
            king_safety: king_safety::king_safety(position, config),
            pawn_structure: pawns::pawn_structure(position, config),
            center_control: center::center_control(position, config),
            pawn_table: pst::pawn_table(position, config),
            pawn_table_active: config.use_pawn_table,
        }
    }
}

/// Score of a checkmate, stalemate or dead position; `None` otherwise.
fn terminal_score(position: &Position) -> Option<Score> {
    match position.status() {
        GameStatus::Checkmate => Some(match position.side_to_move() {
            Color::White => -MATE_SCORE,
            Color::Black => MATE_SCORE,
        }),
        GameStatus::Stalemate | GameStatus::InsufficientMaterial => Some(0),
        _ => None,
    }
}

/// Evaluate `position` with the default weights.
pub fn evaluate(position: &Position) -> Score {
    Evaluator::default().evaluate(position)
}
