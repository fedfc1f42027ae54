//! The interactive game loop: human against bot on a text terminal.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use rookie_core::{Color, GameStatus, Move, Position, PositionError};
use rookie_engine::Searcher;

use crate::command::{Input, parse_depth, parse_input, parse_side};
use crate::error::CliError;

const DEPTH_PROMPT: &str = "Enter bot difficulty level: ";
const SIDE_PROMPT: &str = "Do you want to play as White or Black? (W/B): ";
const MOVE_PROMPT: &str = "Your move (in UCI format, e.g., e2e4): ";

/// Settings that skip the corresponding start-up prompts when present.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// Bot search depth in plies.
    pub depth: Option<u8>,
    /// Color played by the human.
    pub human: Option<Color>,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game reached a game-over state.
    Finished(GameStatus),
    /// The human typed `exit` or the input closed.
    Exited,
}

/// One game between a human and the bot.
pub struct Session {
    searcher: Searcher,
    config: SessionConfig,
    position: Position,
}

impl Session {
    /// Create a session from the standard starting position.
    pub fn new(searcher: Searcher) -> Self {
        Self::with_config(searcher, SessionConfig::default())
    }

    /// Create a session with preset depth and/or side.
    pub fn with_config(searcher: Searcher, config: SessionConfig) -> Self {
        Self {
            searcher,
            config,
            position: Position::starting_position(),
        }
    }

    /// Start the game from `position` instead of the standard start.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// The current game position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Play one game, reading the human's lines from `input` and writing
    /// prompts, boards and results to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<Outcome, CliError> {
        let depth = match self.config.depth {
            Some(depth) => depth,
            None => match ask_depth(input, output)? {
                Some(depth) => depth,
                None => return exited(output),
            },
        };
        let human = match self.config.human {
            Some(color) => color,
            None => match ask_side(input, output)? {
                Some(color) => color,
                None => return exited(output),
            },
        };

        info!(depth, human = ?human, "game started");
        writeln!(output, "\nGame Started!\n")?;
        writeln!(output, "{}", self.position.pretty())?;

        while !self.position.is_game_over() {
            if self.position.side_to_move() == human {
                let Some(mv) = self.human_move(input, output)? else {
                    info!(ply = self.position.ply(), "game abandoned");
                    return exited(output);
                };
                self.position.push(mv);
            } else {
                writeln!(output, "\nBot is thinking...\n")?;
                let result = self.searcher.search(&mut self.position, depth);
                let Some(mv) = result.best_move else {
                    warn!(position = %self.position, "bot found no move in a live game");
                    break;
                };
                info!(mv = %mv, score = result.score, nodes = result.nodes, "bot move");
                self.position.push(mv);
                writeln!(output, "Bot played: {mv}")?;
            }
            writeln!(output, "\n{}\n", self.position.pretty())?;
        }

        let status = self.position.status();
        let result = status.result(self.position.side_to_move());
        info!(%status, result, "game over");
        writeln!(output, "Game Over! {result}")?;
        Ok(Outcome::Finished(status))
    }

    /// Prompt until the human enters a legal move. `None` means exit.
    fn human_move<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Option<Move>, CliError> {
        loop {
            let Some(line) = prompt(input, output, MOVE_PROMPT)? else {
                return Ok(None);
            };
            match parse_input(&line) {
                Input::Exit => return Ok(None),
                Input::Eval => {
                    let breakdown = self.searcher.evaluator().breakdown(&self.position);
                    writeln!(output, "{breakdown}")?;
                }
                Input::Move(text) => match self.position.parse_uci(&text) {
                    Ok(mv) => {
                        debug!(mv = %mv, "human move");
                        return Ok(Some(mv));
                    }
                    Err(err @ PositionError::IllegalMove { .. }) => {
                        debug!(error = %err, "rejected move");
                        writeln!(output, "Invalid move! Try again.")?;
                    }
                    Err(err) => {
                        debug!(error = %err, "rejected move");
                        writeln!(output, "Invalid input! Enter a move in UCI format (e.g., e2e4).")?;
                    }
                },
            }
        }
    }
}

fn ask_depth<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<u8>, CliError> {
    loop {
        let Some(line) = prompt(input, output, DEPTH_PROMPT)? else {
            return Ok(None);
        };
        match parse_depth(&line) {
            Some(depth) => return Ok(Some(depth)),
            None => writeln!(output, "Invalid input! Enter a valid number.")?,
        }
    }
}

fn ask_side<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<Color>, CliError> {
    loop {
        let Some(line) = prompt(input, output, SIDE_PROMPT)? else {
            return Ok(None);
        };
        match parse_side(&line) {
            Some(color) => return Ok(Some(color)),
            None => writeln!(output, "Invalid choice! Enter 'W' for White or 'B' for Black.")?,
        }
    }
}

/// Write `text` without a newline and read one line. `None` on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>, CliError> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        debug!("input closed");
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(line))
}

fn exited<W: Write>(output: &mut W) -> Result<Outcome, CliError> {
    writeln!(output, "Game exited.")?;
    Ok(Outcome::Exited)
}
