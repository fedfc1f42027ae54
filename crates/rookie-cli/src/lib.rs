//! Interactive terminal front end for rookie: a human plays the bot.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Input, parse_depth, parse_input, parse_side};
pub use error::CliError;
pub use session::{Outcome, Session, SessionConfig};
