//! Parsing of the lines a human types at the prompts.

use rookie_core::Color;

/// One line entered at the move prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// `exit` -- abandon the game.
    Exit,
    /// `eval` -- show the evaluator's view of the current position.
    Eval,
    /// Anything else, to be interpreted as a move in UCI notation.
    Move(String),
}

/// Classify a line typed at the move prompt.
pub fn parse_input(line: &str) -> Input {
    let text = line.trim();
    match text {
        "exit" => Input::Exit,
        "eval" => Input::Eval,
        _ => Input::Move(text.to_string()),
    }
}

/// Parse a difficulty level: a positive search depth in plies.
pub fn parse_depth(line: &str) -> Option<u8> {
    line.trim().parse::<u8>().ok().filter(|&depth| depth > 0)
}

/// Parse the human's color choice, `W` or `B` in either case.
pub fn parse_side(line: &str) -> Option<Color> {
    match line.trim().to_ascii_uppercase().as_str() {
        "W" => Some(Color::White),
        "B" => Some(Color::Black),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rookie_core::Color;

    use super::*;

    #[test]
    fn parse_exit_and_eval() {
        assert_eq!(parse_input("exit"), Input::Exit);
        assert_eq!(parse_input("  exit \n"), Input::Exit);
        assert_eq!(parse_input("eval"), Input::Eval);
    }

    #[test]
    fn parse_move_text() {
        assert_eq!(parse_input("e2e4\n"), Input::Move("e2e4".to_string()));
        assert_eq!(parse_input("Exit"), Input::Move("Exit".to_string()));
        assert_eq!(parse_input(""), Input::Move(String::new()));
    }

    #[test]
    fn parse_depth_accepts_positive() {
        assert_eq!(parse_depth("3"), Some(3));
        assert_eq!(parse_depth(" 1\n"), Some(1));
        assert_eq!(parse_depth("255"), Some(255));
    }

    #[test]
    fn parse_depth_rejects_invalid() {
        assert_eq!(parse_depth("0"), None);
        assert_eq!(parse_depth("-2"), None);
        assert_eq!(parse_depth("256"), None);
        assert_eq!(parse_depth("hard"), None);
        assert_eq!(parse_depth(""), None);
    }

    #[test]
    fn parse_side_case_insensitive() {
        assert!(parse_side("W") == Some(Color::White));
        assert!(parse_side("w") == Some(Color::White));
        assert!(parse_side(" b \n") == Some(Color::Black));
        assert!(parse_side("white").is_none());
        assert!(parse_side("").is_none());
    }
}
