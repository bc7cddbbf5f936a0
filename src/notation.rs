use crate::coord::Coord;
use crate::error::ParseError;
use crate::moves::{Command, Move};

pub const QUIT_COMMAND: &str = "exit";

/// Parse one line of player input: `"exit"` (any case) or a coordinate pair
/// such as `"e2e4"` / `"E2E4"`.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case(QUIT_COMMAND) {
        return Ok(Command::Quit);
    }
    parse_move(input).map(Command::Move)
}

pub fn parse_move(input: &str) -> Result<Move, ParseError> {
    if input.chars().count() != 4 || !input.is_ascii() {
        return Err(ParseError::Length(input.to_string()));
    }
    let from: Coord = input[0..2].parse()?;
    let to: Coord = input[2..4].parse()?;
    Ok(Move::new(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_in_any_case() {
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
        assert_eq!(parse_command(" EXIT\n"), Ok(Command::Quit));
    }

    #[test]
    fn coordinate_pairs() {
        let Ok(Command::Move(mv)) = parse_command("A2a4") else {
            panic!("expected a move");
        };
        assert_eq!(mv.to_string(), "a2a4");
    }

    #[test]
    fn malformed_input() {
        assert!(matches!(parse_command("a2a"), Err(ParseError::Length(_))));
        assert!(matches!(parse_command("a2a4q"), Err(ParseError::Length(_))));
        assert_eq!(parse_command("i2a4"), Err(ParseError::File('i')));
        assert_eq!(parse_command("a2a0"), Err(ParseError::Rank('0')));
        assert!(parse_command("é2a4").is_err());
        assert!(parse_command("").is_err());
    }
}
