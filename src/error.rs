use crate::coord::Coord;
use crate::piece::Color;

/// Text that could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected two squares like \"e2e4\", got {0:?}")]
    Length(String),

    #[error("invalid file: {0}")]
    File(char),

    #[error("invalid rank: {0}")]
    Rank(char),
}

/// Why the engine refused a move. Every variant leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("game is already over")]
    GameOver,

    #[error("No {} pawn at {at}", .color.name().to_lowercase())]
    NoPawn { color: Color, at: Coord },

    #[error("destination {0} is occupied")]
    DestinationOccupied(Coord),

    #[error("path to {0} is blocked")]
    PathBlocked(Coord),

    #[error("nothing to capture on {0}")]
    NothingToCapture(Coord),

    #[error("{from} -> {to} is not a pawn move")]
    NotAPawnMove { from: Coord, to: Coord },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pawn_message_names_the_color() {
        let err = IllegalMove::NoPawn {
            color: Color::White,
            at: "a2".parse().unwrap(),
        };
        assert_eq!(err.to_string(), "No white pawn at a2");
    }
}
