use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::Coord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub fn new(from: Coord, to: Coord) -> Self {
        Move { from, to }
    }

    pub fn rank_distance(&self) -> i8 {
        self.from.rank_distance(self.to)
    }

    pub fn file_distance(&self) -> i8 {
        self.from.file_distance(self.to)
    }
}

impl fmt::Display for Move {
    /// Coordinate notation, e.g. "e2e4".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// One line of player input, once parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(Move),
    Quit,
}

/// What a successfully applied move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Applied {
    Advance,
    DoubleAdvance,
    Capture,
    EnPassant,
}
