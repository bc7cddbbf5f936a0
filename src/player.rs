use std::fmt;

use serde::{Deserialize, Serialize};

use crate::piece::Color;

pub const PAWNS_PER_SIDE: u8 = 8;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub color: Color,
    pawns: u8,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self::with_pawns(name, color, PAWNS_PER_SIDE)
    }

    pub fn with_pawns(name: impl Into<String>, color: Color, pawns: u8) -> Self {
        Player {
            name: name.into(),
            color,
            pawns,
        }
    }

    pub fn remaining_pawns(&self) -> u8 {
        self.pawns
    }

    pub fn has_no_pawns(&self) -> bool {
        self.pawns == 0
    }

    pub(crate) fn lose_pawn(&mut self) {
        self.pawns = self.pawns.saturating_sub(1);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
