use serde::{Deserialize, Serialize};

use crate::coord::Coord;

/// Left behind by a two-square advance made on turn `turn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnPassant {
    pub turn: u32,
    /// The square the advancing pawn passed over; a capturer lands here.
    pub target: Coord,
    /// The landing square; its occupant is removed by the capture.
    pub victim: Coord,
}

/// Single-slot tracker. A record is usable on exactly one turn: the one
/// right after it was made.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnPassantTracker {
    slot: Option<EnPassant>,
}

impl EnPassantTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a double advance that landed on `landing` while moving in
    /// `direction`. Replaces any earlier record.
    pub fn record(&mut self, turn: u32, landing: Coord, direction: i8) {
        self.slot = landing.offset(0, -direction).map(|target| EnPassant {
            turn,
            target,
            victim: landing,
        });
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// The record, if it may be used on turn `turn`.
    pub fn active(&self, turn: u32) -> Option<EnPassant> {
        self.slot.filter(|ep| ep.turn.checked_add(1) == Some(turn))
    }

    /// The record, if it may be used on turn `turn` to land on `at`.
    pub fn available_at(&self, at: Coord, turn: u32) -> Option<EnPassant> {
        self.active(turn).filter(|ep| ep.target == at)
    }
}
