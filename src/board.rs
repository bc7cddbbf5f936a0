use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::moves::Move;
use crate::piece::{Color, Pawn};

/// 8x8 grid of cells. `squares[rank - 1][file]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Pawn>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board. Useful for setting up test positions.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Starting layout: White on rank 2, Black on rank 7.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            for sq in &mut board.squares[color.home_rank() as usize - 1] {
                *sq = Some(Pawn::new(color));
            }
        }
        board
    }

    fn cell(&self, at: Coord) -> &Option<Pawn> {
        &self.squares[at.rank() as usize - 1][at.file_index()]
    }

    fn cell_mut(&mut self, at: Coord) -> &mut Option<Pawn> {
        &mut self.squares[at.rank() as usize - 1][at.file_index()]
    }

    pub fn pawn_at(&self, at: Coord) -> Option<Pawn> {
        *self.cell(at)
    }

    /// The pawn at `at` only if it belongs to `color`.
    pub fn pawn_of_color_at(&self, color: Color, at: Coord) -> Option<Pawn> {
        self.pawn_at(at).filter(|p| p.color == color)
    }

    pub(crate) fn pawn_mut(&mut self, at: Coord) -> Option<&mut Pawn> {
        self.cell_mut(at).as_mut()
    }

    pub fn is_empty(&self, at: Coord) -> bool {
        self.cell(at).is_none()
    }

    /// Put `pawn` on `at`, returning whatever was there.
    pub fn place(&mut self, at: Coord, pawn: Pawn) -> Option<Pawn> {
        self.cell_mut(at).replace(pawn)
    }

    /// Relocate the occupant of `from` to `to`, leaving `from` empty.
    /// No legality checks; returns what `to` held before.
    pub fn apply_move(&mut self, from: Coord, to: Coord) -> Option<Pawn> {
        let moving = self.cell_mut(from).take();
        std::mem::replace(self.cell_mut(to), moving)
    }

    /// Empty `at`, returning its prior occupant.
    pub fn clear_at(&mut self, at: Coord) -> Option<Pawn> {
        self.cell_mut(at).take()
    }

    /// Read-only view of one rank, indexed by file.
    ///
    /// # Panics
    ///
    /// If `rank` is outside `1..=8`.
    pub fn rank(&self, rank: u8) -> &[Option<Pawn>; 8] {
        &self.squares[rank as usize - 1]
    }

    /// A straight move of one rank can't be blocked by an intermediate
    /// square; a two-rank move needs the square in between to be empty.
    pub fn no_pawn_blocking_path(&self, mv: &Move) -> bool {
        let distance = mv.rank_distance();
        if distance.abs() <= 1 {
            return true;
        }
        match mv.from.offset(0, distance.signum()) {
            Some(between) => self.is_empty(between),
            None => true,
        }
    }

    /// Squares holding `color`'s pawns, rank 1 to 8, file a to h.
    pub fn pawns(&self, color: Color) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&at| self.pawn_of_color_at(color, at).is_some())
    }

    pub fn count(&self, color: Color) -> usize {
        self.pawns(color).count()
    }
}
