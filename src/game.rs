// =============================================================================
// Rules Engine
//
// Owns the board, both players, the turn clock and the en-passant slot.
// `apply_turn` validates a move against the current player's pawns and either
// applies it completely (and hands the turn over) or leaves everything as it
// was. End-of-game conditions are, in order: a side with no pawns left, a
// pawn on its winning rank, or no legal move for the player to move
// (stalemate).
// =============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::coord::Coord;
use crate::en_passant::{EnPassant, EnPassantTracker};
use crate::error::IllegalMove;
use crate::moves::{Applied, Move};
use crate::piece::Color;
use crate::player::Player;
use crate::rules;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Color),
    Stalemate,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(color) => write!(f, "{color} wins!"),
            Outcome::Stalemate => f.write_str("Stalemate!"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Finished(Outcome),
}

/// A validated move. En passant carries the record it uses, so the
/// captured pawn's square is known before the board changes.
#[derive(Clone, Copy, Debug)]
enum Step {
    Advance,
    DoubleAdvance,
    Capture,
    EnPassant(EnPassant),
}

impl Step {
    fn kind(self) -> Applied {
        match self {
            Step::Advance => Applied::Advance,
            Step::DoubleAdvance => Applied::DoubleAdvance,
            Step::Capture => Applied::Capture,
            Step::EnPassant(_) => Applied::EnPassant,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    /// White first, Black second.
    players: [Player; 2],
    current: usize,
    /// Number of completed turns.
    clock: u32,
    en_passant: EnPassantTracker,
    status: GameStatus,
}

impl Game {
    /// A new game from the starting layout. The first player takes White
    /// and moves first.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Game {
            board: Board::new(),
            players: [
                Player::new(first, Color::White),
                Player::new(second, Color::Black),
            ],
            current: 0,
            clock: 0,
            en_passant: EnPassantTracker::new(),
            status: GameStatus::InProgress,
        }
    }

    /// A game from an arbitrary layout with `to_move` on turn. Pawn counters
    /// are taken from the board, and pawns away from their home rank count
    /// as moved. Useful for setting up test positions.
    pub fn from_position(
        mut board: Board,
        first: impl Into<String>,
        second: impl Into<String>,
        to_move: Color,
    ) -> Self {
        for at in Coord::all() {
            if let Some(pawn) = board.pawn_mut(at) {
                if at.rank() != pawn.color.home_rank() {
                    pawn.has_moved = true;
                }
            }
        }
        let white = board.count(Color::White) as u8;
        let black = board.count(Color::Black) as u8;
        let mut game = Game {
            board,
            players: [
                Player::with_pawns(first, Color::White, white),
                Player::with_pawns(second, Color::Black, black),
            ],
            current: Self::index_of(to_move),
            clock: 0,
            en_passant: EnPassantTracker::new(),
            status: GameStatus::InProgress,
        };
        game.refresh_status();
        game
    }

    fn index_of(color: Color) -> usize {
        match color {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, color: Color) -> &Player {
        &self.players[Self::index_of(color)]
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn opponent(&self) -> &Player {
        &self.players[1 - self.current]
    }

    pub fn clock(&self) -> u32 {
        self.clock
    }

    /// The en-passant record, if the player to move may still use it.
    pub fn en_passant(&self) -> Option<EnPassant> {
        self.en_passant.active(self.clock)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Finished(outcome) => Some(outcome),
        }
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.outcome()? {
            Outcome::Win(color) => Some(self.player(color)),
            Outcome::Stalemate => None,
        }
    }

    // -----------------------------------------------------------------
    // End of game
    // -----------------------------------------------------------------

    /// Re-evaluate end conditions and report whether play continues.
    pub fn is_running(&mut self) -> bool {
        self.refresh_status();
        self.status == GameStatus::InProgress
    }

    fn refresh_status(&mut self) {
        if self.status != GameStatus::InProgress {
            return;
        }
        if let Some(outcome) = self.evaluate() {
            info!(clock = self.clock, %outcome, "game finished");
            self.status = GameStatus::Finished(outcome);
        }
    }

    /// End-of-game check from the point of view of the player about to move.
    /// Elimination is checked before the far rank, which is checked before
    /// stalemate. Either side can be eliminated or on its far rank, whoever
    /// is to move.
    pub fn evaluate(&self) -> Option<Outcome> {
        let current = self.current_player();
        let opponent = self.opponent();

        for (loser, winner) in [(current, opponent), (opponent, current)] {
            if loser.has_no_pawns() {
                return Some(Outcome::Win(winner.color));
            }
        }
        for color in [opponent.color, current.color] {
            if self.has_reached_winning_rank(color) {
                return Some(Outcome::Win(color));
            }
        }
        if !rules::can_move(&self.board, current.color, self.en_passant()) {
            return Some(Outcome::Stalemate);
        }
        None
    }

    /// Whether a pawn of `color` stands on that color's winning rank.
    pub fn has_reached_winning_rank(&self, color: Color) -> bool {
        self.board
            .rank(color.winning_rank())
            .iter()
            .flatten()
            .any(|pawn| pawn.color == color)
    }

    // -----------------------------------------------------------------
    // Moves
    // -----------------------------------------------------------------

    /// Classify `mv` for the current player without touching any state.
    pub fn check_move(&self, mv: &Move) -> Result<Applied, IllegalMove> {
        self.resolve(mv).map(Step::kind)
    }

    fn resolve(&self, mv: &Move) -> Result<Step, IllegalMove> {
        if self.status != GameStatus::InProgress {
            return Err(IllegalMove::GameOver);
        }

        let color = self.current_player().color;
        let pawn = self
            .board
            .pawn_of_color_at(color, mv.from)
            .ok_or(IllegalMove::NoPawn { color, at: mv.from })?;

        let rank_distance = color.direction() * mv.rank_distance();
        let file_distance = mv.file_distance().abs();

        match (file_distance, rank_distance) {
            (0, d) if (1..=pawn.max_advance()).contains(&d) => {
                if !self.board.is_empty(mv.to) {
                    Err(IllegalMove::DestinationOccupied(mv.to))
                } else if !self.board.no_pawn_blocking_path(mv) {
                    Err(IllegalMove::PathBlocked(mv.to))
                } else if d == 2 {
                    Ok(Step::DoubleAdvance)
                } else {
                    Ok(Step::Advance)
                }
            }
            (1, 1) => match self.board.pawn_at(mv.to) {
                Some(target) if target.color != color => Ok(Step::Capture),
                Some(_) => Err(IllegalMove::DestinationOccupied(mv.to)),
                None => self
                    .en_passant
                    .available_at(mv.to, self.clock)
                    .map(Step::EnPassant)
                    .ok_or(IllegalMove::NothingToCapture(mv.to)),
            },
            _ => Err(IllegalMove::NotAPawnMove {
                from: mv.from,
                to: mv.to,
            }),
        }
    }

    /// Apply `mv` for the current player. On success the turn passes to the
    /// opponent and end conditions are re-evaluated; on failure nothing
    /// changes and the same player is still to move.
    pub fn apply_turn(&mut self, mv: Move) -> Result<Applied, IllegalMove> {
        let step = match self.resolve(&mv) {
            Ok(step) => step,
            Err(err) => {
                debug!(clock = self.clock, %mv, %err, "move rejected");
                return Err(err);
            }
        };

        let color = self.current_player().color;
        let opponent = 1 - self.current;

        self.board.apply_move(mv.from, mv.to);
        if let Some(pawn) = self.board.pawn_mut(mv.to) {
            pawn.has_moved = true;
        }

        match step {
            Step::DoubleAdvance => {
                self.en_passant.record(self.clock, mv.to, color.direction());
                debug!(clock = self.clock, victim = %mv.to, "en passant window opened");
            }
            Step::Advance => self.en_passant.clear(),
            Step::Capture => {
                self.players[opponent].lose_pawn();
                self.en_passant.clear();
            }
            Step::EnPassant(ep) => {
                self.board.clear_at(ep.victim);
                self.players[opponent].lose_pawn();
                self.en_passant.clear();
            }
        }

        let applied = step.kind();
        debug!(clock = self.clock, player = %color, %mv, ?applied, "move applied");

        self.advance_turn();
        self.refresh_status();
        Ok(applied)
    }

    fn advance_turn(&mut self) {
        self.current = 1 - self.current;
        self.clock += 1;
    }

    /// Every move `apply_turn` would currently accept.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status != GameStatus::InProgress {
            return Vec::new();
        }
        let color = self.current_player().color;
        let dir = color.direction();

        let mut moves = Vec::new();
        for from in self.board.pawns(color) {
            for (df, dr) in [(0, 1), (0, 2), (-1, 1), (1, 1)] {
                let Some(to) = from.offset(df, dr * dir) else {
                    continue;
                };
                let mv = Move::new(from, to);
                if self.check_move(&mv).is_ok() {
                    moves.push(mv);
                }
            }
        }
        moves
    }
}
