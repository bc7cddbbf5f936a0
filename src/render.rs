use std::fmt;

use serde::Serialize;

use crate::board::Board;
use crate::coord::FILES;
use crate::game::{Game, Outcome};
use crate::piece::{Color, Pawn};

fn separator() -> String {
    format!("   {}+", "+---".repeat(8))
}

fn files_legend() -> String {
    let files: String = FILES.iter().map(|file| format!("  {file} ")).collect();
    format!("   {files}")
}

fn cell_symbol(cell: Option<Pawn>) -> char {
    cell.map_or(' ', |pawn| pawn.color.symbol())
}

impl fmt::Display for Board {
    /// Rank 8 at the top, one boxed cell per square, files along the bottom.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = separator();
        writeln!(f, "{separator}")?;
        for rank in (1..=8).rev() {
            write!(f, " {rank} ")?;
            for cell in self.rank(rank) {
                write!(f, "| {} ", cell_symbol(*cell))?;
            }
            writeln!(f, "|")?;
            writeln!(f, "{separator}")?;
        }
        writeln!(f, "{}", files_legend())
    }
}

/// Everything a front end needs to draw the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Rank 8 first; each row is files a to h, `'W'`, `'B'` or `' '`.
    pub ranks: Vec<String>,
    pub to_move: Color,
    pub player: String,
    pub clock: u32,
    pub white_pawns: u8,
    pub black_pawns: u8,
    pub en_passant: Option<String>,
    pub outcome: Option<Outcome>,
    pub message: Option<String>,
}

impl Snapshot {
    pub fn of(game: &Game) -> Self {
        let ranks: Vec<String> = (1..=8)
            .rev()
            .map(|rank| {
                game.board()
                    .rank(rank)
                    .iter()
                    .map(|c| cell_symbol(*c))
                    .collect::<String>()
            })
            .collect();
        let outcome = game.outcome();
        Snapshot {
            ranks,
            to_move: game.current_player().color,
            player: game.current_player().name.clone(),
            clock: game.clock(),
            white_pawns: game.player(Color::White).remaining_pawns(),
            black_pawns: game.player(Color::Black).remaining_pawns(),
            en_passant: game.en_passant().map(|ep| ep.target.to_string()),
            outcome,
            message: outcome.map(|o| o.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_move;

    const START: &str = "   +---+---+---+---+---+---+---+---+
 8 |   |   |   |   |   |   |   |   |
   +---+---+---+---+---+---+---+---+
 7 | B | B | B | B | B | B | B | B |
   +---+---+---+---+---+---+---+---+
 6 |   |   |   |   |   |   |   |   |
   +---+---+---+---+---+---+---+---+
 5 |   |   |   |   |   |   |   |   |
   +---+---+---+---+---+---+---+---+
 4 |   |   |   |   |   |   |   |   |
   +---+---+---+---+---+---+---+---+
 3 |   |   |   |   |   |   |   |   |
   +---+---+---+---+---+---+---+---+
 2 | W | W | W | W | W | W | W | W |
   +---+---+---+---+---+---+---+---+
 1 |   |   |   |   |   |   |   |   |
   +---+---+---+---+---+---+---+---+
     a   b   c   d   e   f   g   h 
";

    #[test]
    fn renders_starting_board() {
        assert_eq!(Board::new().to_string(), START);
    }

    #[test]
    fn snapshot_serialises() {
        let mut game = Game::new("Ann", "Bob");
        game.apply_turn(parse_move("e2e4").unwrap()).unwrap();

        let snap = Snapshot::of(&game);
        assert_eq!(snap.ranks[4], "    W   ");
        assert_eq!(snap.player, "Bob");
        assert_eq!(snap.en_passant.as_deref(), Some("e3"));

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["to_move"], "Black");
        assert_eq!(json["white_pawns"], 8);
        assert!(json["outcome"].is_null());
    }
}
