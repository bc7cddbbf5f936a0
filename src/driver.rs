// =============================================================================
// Terminal Driver
//
// Prompt, read, apply, render. Engine rejections print either the engine's
// own "No <color> pawn" message or "Invalid Input".
// =============================================================================

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::IllegalMove;
use crate::game::{Game, Outcome};
use crate::moves::Command;
use crate::notation::parse_command;

pub const TITLE: &str = " Pawns-Only Chess";
pub const INVALID_INPUT: &str = "Invalid Input";

/// Print `prompt`, then read one line. `None` at end of input.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<String>> {
    writeln!(output, "{prompt}")?;
    write!(output, "> ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

/// Play one game over `input`/`output`. Returns the outcome, or `None` when
/// the players quit (or input ran out) before the game was decided.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<Option<Outcome>> {
    writeln!(output, "{TITLE}")?;

    let names = match ask(&mut input, &mut output, "First Player's name:")? {
        Some(first) => ask(&mut input, &mut output, "Second Player's name:")?.map(|second| (first, second)),
        None => None,
    };
    let Some((first, second)) = names else {
        writeln!(output, "Bye!")?;
        return Ok(None);
    };

    let mut game = Game::new(first, second);
    write!(output, "{}", game.board())?;

    while game.is_running() {
        let prompt = format!("{}'s turn:", game.current_player());
        let Some(line) = ask(&mut input, &mut output, &prompt)? else {
            debug!("input closed");
            break;
        };

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Move(mv)) => match game.apply_turn(mv) {
                Ok(_) => write!(output, "{}", game.board())?,
                Err(err @ IllegalMove::NoPawn { .. }) => writeln!(output, "{err}")?,
                Err(_) => writeln!(output, "{INVALID_INPUT}")?,
            },
            Err(err) => {
                debug!(%err, input = %line, "unparseable input");
                writeln!(output, "{INVALID_INPUT}")?;
            }
        }
    }

    let outcome = game.outcome();
    if let Some(outcome) = outcome {
        writeln!(output, "{outcome}")?;
    }
    writeln!(output, "Bye!")?;
    output.flush()?;
    Ok(outcome)
}
