use std::io;

use pawns_chess::config::{AppConfig, DEFAULT_LOG_FILTER};
use pawns_chess::game::{Game, Outcome};
use pawns_chess::piece::Color;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Default, Serialize)]
struct Summary {
    seed: u64,
    games: u32,
    white_wins: u32,
    black_wins: u32,
    stalemates: u32,
    unfinished: u32,
    longest_game: u32,
    average_plies: f64,
}

/// Play uniformly random legal moves until the game ends.
fn play_game(rng: &mut impl Rng) -> (Option<Outcome>, u32) {
    let mut game = Game::new("White", "Black");
    while game.is_running() {
        let moves = game.legal_moves();
        let Some(&mv) = moves.choose(rng) else {
            warn!(clock = game.clock(), "running game has no legal moves");
            break;
        };
        if let Err(err) = game.apply_turn(mv) {
            warn!(%mv, %err, "generated move was rejected");
            break;
        }
    }
    (game.outcome(), game.clock())
}

fn main() -> io::Result<()> {
    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(io::stderr)
        .init();

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!(seed, games = config.games, "starting self-play");

    let mut summary = Summary {
        seed,
        games: config.games,
        ..Summary::default()
    };
    let mut total_plies = 0u64;

    for i in 0..config.games {
        let (outcome, plies) = play_game(&mut rng);
        match outcome {
            Some(Outcome::Win(Color::White)) => summary.white_wins += 1,
            Some(Outcome::Win(Color::Black)) => summary.black_wins += 1,
            Some(Outcome::Stalemate) => summary.stalemates += 1,
            None => summary.unfinished += 1,
        }
        info!(game = i + 1, ?outcome, plies, "game over");
        summary.longest_game = summary.longest_game.max(plies);
        total_plies += plies as u64;
    }

    if config.games > 0 {
        summary.average_plies = total_plies as f64 / config.games as f64;
    }

    let json = serde_json::to_string_pretty(&summary).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}
