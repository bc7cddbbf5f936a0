// Seeded random games checking engine invariants along the way.

use pawns_chess::coord::Coord;
use pawns_chess::game::Game;
use pawns_chess::moves::Move;
use pawns_chess::piece::Color;
use pawns_chess::rules;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const GAMES: usize = 300;
/// Every move pushes a pawn at least one rank forward: 16 pawns * 6 ranks.
const MAX_PLIES: u32 = 96;

fn random_square(rng: &mut StdRng) -> Coord {
    Coord::from_index(rng.gen_range(0..8), rng.gen_range(1..=8)).unwrap()
}

fn assert_counters_match_board(game: &Game) {
    for color in Color::ALL {
        assert_eq!(
            game.player(color).remaining_pawns() as usize,
            game.board().count(color),
            "{color} counter out of sync at clock {}",
            game.clock()
        );
    }
}

#[test]
fn random_games_keep_invariants_and_terminate() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..GAMES {
        let mut game = Game::new("White", "Black");

        while game.is_running() {
            assert!(game.clock() <= MAX_PLIES);

            let legal = game.legal_moves();
            let color = game.current_player().color;
            assert_eq!(
                rules::can_move(game.board(), color, game.en_passant()),
                !legal.is_empty()
            );

            // Throw in some arbitrary attempts; rejections must be no-ops.
            for _ in 0..4 {
                let attempt = Move::new(random_square(&mut rng), random_square(&mut rng));
                let before = (game.board().clone(), game.clock(), game.en_passant());
                if game.clone().apply_turn(attempt).is_err() {
                    assert!(game.apply_turn(attempt).is_err());
                    assert_eq!((game.board().clone(), game.clock(), game.en_passant()), before);
                    assert_eq!(game.current_player().color, color);
                }
            }

            let mv = *legal.choose(&mut rng).unwrap();
            game.apply_turn(mv).unwrap();
            assert_counters_match_board(&game);
            assert!(game.board().pawn_at(mv.to).unwrap().has_moved);
        }

        assert!(game.outcome().is_some());
        assert!(game.legal_moves().is_empty());
    }
}

#[test]
fn every_legal_move_is_accepted() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let mut game = Game::new("White", "Black");
        while game.is_running() {
            let legal = game.legal_moves();
            for &mv in &legal {
                assert!(game.clone().apply_turn(mv).is_ok(), "{mv} listed but refused");
            }
            game.apply_turn(*legal.choose(&mut rng).unwrap()).unwrap();
        }
    }
}
