use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::IllegalMove;
use crate::game::Game;
use crate::moves::Command;
use crate::notation::parse_command;
use crate::render::Snapshot;

#[derive(Serialize)]
struct MoveJson {
    from: String,
    to: String,
}

#[derive(Serialize)]
struct PlayResult {
    #[serde(flatten)]
    state: Option<Snapshot>,
    error: Option<String>,
    quit: bool,
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

fn rejected(error: String) -> JsValue {
    to_js(&PlayResult {
        state: None,
        error: Some(error),
        quit: false,
    })
}

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(first: &str, second: &str) -> WasmGame {
        WasmGame {
            game: Game::new(first, second),
        }
    }

    pub fn state(&self) -> JsValue {
        to_js(&Snapshot::of(&self.game))
    }

    /// Apply one line of player input, e.g. "e2e4" or "exit".
    pub fn play(&mut self, input: &str) -> JsValue {
        let mv = match parse_command(input) {
            Ok(Command::Move(mv)) => mv,
            Ok(Command::Quit) => {
                return to_js(&PlayResult {
                    state: Some(Snapshot::of(&self.game)),
                    error: None,
                    quit: true,
                })
            }
            Err(err) => return rejected(err.to_string()),
        };

        match self.game.apply_turn(mv) {
            Ok(_) => to_js(&PlayResult {
                state: Some(Snapshot::of(&self.game)),
                error: None,
                quit: false,
            }),
            Err(err @ IllegalMove::NoPawn { .. }) => rejected(err.to_string()),
            Err(_) => rejected("Invalid Input".to_string()),
        }
    }

    pub fn legal_moves(&self) -> JsValue {
        let moves: Vec<MoveJson> = self
            .game
            .legal_moves()
            .iter()
            .map(|m| MoveJson {
                from: m.from.to_string(),
                to: m.to.to_string(),
            })
            .collect();
        to_js(&moves)
    }

    pub fn is_running(&mut self) -> bool {
        self.game.is_running()
    }
}
