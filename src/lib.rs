pub mod board;
pub mod config;
pub mod coord;
pub mod driver;
pub mod en_passant;
pub mod error;
pub mod game;
pub mod moves;
pub mod notation;
pub mod piece;
pub mod player;
pub mod render;
pub mod rules;

#[cfg(target_arch = "wasm32")]
mod wasm_api;
