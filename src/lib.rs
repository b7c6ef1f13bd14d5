// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod logic;
pub mod protocol;
pub mod system;
pub mod systems;


pub use app::event_handler::{HitRegion, PointerInput};
pub use app::game_app::GameApp;
pub use board::TableBoard;
pub use components::{Card, GameState, GameStatus, HandOrigin, Rank, Suit};
pub use config::EngineConfig;
pub use engine::{apply_pickup, apply_placement, MoveEngine};
pub use error::EngineError;
pub use protocol::{GameEvent, TickReport};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    log::info!("Panic hook and console logger set!");
}
