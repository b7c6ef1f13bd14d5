// src/app/state_getter.rs
//! ゲーム状態と JSON の相互変換 (保存 / 復元)。

use log::{info, warn};

use crate::components::game_state::GameState;
use crate::error::EngineError;
use crate::logic::integrity;

/// ゲーム状態を JSON 文字列にする。
pub fn get_game_state_json(state: &GameState) -> Result<String, EngineError> {
    let json = serde_json::to_string(state)?;
    info!("Serialized game state ({} bytes).", json.len());
    Ok(json)
}

/// JSON からゲーム状態を読み込む。不変条件を満たさない状態は受け付けない。
pub fn load_game_state_json(json: &str) -> Result<GameState, EngineError> {
    let state: GameState = serde_json::from_str(json)?;
    if let Err(error) = integrity::check_game_state(&state) {
        warn!("Rejected game state snapshot: {}", error);
        return Err(error.into());
    }
    info!("Loaded game state snapshot (status: {:?}).", state.status);
    Ok(state)
}
