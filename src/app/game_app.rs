// src/app/game_app.rs

// JavaScript (Renderer) から使うための入口だよ！
// 中身は MoveEngine に丸投げして、ここでは JSON と JsValue の変換だけをする。

use js_sys::Error;
use log::info;
use wasm_bindgen::prelude::*;

use crate::app::event_handler::{HitRegion, PointerInput};
use crate::config::EngineConfig;
use crate::engine::MoveEngine;
use crate::error::EngineError;

// EngineError を JS の Error オブジェクトに変換する
fn to_js_error(error: EngineError) -> JsValue {
    Error::new(&error.to_string()).into()
}

#[wasm_bindgen]
pub struct GameApp {
    engine: MoveEngine,
}

#[wasm_bindgen]
impl GameApp {
    /// `config_json` は `{"click_delay_ticks": 10, "seed": 42}` の形。省略した項目はデフォルト。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<GameApp, JsValue> {
        let config = match config_json {
            Some(json) => EngineConfig::from_json(&json).map_err(to_js_error)?,
            None => EngineConfig::default(),
        };
        let engine = MoveEngine::new(config).map_err(to_js_error)?;
        info!("GameApp created.");
        Ok(GameApp { engine })
    }

    /// 1 フレームに 1 回呼ぶ。`hit_json` は HitRegion の JSON (何もない所なら省略)。
    /// 戻り値は TickReport の JSON。
    pub fn tick(&mut self, pointer_down: bool, hit_json: Option<String>) -> Result<String, JsValue> {
        let hit = match hit_json {
            Some(json) => Some(
                serde_json::from_str::<HitRegion>(&json)
                    .map_err(|e| to_js_error(EngineError::from(e)))?,
            ),
            None => None,
        };
        let report = self
            .engine
            .tick(PointerInput { pointer_down, hit })
            .map_err(to_js_error)?;
        serde_json::to_string(&report).map_err(|e| to_js_error(EngineError::from(e)))
    }

    pub fn get_game_state_json(&self) -> Result<String, JsValue> {
        self.engine.snapshot_json().map_err(to_js_error)
    }

    pub fn load_game_state_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.engine.restore_json(json).map_err(to_js_error)
    }

    pub fn is_card_held(&self) -> bool {
        self.engine.is_card_held()
    }

    pub fn is_won(&self) -> bool {
        self.engine.is_won()
    }

    pub fn new_game(&mut self) -> Result<(), JsValue> {
        self.engine.new_game().map_err(to_js_error)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn facade_reports_ticks_as_json() {
        let mut app = GameApp::new(Some(r#"{"seed": 7, "click_delay_ticks": 0}"#.to_string())).unwrap();
        let report = app.tick(true, Some(r#""Stock""#.to_string())).unwrap();
        assert!(report.contains("CardDrawn"));
        assert!(!app.is_card_held());
        assert!(!app.is_won());
    }

    #[wasm_bindgen_test]
    fn facade_round_trips_state() {
        let mut app = GameApp::new(Some(r#"{"seed": 8}"#.to_string())).unwrap();
        let json = app.get_game_state_json().unwrap();
        app.new_game().unwrap();
        app.load_game_state_json(&json).unwrap();
        assert_eq!(app.get_game_state_json().unwrap(), json);
    }

    #[wasm_bindgen_test]
    fn facade_rejects_bad_region_json() {
        let mut app = GameApp::new(None).unwrap();
        assert!(app.tick(true, Some("{oops".to_string())).is_err());
    }
}
