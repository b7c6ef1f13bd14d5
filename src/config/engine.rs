// src/config/engine.rs

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// クリック受付の最小間隔 (tick 数) のデフォルト値。
pub const DEFAULT_CLICK_DELAY_TICKS: u32 = 10;

/// MoveEngine の設定だよ。JSON から読み込める (足りない項目はデフォルト値)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// 前回受け付けたクリックから、これだけ tick が進むまで次のクリックを無視する。
    /// ボタン押しっぱなしで 1 tick ごとに何回もカードをめくらないためのもの。
    pub click_delay_ticks: u32,
    /// 指定するとシャッフルが再現可能になる。None なら OS のエントロピーから。
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { click_delay_ticks: DEFAULT_CLICK_DELAY_TICKS, seed: None }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_click_delay(mut self, ticks: u32) -> Self {
        self.click_delay_ticks = ticks;
        self
    }
}
