// src/app/event_handler.rs
//! ポインター入力 (押した/離した) を受けて、どの処理に回すかを決めるところ。

use log::debug;
use serde::{Deserialize, Serialize};

use crate::app::{drag_handler, stock_handler};
use crate::components::game_state::GameState;
use crate::config::table::{FOUNDATION_COUNT, TABLEAU_COLUMNS};
use crate::error::EngineError;
use crate::protocol::GameEvent;

/// ポインターが重なっている盤面上の領域だよ！
///
/// 座標から領域への変換 (当たり判定) は Renderer の仕事。エンジンはこの結果だけを見る。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitRegion {
    Stock,
    Waste,
    Foundation(u8),
    /// `depth` は列の中の何枚目か (0 が一番下)。空の列の枠なら 0。
    Tableau { column: u8, depth: usize },
}

/// 1 tick 分の入力。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerInput {
    pub pointer_down: bool,
    pub hit: Option<HitRegion>,
}

impl PointerInput {
    pub fn down(hit: HitRegion) -> Self {
        Self { pointer_down: true, hit: Some(hit) }
    }

    pub fn up(hit: Option<HitRegion>) -> Self {
        Self { pointer_down: false, hit }
    }

    pub fn idle() -> Self {
        Self::default()
    }
}

/// インデックスが盤面の範囲に収まっているか確かめる。
pub fn validate_region(region: HitRegion) -> Result<HitRegion, EngineError> {
    match region {
        HitRegion::Foundation(index) if usize::from(index) >= FOUNDATION_COUNT => {
            Err(EngineError::InvalidRegion { kind: "foundation", index: usize::from(index) })
        }
        HitRegion::Tableau { column, .. } if usize::from(column) >= TABLEAU_COLUMNS => {
            Err(EngineError::InvalidRegion { kind: "tableau column", index: usize::from(column) })
        }
        _ => Ok(region),
    }
}

/// ポインターが押された (デバウンスを通過した) 時の処理。
///
/// 優先順位: 山札 → 捨て札 → 組札 → 場札。どれも手札が空の時だけ。
/// 1 回の押下で拾えるのは 1 回だけ。
pub fn handle_pointer_down(
    state: &mut GameState,
    region: HitRegion,
    events: &mut Vec<GameEvent>,
) -> Result<(), EngineError> {
    if state.board.is_card_held() {
        debug!("Pointer down on {:?} ignored: hand is not empty.", region);
        return Ok(());
    }
    match region {
        HitRegion::Stock => stock_handler::handle_stock_click(&mut state.board, events),
        HitRegion::Waste | HitRegion::Foundation(_) | HitRegion::Tableau { .. } => {
            drag_handler::handle_drag_start(state, region, events)
        }
    }
}
