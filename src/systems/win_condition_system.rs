// src/systems/win_condition_system.rs

use log::info;

use crate::components::game_state::{GameState, GameStatus};
use crate::error::EngineError;
use crate::protocol::GameEvent;
use crate::system::System;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 場札が全部空になったら GameStatus を Won にする (1 回だけ)。
/// 手札を持っている間は判定しない: 最後の列を持ち上げただけで勝ちにはならない。
#[derive(Default, Debug)]
pub struct WinConditionSystem;

impl System for WinConditionSystem {
    fn run(&mut self, state: &mut GameState, events: &mut Vec<GameEvent>) -> Result<(), EngineError> {
        if state.status != GameStatus::Playing || state.board.is_card_held() {
            return Ok(());
        }
        if state.board.is_victory() {
            info!("WinConditionSystem: 勝利条件達成！🏆");
            state.status = GameStatus::Won;
            events.push(GameEvent::Won);
        }
        Ok(())
    }
}
