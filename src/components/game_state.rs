// src/components/game_state.rs

use serde::{Deserialize, Serialize};

use crate::board::TableBoard;
use crate::components::dragging_info::HandOrigin;

/// ゲーム全体の進行状況だよ！🏆
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中
    Playing,
    /// 勝利！場札が全部なくなった。
    Won,
}

/// ゲームの状態まるごと: 盤面 + 手札の出どころ + 進行状況。
///
/// MoveEngine はこれを tick ごとに書き換える。JSON にすれば保存/復元にも使える。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: TableBoard,
    /// 手札を拾った場所。手札が空の間は None。
    pub hand_origin: Option<HandOrigin>,
    pub status: GameStatus,
}

impl GameState {
    pub fn new(board: TableBoard) -> Self {
        Self { board, hand_origin: None, status: GameStatus::Playing }
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_playing_with_empty_hand() {
        let state = GameState::new(TableBoard::empty());
        assert_eq!(state.status, GameStatus::Playing);
        assert!(state.hand_origin.is_none());
        assert!(!state.is_won());
    }
}
