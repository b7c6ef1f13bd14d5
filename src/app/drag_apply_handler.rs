// src/app/drag_apply_handler.rs
//! 置けると分かったドロップを盤面に反映する。
//!
//! ここに来る時点でルールの判定 (is_move_valid) は済んでいる。

use log::info;

use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::error::EngineError;
use crate::protocol::GameEvent;

/// 手札の 1 枚を組札 `index` に積む。
pub fn move_hand_to_foundation(
    state: &mut GameState,
    index: u8,
    events: &mut Vec<GameEvent>,
) -> Result<(), EngineError> {
    let board = &mut state.board;
    let card = board.hand.pop_last_card()?;
    board
        .foundation_mut(index)
        .ok_or(EngineError::InvalidRegion { kind: "foundation", index: usize::from(index) })?
        .add_card(card);
    info!("Placed {} on foundation {}.", card, index);
    finish_move(state, StackType::Foundation(index), 1, events);
    Ok(())
}

/// 手札を全部、場札の列 `column` の上に順番を保ったまま積む。
pub fn move_hand_to_tableau(
    state: &mut GameState,
    column: u8,
    events: &mut Vec<GameEvent>,
) -> Result<(), EngineError> {
    let board = &mut state.board;
    let cards = board.hand.take_all();
    let count = cards.len();
    board
        .column_mut(column)
        .ok_or(EngineError::InvalidRegion { kind: "tableau column", index: usize::from(column) })?
        .add_cards(cards);
    info!("Placed {} card(s) on tableau column {}.", count, column);
    finish_move(state, StackType::Tableau(column), count, events);
    Ok(())
}

fn finish_move(state: &mut GameState, target: StackType, count: usize, events: &mut Vec<GameEvent>) {
    if state.board.hand.is_empty() {
        state.hand_origin = None;
    }
    events.push(GameEvent::Placed { target, count });
}
