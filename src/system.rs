// src/system.rs

use crate::components::game_state::GameState;
use crate::error::EngineError;
use crate::protocol::GameEvent;

/// System（システム）トレイトだよ！
///
/// tick の最後 (拾う/置く処理が終わった後) に毎回呼ばれる後片付けのロジックをまとめる。
/// 場札の一番上をめくるとか、勝利判定とか。
/// 起きたことは `events` に積んで Renderer に知らせる。
pub trait System {
    fn run(&mut self, state: &mut GameState, events: &mut Vec<GameEvent>) -> Result<(), EngineError>;
}
