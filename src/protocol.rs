// src/protocol.rs

// このファイルは、エンジンから Renderer に渡すデータの形を定義するよ！💌
// Renderer はイベントを見てアニメーションのタイマーを巻き戻したり、
// card_held / victory を見て描き方を決めたりする。
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::dragging_info::HandOrigin;
use crate::components::stack::StackType;

/// 1 tick の間に起きた出来事。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// 山札から捨て札に 1 枚めくった。
    CardDrawn { card: Card },
    /// 山札が空の時にクリックされて、捨て札 `count` 枚を山札に戻した。
    StockRecycled { count: usize },
    /// 手札にカードを拾った。
    PickedUp { origin: HandOrigin, count: usize },
    /// 手札を組札か場札に置いた。
    Placed { target: StackType, count: usize },
    /// どこにも置けなかったので元の場所に戻した。
    Returned { origin: HandOrigin, count: usize },
    /// 場札の一番上の裏向きカードを表にした。
    CardRevealed { column: u8, card: Card },
    /// 勝った！
    Won,
}

/// `MoveEngine::tick` の結果。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    pub card_held: bool,
    pub victory: bool,
}
