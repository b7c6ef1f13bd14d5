//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank};
use crate::components::foundation::Foundation;

/// 手札が組札の一番上に置けるかチェックする。
///
/// 組札に置けるのは 1 枚だけ。複数枚の手札は常に false。
pub fn can_move_to_foundation(foundation: &Foundation, hand: &[Card]) -> bool {
    match hand {
        [card] => can_place_card_on_foundation(foundation, card),
        _ => {
            trace!("[Foundation Rule] hand holds {} cards, only single cards go to a foundation", hand.len());
            false
        }
    }
}

/// カード 1 枚が組札に置けるか。
/// - 空の組札: 同じスートの A だけ。
/// - 空じゃない: 同じスートで、一番上のランク + 1。
pub fn can_place_card_on_foundation(foundation: &Foundation, card: &Card) -> bool {
    if card.suit != foundation.suit() {
        trace!("[Foundation Rule] {card} does not match suit {:?}", foundation.suit());
        return false;
    }
    let result = match foundation.last_card() {
        None => card.rank == Rank::Ace,
        Some(top) => card.rank.value() == top.rank.value() + 1,
    };
    trace!("[Foundation Rule] {card} onto {:?} foundation of {}: {result}", foundation.suit(), foundation.len());
    result
}

/// 組札の一番上を拾えるか (空じゃなければ OK)。
pub fn can_pick_up_from_foundation(foundation: &Foundation) -> bool {
    !foundation.is_empty()
}
