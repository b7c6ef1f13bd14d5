//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use itertools::Itertools;
use log::trace;

use super::common::is_opposite_color;
use crate::components::card::{Card, Rank};
use crate::components::pile::CardPile;

/// 手札 (1 枚以上の並び) が場札の列に置けるかチェックする。
/// 判定に使うのは手札の一番下 (最初の) カードだけ。
pub fn can_move_to_tableau(column: &CardPile, hand: &[Card]) -> bool {
    match hand.first() {
        Some(bottom) => can_place_card_on_tableau(column, bottom),
        None => false,
    }
}

/// カード 1 枚が場札の列の上に置けるか。
/// - 空の列: K だけ。
/// - 空じゃない: 色が逆で、ランクが一番上より 1 小さい。
pub fn can_place_card_on_tableau(column: &CardPile, card: &Card) -> bool {
    match column.last_card() {
        None => {
            let is_king = card.rank == Rank::King;
            trace!("[Tableau Rule] {card} onto empty column. Is King: {is_king}");
            is_king
        }
        Some(top) => {
            let colors_different = is_opposite_color(card, top);
            let rank_is_one_less = card.rank.value() + 1 == top.rank.value();
            trace!(
                "[Tableau Rule] {card} onto {top}. Colors different: {colors_different}. Rank is one less: {rank_is_one_less}"
            );
            colors_different && rank_is_one_less
        }
    }
}

/// 列の `index` 番目から上をまとめて拾えるか。表向きのカードだけ拾える。
pub fn can_pick_up_from_tableau(column: &CardPile, index: usize) -> bool {
    column.card(index).is_some_and(|card| card.is_face_up)
}

/// 下から上に向かって、色が交互でランクが 1 ずつ下がっている並びか。
pub fn is_valid_run(cards: &[Card]) -> bool {
    cards
        .iter()
        .tuple_windows()
        .all(|(below, above)| is_opposite_color(below, above) && above.rank.value() + 1 == below.rank.value())
}
