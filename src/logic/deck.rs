// src/logic/deck.rs

use itertools::iproduct;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::table::DECK_SIZE;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スートごとに A → K の順。全部裏向き (`is_face_up: false`)。
/// シャッフルは山札 (`CardPile::shuffle`) に入れてからやる。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    deck.extend(iproduct!(ALL_SUITS, ALL_RANKS).map(|(suit, rank)| Card::new(suit, rank)));
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();

        // 1. 52枚あるか
        assert_eq!(deck.len(), 52);

        // 2. 重複がないか
        let unique: HashSet<_> = deck.iter().map(Card::key).collect();
        assert_eq!(unique.len(), 52, "デッキに重複したカードが見つかりました！");

        // 3. 全部裏向きか
        assert!(deck.iter().all(|card| !card.is_face_up), "デッキに表向きのカードが含まれています！");
    }
}
