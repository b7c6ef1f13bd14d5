// src/components/pile.rs

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::error::EngineError;

/// カードの山 (順番付き) だよ！山札・捨て札・場札の各列・手札 (ドラッグ中のカード) で使う。
///
/// インデックス 0 が一番下 (最初に配られて埋もれてるカード)、
/// 最後の要素が一番上 (プレイヤーに見えていて触れるカード)。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardPile {
    cards: Vec<Card>,
}

impl CardPile {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一番上にカードを 1 枚積む。
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// 複数枚をまとめて積む。並び順はそのまま (先頭が下になる)。
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// 一番上のカードを取り出す。空なら `EmptyCollection`。
    pub fn pop_last_card(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::EmptyCollection)
    }

    pub fn last_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn last_card_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    pub fn first_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// `from_index` から一番上までのカードを返す (取り除かない)。
    /// 範囲外なら空スライス。
    pub fn cards_from(&self, from_index: usize) -> &[Card] {
        self.cards.get(from_index..).unwrap_or(&[])
    }

    /// 全部取り除く。
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// `from_index` から上を取り除く (`cards_from` と同じ範囲)。
    pub fn clear_from(&mut self, from_index: usize) {
        self.cards.truncate(from_index);
    }

    /// `from_index` から上を取り出して返す。`cards_from` + `clear_from` をまとめたもの。
    pub fn take_from(&mut self, from_index: usize) -> Vec<Card> {
        if from_index >= self.cards.len() {
            return Vec::new();
        }
        self.cards.split_off(from_index)
    }

    /// 中身をまるごと取り出して、この山を空にする。
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// 中身を置き換える。
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// 一様ランダムに並べ替える。ゲーム開始時に山札に 1 回だけ使う。
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// 並びを逆にする (捨て札を山札に戻すとき)。
    pub fn reverse(&mut self) {
        self.cards.reverse();
    }

    /// 全カードの表裏を反転する。
    pub fn flip_all(&mut self) {
        self.cards.iter_mut().for_each(Card::flip);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a CardPile {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
