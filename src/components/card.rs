// src/components/card.rs

use std::fmt;

// serde を使う宣言！スナップショット (保存/復元) で JSON にするからね。
use serde::{Deserialize, Serialize};

use crate::config::table::RANKS_PER_SUIT;

/// カードのスート（マーク）を表す列挙型だよ！♠️❤️♣️♦️
///
/// 並び順は組札 (Foundation) の並びと同じ: スペード, ハート, クラブ, ダイヤ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
}

/// 全スートの配列。デッキ生成や組札の初期化で使うよ。
pub const ALL_SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

/// カードのランク（数字）だよ！ A=1 から K=13 まで。
///
/// JSON では数字 (1..=13) としてやり取りする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// 全ランクの配列 (A → K の順)。
pub const ALL_RANKS: [Rank; RANKS_PER_SUIT] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// ランクを数値 (1..=13) で返す。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 数値からランクを作る。範囲外なら None。
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.value()
    }
}

/// 1..=13 以外の数値をランクにしようとした時のエラー。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRank(pub u8);

impl fmt::Display for InvalidRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rank {} is outside 1..=13", self.0)
    }
}

impl std::error::Error for InvalidRank {}

impl TryFrom<u8> for Rank {
    type Error = InvalidRank;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::from_value(value).ok_or(InvalidRank(value))
    }
}

/// カードそのものを表す構造体だよ！🃏
///
/// - `suit` と `rank` は作ったら変わらない。
/// - `is_face_up` は `flip()` でだけ切り替える。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作る。デッキの初期状態はこれ。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    /// 表向きのカードを作る。テストや盤面の組み立てで便利！
    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: true }
    }

    /// 表裏をひっくり返す。前提条件はなし。
    pub fn flip(&mut self) {
        self.is_face_up = !self.is_face_up;
    }

    /// (スート, ランク) の組。デッキ内でカードを一意に識別するキーだよ。
    pub fn key(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank {
            Rank::Ace => "A".to_string(),
            Rank::Jack => "J".to_string(),
            Rank::Queen => "Q".to_string(),
            Rank::King => "K".to_string(),
            other => other.value().to_string(),
        };
        let suit = match self.suit {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Club => '♣',
            Suit::Diamond => '♦',
        };
        write!(f, "{rank}{suit}")
    }
}
