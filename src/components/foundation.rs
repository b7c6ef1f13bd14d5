// src/components/foundation.rs

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Suit};
use crate::components::pile::CardPile;
use crate::error::EngineError;

/// 組札 (Foundation)。スートが 1 つに決まっている山だよ。
///
/// 中身は常に表向きで、そのスートの A から 1 つずつ昇順に積まれている。
/// 置けるかどうかの判定は `logic::rules::foundation` がやるので、ここは入れ物だけ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundation {
    suit: Suit,
    pile: CardPile,
}

impl Foundation {
    pub fn new(suit: Suit) -> Self {
        Self { suit, pile: CardPile::new() }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn pile(&self) -> &CardPile {
        &self.pile
    }

    pub fn len(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    pub fn last_card(&self) -> Option<&Card> {
        self.pile.last_card()
    }

    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }

    pub fn add_card(&mut self, card: Card) {
        debug_assert_eq!(card.suit, self.suit, "foundation received a card of another suit");
        self.pile.add_card(card);
    }

    pub fn pop_last_card(&mut self) -> Result<Card, EngineError> {
        self.pile.pop_last_card()
    }
}
