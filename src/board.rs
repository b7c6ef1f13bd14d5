// src/board.rs

use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, ALL_SUITS};
use crate::components::foundation::Foundation;
use crate::components::pile::CardPile;
use crate::config::table::{FOUNDATION_COUNT, TABLEAU_COLUMNS};
use crate::error::EngineError;
use crate::logic::rules::check_win_condition;
use crate::systems::deal_system::DealInitialCardsSystem;

/// 盤面だよ！山札・捨て札・組札 4 つ・場札 7 列・手札を全部持っている。
///
/// 全部の山のカードを合わせると、常にちょうど 52 枚のデッキ 1 組になる
/// (増えも減りもしない)。手札が空じゃないのは、拾ってから置くまでの間だけ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBoard {
    pub stock: CardPile,
    pub waste: CardPile,
    /// `foundations[i]` のスートは `ALL_SUITS[i]`。
    pub foundations: [Foundation; FOUNDATION_COUNT],
    pub tableau: [CardPile; TABLEAU_COLUMNS],
    pub hand: CardPile,
}

impl Default for TableBoard {
    fn default() -> Self {
        Self::empty()
    }
}

impl TableBoard {
    /// カードが 1 枚もない盤面。テストで盤面を組み立てるときの出発点。
    pub fn empty() -> Self {
        Self {
            stock: CardPile::new(),
            waste: CardPile::new(),
            foundations: ALL_SUITS.map(Foundation::new),
            tableau: std::array::from_fn(|_| CardPile::new()),
            hand: CardPile::new(),
        }
    }

    /// `thread_rng` でシャッフルして配った盤面。
    pub fn new() -> Result<Self, EngineError> {
        Self::deal_with_rng(&mut thread_rng())
    }

    /// シードを固定して配る。同じシードなら同じ配置になる。
    pub fn with_seed(seed: u64) -> Result<Self, EngineError> {
        Self::deal_with_rng(&mut StdRng::seed_from_u64(seed))
    }

    pub fn deal_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, EngineError> {
        let mut board = Self::empty();
        DealInitialCardsSystem.deal(&mut board, rng)?;
        Ok(board)
    }

    pub fn foundation(&self, index: u8) -> Option<&Foundation> {
        self.foundations.get(usize::from(index))
    }

    pub fn foundation_mut(&mut self, index: u8) -> Option<&mut Foundation> {
        self.foundations.get_mut(usize::from(index))
    }

    pub fn column(&self, index: u8) -> Option<&CardPile> {
        self.tableau.get(usize::from(index))
    }

    pub fn column_mut(&mut self, index: u8) -> Option<&mut CardPile> {
        self.tableau.get_mut(usize::from(index))
    }

    /// 勝利判定: 場札が全部空。
    pub fn is_victory(&self) -> bool {
        check_win_condition(&self.tableau)
    }

    /// 今カードを持っているか (Renderer が手札を描くかどうかに使う)。
    pub fn is_card_held(&self) -> bool {
        !self.hand.is_empty()
    }

    /// 盤面上の全カード (山札 → 捨て札 → 組札 → 場札 → 手札 の順)。
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundations.iter().flat_map(|f| f.cards().iter()))
            .chain(self.tableau.iter().flat_map(CardPile::iter))
            .chain(self.hand.iter())
    }

    pub fn card_count(&self) -> usize {
        self.all_cards().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::config::table::{DECK_SIZE, INITIAL_STOCK_SIZE};

    #[test]
    fn empty_board_has_suited_foundations() {
        let board = TableBoard::empty();
        assert_eq!(board.card_count(), 0);
        let suits: Vec<Suit> = board.foundations.iter().map(Foundation::suit).collect();
        assert_eq!(suits, vec![Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond]);
        assert!(!board.is_card_held());
    }

    #[test]
    fn seeded_boards_are_reproducible() {
        let a = TableBoard::with_seed(1234).unwrap();
        let b = TableBoard::with_seed(1234).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.card_count(), DECK_SIZE);
        assert_eq!(a.stock.len(), INITIAL_STOCK_SIZE);
    }

    #[test]
    fn victory_only_looks_at_the_tableau() {
        let mut board = TableBoard::empty();
        assert!(board.is_victory());

        // 山札や捨て札に残っていても関係ない
        board.stock.add_card(Card::new(Suit::Spade, Rank::Two));
        board.waste.add_card(Card::face_up(Suit::Heart, Rank::Five));
        assert!(board.is_victory());

        board.tableau[6].add_card(Card::face_up(Suit::Club, Rank::King));
        assert!(!board.is_victory());
    }

    #[test]
    fn index_accessors_reject_out_of_range() {
        let board = TableBoard::empty();
        assert!(board.foundation(3).is_some());
        assert!(board.foundation(4).is_none());
        assert!(board.column(6).is_some());
        assert!(board.column(7).is_none());
    }
}
