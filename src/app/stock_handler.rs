// src/app/stock_handler.rs
//! 山札をクリックした時の処理 (捨て札に 1 枚めくる / 捨て札を山札に戻す)。

use log::info;

use crate::board::TableBoard;
use crate::components::card::Card;
use crate::error::EngineError;
use crate::logic::rules::stock_waste;
use crate::protocol::GameEvent;

/// 山札クリック。空なら捨て札を戻し、空じゃなければ 1 枚めくる。手札には入らない。
pub fn handle_stock_click(board: &mut TableBoard, events: &mut Vec<GameEvent>) -> Result<(), EngineError> {
    if stock_waste::can_deal_from_stock(board.stock.is_empty()) {
        let card = deal_one_card_from_stock(board)?;
        events.push(GameEvent::CardDrawn { card });
    } else {
        let count = reset_waste_to_stock(board);
        if count > 0 {
            events.push(GameEvent::StockRecycled { count });
        }
    }
    Ok(())
}

/// 山札の一番上を表にして捨て札に積む。
pub fn deal_one_card_from_stock(board: &mut TableBoard) -> Result<Card, EngineError> {
    let mut card = board.stock.pop_last_card()?;
    card.flip();
    board.waste.add_card(card);
    info!("Dealt {} from Stock to Waste ({} left in Stock).", card, board.stock.len());
    Ok(card)
}

/// 捨て札を全部山札に戻す: 逆順にして移して、全部裏にする。
/// 戻した枚数を返す。
pub fn reset_waste_to_stock(board: &mut TableBoard) -> usize {
    if !stock_waste::can_reset_stock_from_waste(board.stock.is_empty(), board.waste.is_empty()) {
        info!("Stock and Waste are both empty (or Stock is not empty). Nothing to reset.");
        return 0;
    }
    board.waste.reverse();
    board.stock.set_cards(board.waste.take_all());
    board.stock.flip_all();
    info!("Waste pile reset to Stock: {} cards.", board.stock.len());
    board.stock.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn click_on_full_stock_draws_one_face_up() {
        let mut board = TableBoard::empty();
        board.stock.add_card(Card::new(Suit::Club, Rank::Two));
        board.stock.add_card(Card::new(Suit::Heart, Rank::Nine));
        let mut events = Vec::new();

        handle_stock_click(&mut board, &mut events).unwrap();

        assert_eq!(board.stock.len(), 1);
        assert_eq!(board.waste.last_card(), Some(&Card::face_up(Suit::Heart, Rank::Nine)));
        assert_eq!(events, vec![GameEvent::CardDrawn { card: Card::face_up(Suit::Heart, Rank::Nine) }]);
        assert!(board.hand.is_empty());
    }

    #[test]
    fn click_on_empty_stock_recycles_waste_in_reverse() {
        let mut board = TableBoard::empty();
        let waste = vec![
            Card::face_up(Suit::Spade, Rank::Three),
            Card::face_up(Suit::Heart, Rank::Jack),
            Card::face_up(Suit::Diamond, Rank::Five),
        ];
        board.waste.add_cards(waste.clone());
        let mut events = Vec::new();

        handle_stock_click(&mut board, &mut events).unwrap();

        assert!(board.waste.is_empty());
        assert_eq!(board.stock.len(), 3);
        let keys: Vec<_> = board.stock.iter().map(Card::key).collect();
        let expected: Vec<_> = waste.iter().rev().map(Card::key).collect();
        assert_eq!(keys, expected);
        assert!(board.stock.iter().all(|c| !c.is_face_up));
        assert_eq!(events, vec![GameEvent::StockRecycled { count: 3 }]);
    }

    #[test]
    fn recycle_then_draw_replays_the_same_order() {
        let mut board = TableBoard::empty();
        board.stock.add_cards(vec![
            Card::new(Suit::Spade, Rank::Ace),
            Card::new(Suit::Heart, Rank::Two),
            Card::new(Suit::Club, Rank::Three),
        ]);
        let mut events = Vec::new();
        let mut first_pass = Vec::new();
        for _ in 0..3 {
            first_pass.push(deal_one_card_from_stock(&mut board).unwrap().key());
        }
        handle_stock_click(&mut board, &mut events).unwrap();
        let mut second_pass = Vec::new();
        for _ in 0..3 {
            second_pass.push(deal_one_card_from_stock(&mut board).unwrap().key());
        }
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn click_with_both_piles_empty_does_nothing() {
        let mut board = TableBoard::empty();
        let mut events = Vec::new();
        handle_stock_click(&mut board, &mut events).unwrap();
        assert!(events.is_empty());
        assert!(board.stock.is_empty() && board.waste.is_empty());
    }
}
