// src/app/drag_handler.rs
//! ドラッグの処理: 押した時に拾って、離した時に置く (か元に戻す)。

use log::{debug, info};

use super::drag_apply_handler;
use crate::app::event_handler::HitRegion;
use crate::components::dragging_info::HandOrigin;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::error::EngineError;
use crate::logic::rules::{self, foundation, stock_waste, tableau};
use crate::protocol::GameEvent;

/// ドラッグ開始: ポインターの下にあるカードを手札に拾う。
///
/// 拾えない場所 (空の捨て札、裏向きのカード、範囲外の depth など) なら何もしない。
/// 山札は拾う対象じゃないので stock_handler 側で処理する。
pub fn handle_drag_start(
    state: &mut GameState,
    region: HitRegion,
    events: &mut Vec<GameEvent>,
) -> Result<(), EngineError> {
    let board = &mut state.board;
    let origin = match region {
        HitRegion::Waste => {
            if !stock_waste::can_pick_up_from_waste(&board.waste) {
                return Ok(());
            }
            let card = board.waste.pop_last_card()?;
            board.hand.add_card(card);
            HandOrigin::Waste
        }
        HitRegion::Foundation(index) => {
            let pile = board
                .foundation_mut(index)
                .ok_or(EngineError::InvalidRegion { kind: "foundation", index: usize::from(index) })?;
            if !foundation::can_pick_up_from_foundation(pile) {
                return Ok(());
            }
            let card = pile.pop_last_card()?;
            board.hand.add_card(card);
            HandOrigin::Foundation(index)
        }
        HitRegion::Tableau { column, depth } => {
            let pile = board
                .column_mut(column)
                .ok_or(EngineError::InvalidRegion { kind: "tableau column", index: usize::from(column) })?;
            if !tableau::can_pick_up_from_tableau(pile, depth) {
                debug!("Column {} depth {} cannot be picked up.", column, depth);
                return Ok(());
            }
            let run = pile.take_from(depth);
            board.hand.add_cards(run);
            HandOrigin::Tableau { column, index: depth }
        }
        HitRegion::Stock => return Ok(()),
    };

    let count = state.board.hand.len();
    state.hand_origin = Some(origin);
    info!("Picked up {} card(s) from {:?}.", count, origin);
    events.push(GameEvent::PickedUp { origin, count });
    Ok(())
}

/// ドラッグ終了: 手札をポインターの下の組札 / 場札に置く。置けなければ元に戻す。
///
/// 手札が空になるまで繰り返す。置く → 戻す、のどちらかで必ず空になる。
pub fn handle_drag_end(
    state: &mut GameState,
    hit: Option<HitRegion>,
    events: &mut Vec<GameEvent>,
) -> Result<(), EngineError> {
    while state.board.is_card_held() {
        match hit {
            Some(HitRegion::Foundation(index))
                if rules::is_move_valid(&state.board, state.board.hand.cards(), StackType::Foundation(index)) =>
            {
                drag_apply_handler::move_hand_to_foundation(state, index, events)?;
            }
            Some(HitRegion::Tableau { column, depth })
                if targets_column_top(state, column, depth)
                    && rules::is_move_valid(&state.board, state.board.hand.cards(), StackType::Tableau(column)) =>
            {
                drag_apply_handler::move_hand_to_tableau(state, column, events)?;
            }
            _ => return_hand_to_origin(state, events)?,
        }
    }
    Ok(())
}

// 場札に置けるのは、列の一番上のカード (空の列ならその枠) に重ねた時だけ。
fn targets_column_top(state: &GameState, column: u8, depth: usize) -> bool {
    state
        .board
        .column(column)
        .is_some_and(|pile| depth.saturating_add(1) >= pile.len())
}

/// 手札を拾った場所に戻す。捨て札と組札は 1 枚、場札は全部まとめて。
pub fn return_hand_to_origin(state: &mut GameState, events: &mut Vec<GameEvent>) -> Result<(), EngineError> {
    let origin = state.hand_origin.ok_or(EngineError::MissingHandOrigin)?;
    let board = &mut state.board;
    let count = match origin {
        HandOrigin::Waste => {
            let card = board.hand.pop_last_card()?;
            board.waste.add_card(card);
            1
        }
        HandOrigin::Foundation(index) => {
            let card = board.hand.pop_last_card()?;
            board
                .foundation_mut(index)
                .ok_or(EngineError::InvalidRegion { kind: "foundation", index: usize::from(index) })?
                .add_card(card);
            1
        }
        HandOrigin::Tableau { column, .. } => {
            let cards = board.hand.take_all();
            let count = cards.len();
            board
                .column_mut(column)
                .ok_or(EngineError::InvalidRegion { kind: "tableau column", index: usize::from(column) })?
                .add_cards(cards);
            count
        }
    };

    if board.hand.is_empty() {
        state.hand_origin = None;
    }
    info!("Returned {} card(s) to {:?}.", count, origin);
    events.push(GameEvent::Returned { origin, count });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TableBoard;
    use crate::components::card::{Card, Rank, Suit};

    fn state_with(board: TableBoard) -> GameState {
        GameState::new(board)
    }

    #[test]
    fn pick_up_from_waste_takes_top_card() {
        let mut board = TableBoard::empty();
        board.waste.add_card(Card::face_up(Suit::Club, Rank::Four));
        board.waste.add_card(Card::face_up(Suit::Heart, Rank::Queen));
        let mut state = state_with(board);
        let mut events = Vec::new();

        handle_drag_start(&mut state, HitRegion::Waste, &mut events).unwrap();

        assert_eq!(state.board.hand.cards(), &[Card::face_up(Suit::Heart, Rank::Queen)]);
        assert_eq!(state.board.waste.len(), 1);
        assert_eq!(state.hand_origin, Some(HandOrigin::Waste));
        assert_eq!(events, vec![GameEvent::PickedUp { origin: HandOrigin::Waste, count: 1 }]);
    }

    #[test]
    fn pick_up_from_tableau_takes_the_run_above() {
        let mut board = TableBoard::empty();
        board.tableau[3].add_card(Card::new(Suit::Spade, Rank::Two));
        board.tableau[3].add_card(Card::face_up(Suit::Club, Rank::Nine));
        board.tableau[3].add_card(Card::face_up(Suit::Diamond, Rank::Eight));
        let mut state = state_with(board);
        let mut events = Vec::new();

        handle_drag_start(&mut state, HitRegion::Tableau { column: 3, depth: 1 }, &mut events).unwrap();

        assert_eq!(state.board.hand.len(), 2);
        assert_eq!(state.board.tableau[3].len(), 1);
        assert_eq!(state.hand_origin, Some(HandOrigin::Tableau { column: 3, index: 1 }));
    }

    #[test]
    fn face_down_and_out_of_range_depths_are_ignored() {
        let mut board = TableBoard::empty();
        board.tableau[0].add_card(Card::new(Suit::Spade, Rank::Two));
        board.tableau[0].add_card(Card::face_up(Suit::Club, Rank::Nine));
        let mut state = state_with(board);
        let mut events = Vec::new();

        handle_drag_start(&mut state, HitRegion::Tableau { column: 0, depth: 0 }, &mut events).unwrap();
        handle_drag_start(&mut state, HitRegion::Tableau { column: 0, depth: 5 }, &mut events).unwrap();
        handle_drag_start(&mut state, HitRegion::Waste, &mut events).unwrap();

        assert!(state.board.hand.is_empty());
        assert!(state.hand_origin.is_none());
        assert!(events.is_empty());
    }

    #[test]
    fn drop_on_valid_foundation_places_the_card() {
        let mut board = TableBoard::empty();
        board.hand.add_card(Card::face_up(Suit::Heart, Rank::Ace));
        let mut state = state_with(board);
        state.hand_origin = Some(HandOrigin::Waste);
        let mut events = Vec::new();

        handle_drag_end(&mut state, Some(HitRegion::Foundation(1)), &mut events).unwrap();

        assert_eq!(state.board.foundations[1].len(), 1);
        assert!(state.board.hand.is_empty());
        assert!(state.hand_origin.is_none());
        assert_eq!(events, vec![GameEvent::Placed { target: StackType::Foundation(1), count: 1 }]);
    }

    #[test]
    fn drop_on_buried_card_returns_to_origin() {
        let mut board = TableBoard::empty();
        board.tableau[2].add_card(Card::face_up(Suit::Club, Rank::Seven));
        board.tableau[2].add_card(Card::face_up(Suit::Heart, Rank::Six));
        board.hand.add_card(Card::face_up(Suit::Diamond, Rank::Six));
        let mut state = state_with(board);
        state.hand_origin = Some(HandOrigin::Waste);
        let mut events = Vec::new();

        // 7♣ は列の一番上じゃないので、そこに重ねても置けない
        handle_drag_end(&mut state, Some(HitRegion::Tableau { column: 2, depth: 0 }), &mut events).unwrap();

        assert_eq!(state.board.waste.last_card(), Some(&Card::face_up(Suit::Diamond, Rank::Six)));
        assert_eq!(state.board.tableau[2].len(), 2);
        assert_eq!(events, vec![GameEvent::Returned { origin: HandOrigin::Waste, count: 1 }]);
    }

    #[test]
    fn drop_on_nothing_returns_run_to_its_column() {
        let mut board = TableBoard::empty();
        board.tableau[5].add_card(Card::face_up(Suit::Spade, Rank::King));
        board.hand.add_card(Card::face_up(Suit::Heart, Rank::Queen));
        board.hand.add_card(Card::face_up(Suit::Club, Rank::Jack));
        let mut state = state_with(board);
        state.hand_origin = Some(HandOrigin::Tableau { column: 5, index: 1 });
        let mut events = Vec::new();

        handle_drag_end(&mut state, None, &mut events).unwrap();

        let keys: Vec<_> = state.board.tableau[5].iter().map(Card::key).collect();
        assert_eq!(
            keys,
            vec![(Suit::Spade, Rank::King), (Suit::Heart, Rank::Queen), (Suit::Club, Rank::Jack)]
        );
        assert!(state.hand_origin.is_none());
    }

    #[test]
    fn missing_origin_is_an_error() {
        let mut board = TableBoard::empty();
        board.hand.add_card(Card::face_up(Suit::Heart, Rank::Queen));
        let mut state = state_with(board);
        let mut events = Vec::new();
        assert_eq!(
            handle_drag_end(&mut state, None, &mut events),
            Err(EngineError::MissingHandOrigin)
        );
    }

    #[test]
    fn huge_depth_counts_as_the_column_top() {
        let mut board = TableBoard::empty();
        board.tableau[0].add_card(Card::face_up(Suit::Club, Rank::Seven));
        board.hand.add_card(Card::face_up(Suit::Heart, Rank::Six));
        let mut state = state_with(board);
        state.hand_origin = Some(HandOrigin::Waste);
        let mut events = Vec::new();

        // depth がどれだけ大きくても溢れずに、一番上への重ねとして扱う
        handle_drag_end(&mut state, Some(HitRegion::Tableau { column: 0, depth: usize::MAX }), &mut events).unwrap();

        assert_eq!(state.board.tableau[0].len(), 2);
        assert_eq!(events, vec![GameEvent::Placed { target: StackType::Tableau(0), count: 1 }]);
    }
}
