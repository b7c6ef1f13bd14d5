// src/systems/reveal_system.rs

use log::debug;

use crate::components::game_state::GameState;
use crate::error::EngineError;
use crate::protocol::GameEvent;
use crate::system::System;

/// 場札の一番上が裏向きのまま残っていたら表にするシステムだよ。👀
///
/// 手札を持っている間は何もしない。拾った列の下にあった裏向きカードは、
/// 置き終わる (か元に戻る) まで裏のまま。
#[derive(Default, Debug)]
pub struct RevealSystem;

impl System for RevealSystem {
    fn run(&mut self, state: &mut GameState, events: &mut Vec<GameEvent>) -> Result<(), EngineError> {
        if state.board.is_card_held() {
            return Ok(());
        }
        for (column, pile) in (0u8..).zip(state.board.tableau.iter_mut()) {
            if let Some(top) = pile.last_card_mut().filter(|card| !card.is_face_up) {
                top.flip();
                debug!("Revealed {} on tableau column {}", top, column);
                events.push(GameEvent::CardRevealed { column, card: *top });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TableBoard;
    use crate::components::card::{Card, Rank, Suit};

    fn state_with_hidden_top() -> GameState {
        let mut board = TableBoard::empty();
        board.tableau[2].add_card(Card::new(Suit::Club, Rank::Four));
        board.tableau[3].add_card(Card::face_up(Suit::Heart, Rank::Nine));
        GameState::new(board)
    }

    #[test]
    fn flips_face_down_tops_when_hand_is_empty() {
        let mut state = state_with_hidden_top();
        let mut events = Vec::new();
        RevealSystem.run(&mut state, &mut events).unwrap();

        assert!(state.board.tableau[2].last_card().unwrap().is_face_up);
        assert_eq!(
            events,
            vec![GameEvent::CardRevealed { column: 2, card: Card::face_up(Suit::Club, Rank::Four) }]
        );

        // もう一度走らせても何も起きない
        events.clear();
        RevealSystem.run(&mut state, &mut events).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn waits_while_a_card_is_held() {
        let mut state = state_with_hidden_top();
        state.board.hand.add_card(Card::face_up(Suit::Spade, Rank::Three));
        let mut events = Vec::new();
        RevealSystem.run(&mut state, &mut events).unwrap();

        assert!(!state.board.tableau[2].last_card().unwrap().is_face_up);
        assert!(events.is_empty());
    }
}
