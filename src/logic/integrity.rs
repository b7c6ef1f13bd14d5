// src/logic/integrity.rs
//! ゲーム状態の不変条件チェックだよ。
//!
//! 普通にプレイしている限りは全部成り立つはずなので、主な使い道は
//! 外から読み込んだスナップショットの検証と、テストでの確認。

use std::fmt;

use itertools::Itertools;

use crate::board::TableBoard;
use crate::components::card::{Card, Rank, Suit, ALL_SUITS};
use crate::components::dragging_info::HandOrigin;
use crate::components::game_state::{GameState, GameStatus};
use crate::config::table::DECK_SIZE;
use crate::logic::rules::tableau::is_valid_run;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    WrongCardCount { expected: usize, found: usize },
    DuplicateCard { suit: Suit, rank: Rank },
    FoundationSuitMismatch { index: u8 },
    FoundationOutOfOrder { index: u8 },
    FaceDownInFoundation { index: u8 },
    FaceUpInStock,
    FaceDownInWaste,
    FaceDownInHand,
    /// 表向きのカードの上に裏向きのカードがある。
    FaceDownAboveFaceUp { column: u8 },
    /// 表向き部分が「色交互・1 ずつ下がる」になっていない。
    BrokenTableauRun { column: u8 },
    /// 手札の並びが場札のルールを満たしていない。
    BrokenHandRun,
    HandWithoutOrigin,
    OriginWithoutHand,
    /// 捨て札・組札から拾った手札は 1 枚のはず。
    OriginHoldsOneCard { found: usize },
    OriginOutOfRange,
    /// Won なのに場札か手札にカードが残っている。
    WonWithCardsInPlay,
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityError::WrongCardCount { expected, found } => {
                write!(f, "expected {expected} cards on the table, found {found}")
            }
            IntegrityError::DuplicateCard { suit, rank } => {
                write!(f, "card {} appears more than once", Card::new(*suit, *rank))
            }
            IntegrityError::FoundationSuitMismatch { index } => {
                write!(f, "foundation {index} holds a card of the wrong suit")
            }
            IntegrityError::FoundationOutOfOrder { index } => {
                write!(f, "foundation {index} is not an ascending run from the ace")
            }
            IntegrityError::FaceDownInFoundation { index } => {
                write!(f, "foundation {index} holds a face-down card")
            }
            IntegrityError::FaceUpInStock => write!(f, "stock holds a face-up card"),
            IntegrityError::FaceDownInWaste => write!(f, "waste holds a face-down card"),
            IntegrityError::FaceDownInHand => write!(f, "hand holds a face-down card"),
            IntegrityError::FaceDownAboveFaceUp { column } => {
                write!(f, "tableau column {column} has a face-down card above a face-up card")
            }
            IntegrityError::BrokenTableauRun { column } => {
                write!(f, "tableau column {column} has a face-up run that does not alternate and descend")
            }
            IntegrityError::BrokenHandRun => write!(f, "hand holds cards that do not form a run"),
            IntegrityError::HandWithoutOrigin => write!(f, "hand holds cards but no origin is recorded"),
            IntegrityError::OriginWithoutHand => write!(f, "an origin is recorded but the hand is empty"),
            IntegrityError::OriginHoldsOneCard { found } => {
                write!(f, "a waste or foundation pickup must hold exactly one card, found {found}")
            }
            IntegrityError::OriginOutOfRange => write!(f, "hand origin refers to a pile that does not exist"),
            IntegrityError::WonWithCardsInPlay => {
                write!(f, "status is Won but cards remain on the tableau or in the hand")
            }
        }
    }
}

impl std::error::Error for IntegrityError {}

/// 全部のチェックをまとめて行う。
pub fn check_game_state(state: &GameState) -> Result<(), IntegrityError> {
    check_deck_conservation(&state.board)?;
    check_foundations(&state.board)?;
    check_stock_and_waste(&state.board)?;
    check_tableau(&state.board)?;
    check_hand(&state.board, state.hand_origin)?;
    check_status(state)
}

/// 52 枚ちょうど、重複なし。
pub fn check_deck_conservation(board: &TableBoard) -> Result<(), IntegrityError> {
    let found = board.card_count();
    if found != DECK_SIZE {
        return Err(IntegrityError::WrongCardCount { expected: DECK_SIZE, found });
    }
    if let Some((suit, rank)) = board.all_cards().map(Card::key).duplicates().next() {
        return Err(IntegrityError::DuplicateCard { suit, rank });
    }
    Ok(())
}

/// 組札: スートが合っていて、表向きで、A から 1 ずつ上がっている。
pub fn check_foundations(board: &TableBoard) -> Result<(), IntegrityError> {
    for ((index, foundation), expected_suit) in (0u8..).zip(board.foundations.iter()).zip(ALL_SUITS) {
        if foundation.suit() != expected_suit || foundation.cards().iter().any(|c| c.suit != expected_suit) {
            return Err(IntegrityError::FoundationSuitMismatch { index });
        }
        if foundation.cards().iter().any(|c| !c.is_face_up) {
            return Err(IntegrityError::FaceDownInFoundation { index });
        }
        let ascending = foundation
            .cards()
            .iter()
            .zip(1u8..)
            .all(|(card, expected)| card.rank.value() == expected);
        if !ascending {
            return Err(IntegrityError::FoundationOutOfOrder { index });
        }
    }
    Ok(())
}

/// 山札は全部裏、捨て札は全部表。
pub fn check_stock_and_waste(board: &TableBoard) -> Result<(), IntegrityError> {
    if board.stock.iter().any(|c| c.is_face_up) {
        return Err(IntegrityError::FaceUpInStock);
    }
    if board.waste.iter().any(|c| !c.is_face_up) {
        return Err(IntegrityError::FaceDownInWaste);
    }
    Ok(())
}

/// 場札: 裏向き部分が下、表向き部分が上で、表向き部分は正しい並び。
pub fn check_tableau(board: &TableBoard) -> Result<(), IntegrityError> {
    for (column, pile) in (0u8..).zip(board.tableau.iter()) {
        let first_face_up = pile.iter().position(|c| c.is_face_up).unwrap_or(pile.len());
        let face_up_run = pile.cards_from(first_face_up);
        if face_up_run.iter().any(|c| !c.is_face_up) {
            return Err(IntegrityError::FaceDownAboveFaceUp { column });
        }
        if !is_valid_run(face_up_run) {
            return Err(IntegrityError::BrokenTableauRun { column });
        }
    }
    Ok(())
}

/// 手札と出どころの記録が食い違っていないか。
pub fn check_hand(board: &TableBoard, origin: Option<HandOrigin>) -> Result<(), IntegrityError> {
    if board.hand.iter().any(|c| !c.is_face_up) {
        return Err(IntegrityError::FaceDownInHand);
    }
    match (board.hand.is_empty(), origin) {
        (true, None) => Ok(()),
        (true, Some(_)) => Err(IntegrityError::OriginWithoutHand),
        (false, None) => Err(IntegrityError::HandWithoutOrigin),
        (false, Some(origin)) => {
            let in_range = match origin {
                HandOrigin::Waste => true,
                HandOrigin::Foundation(index) => board.foundation(index).is_some(),
                HandOrigin::Tableau { column, .. } => board.column(column).is_some(),
            };
            if !in_range {
                return Err(IntegrityError::OriginOutOfRange);
            }
            let single_card_origin = matches!(origin, HandOrigin::Waste | HandOrigin::Foundation(_));
            if single_card_origin && board.hand.len() != 1 {
                return Err(IntegrityError::OriginHoldsOneCard { found: board.hand.len() });
            }
            if !is_valid_run(board.hand.cards()) {
                return Err(IntegrityError::BrokenHandRun);
            }
            Ok(())
        }
    }
}

/// Won は場札も手札も空の時だけ。Playing で場札が空なのは、次の tick で Won になるのでOK。
pub fn check_status(state: &GameState) -> Result<(), IntegrityError> {
    if state.status == GameStatus::Won && (!state.board.is_victory() || state.board.is_card_held()) {
        return Err(IntegrityError::WonWithCardsInPlay);
    }
    Ok(())
}
