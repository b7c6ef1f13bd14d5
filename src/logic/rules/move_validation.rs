// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use log::debug;

use crate::board::TableBoard;
use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::logic::rules::{foundation, tableau};

/// 手札を `target_stack` に置けるか検証する。
/// 置き先として有効なのは組札と場札だけ。範囲外のインデックスは false。
pub fn is_move_valid(board: &TableBoard, hand: &[Card], target_stack: StackType) -> bool {
    match target_stack {
        StackType::Foundation(index) => board
            .foundation(index)
            .is_some_and(|f| foundation::can_move_to_foundation(f, hand)),
        StackType::Tableau(index) => board
            .column(index)
            .is_some_and(|column| tableau::can_move_to_tableau(column, hand)),
        StackType::Stock | StackType::Waste | StackType::Hand => {
            debug!("[Rules Validation] Moving to {:?} is not allowed.", target_stack);
            false
        }
    }
}
