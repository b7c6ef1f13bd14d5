//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::pile::CardPile;

/// 場札の 7 列が全部空ならクリア。
/// 山札・捨て札・組札にどう残っているかは関係ない。
pub fn check_win_condition(tableau: &[CardPile]) -> bool {
    tableau.iter().all(CardPile::is_empty)
}
