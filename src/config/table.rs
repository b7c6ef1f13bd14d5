// src/config/table.rs
//! 盤面の大きさに関する定数だよ！

pub const RANKS_PER_SUIT: usize = 13;
pub const FOUNDATION_COUNT: usize = 4; // 組札はスートごとに 1 つ
pub const DECK_SIZE: usize = FOUNDATION_COUNT * RANKS_PER_SUIT; // 標準デッキの枚数
pub const TABLEAU_COLUMNS: usize = 7; // 場札の列数
/// 配り終わった後に山札に残る枚数 (52 - (1 + 2 + ... + 7))。
pub const INITIAL_STOCK_SIZE: usize = DECK_SIZE - TABLEAU_COLUMNS * (TABLEAU_COLUMNS + 1) / 2;
