// src/logic/mod.rs
//! ゲームのルールと判定ロジック。盤面を直接書き換えない純粋な関数たち。

pub mod deck;
pub mod integrity;
pub mod rules;
