// src/config/mod.rs
//! 盤面の定数とエンジン設定。

pub mod engine;
pub mod table;

pub use engine::EngineConfig;
