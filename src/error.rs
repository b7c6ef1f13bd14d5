// src/error.rs
//! エンジン全体で使うエラー型だよ。
//!
//! 不正な置き場所へのドロップはエラーじゃない (元の場所に戻すだけ) ので、ここには無いよ。

use std::fmt;

use crate::logic::integrity::IntegrityError;

/// エンジンのエラー。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// 空の山からカードを取ろうとした。正しいエンジンの流れでは絶対に起きない (ロジックのバグ)。
    EmptyCollection,
    /// 手札があるのに拾った場所の記録が無い。これもロジックのバグ。
    MissingHandOrigin,
    /// Renderer から届いた領域のインデックスが範囲外。
    InvalidRegion { kind: &'static str, index: usize },
    /// 復元しようとした状態が不変条件を満たしていない。
    Integrity(IntegrityError),
    /// JSON の変換に失敗した。
    Serialization(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::EmptyCollection => write!(f, "attempted to take a card from an empty pile"),
            EngineError::MissingHandOrigin => write!(f, "hand holds cards but their origin is unknown"),
            EngineError::InvalidRegion { kind, index } => {
                write!(f, "{kind} index {index} is out of range")
            }
            EngineError::Integrity(error) => write!(f, "game state integrity violated: {error}"),
            EngineError::Serialization(message) => write!(f, "serialization failed: {message}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<IntegrityError> for EngineError {
    fn from(error: IntegrityError) -> Self {
        EngineError::Integrity(error)
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(error: serde_json::Error) -> Self {
        EngineError::Serialization(error.to_string())
    }
}
