// src/components/dragging_info.rs

use serde::{Deserialize, Serialize};

/// 手札 (ドラッグ中のカード) がどこから来たかの記録だよ！🖱️➡️🃏
///
/// 拾った時にセットして、離した時に参照してクリアする。
/// どこにも置けなかったら、ここに書いてある場所へ戻す。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandOrigin {
    Waste,
    Foundation(u8),
    /// `index` は拾った列の中での位置。ロジック上は使わず、Renderer が戻りアニメーションに使う。
    Tableau { column: u8, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_json_shape() {
        assert_eq!(serde_json::to_string(&HandOrigin::Waste).unwrap(), r#""Waste""#);
        assert_eq!(
            serde_json::to_string(&HandOrigin::Tableau { column: 5, index: 3 }).unwrap(),
            r#"{"Tableau":{"column":5,"index":3}}"#
        );
    }
}
