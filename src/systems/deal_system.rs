// src/systems/deal_system.rs

use log::info;
use rand::Rng;

use crate::board::TableBoard;
use crate::components::pile::CardPile;
use crate::config::table::TABLEAU_COLUMNS;
use crate::error::EngineError;
use crate::logic::deck::create_standard_deck;

// === 初期カード配置システム！ ===
// ゲーム開始時に、山札と7つの場札にカードを配る役割を担うシステムだよ。
#[derive(Default, Debug, Clone, Copy)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// # 処理の流れ
    /// 1. 52枚のデッキ (全部裏向き) を山札に入れて、1 回だけシャッフルする。
    /// 2. クロンダイクの三角形の配り方: `i` を 0..7、`j` を i..7 で回して、
    ///    山札の一番上を列 `j` に積む。列 `j` には最終的に `j + 1` 枚。
    /// 3. 各列の一番上だけ表にする。
    /// 4. 残り 24 枚は山札に裏向きのまま。
    pub fn deal<R: Rng + ?Sized>(&self, board: &mut TableBoard, rng: &mut R) -> Result<(), EngineError> {
        *board = TableBoard::empty();
        board.stock = CardPile::from_cards(create_standard_deck());
        board.stock.shuffle(rng);

        for i in 0..TABLEAU_COLUMNS {
            for j in i..TABLEAU_COLUMNS {
                let card = board.stock.pop_last_card()?;
                board.tableau[j].add_card(card);
            }
        }

        for column in board.tableau.iter_mut() {
            if let Some(top) = column.last_card_mut() {
                top.flip();
            }
        }

        info!("🃏 Dealt a new game: {} cards left in stock.", board.stock.len());
        Ok(())
    }
}
