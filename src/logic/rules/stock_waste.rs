//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use crate::components::pile::CardPile;

/// ストック（山札）からウェスト（捨て札）にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// ストックが空のときに、ウェストからストックにカードを戻せるかチェックする。
/// 両方空の時もクリック自体は受け付けるけど、何も起きない。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}

/// ウェストの一番上を拾えるか。
pub fn can_pick_up_from_waste(waste: &CardPile) -> bool {
    !waste.is_empty()
}
