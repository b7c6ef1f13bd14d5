// src/components/stack.rs

use serde::{Deserialize, Serialize};

/// カードが存在する場所の種類を示す Enum だよ。
/// イベントやスナップショットで「どの山か」を伝えるのに使う。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 山札 (Stock)。裏向きで、クリックすると捨て札にめくる。
    Stock,
    /// 捨て札 (Waste)。山札からめくったカードが表向きで積まれる。
    Waste,
    /// 組札 (Foundation)。0: スペード, 1: ハート, 2: クラブ, 3: ダイヤ。
    Foundation(u8),
    /// 場札 (Tableau)。列番号 (0-6)。
    Tableau(u8),
    /// プレイヤーが持っている (ドラッグ中の) カード。
    Hand,
}
