// src/systems/mod.rs

pub mod deal_system;
pub mod reveal_system;
pub mod win_condition_system;

pub use deal_system::DealInitialCardsSystem;
pub use reveal_system::RevealSystem;
pub use win_condition_system::WinConditionSystem;
