// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod dragging_info;
pub mod foundation;
pub mod game_state;
pub mod pile;
pub mod stack;

pub use card::{Card, Rank, Suit};
pub use dragging_info::HandOrigin;
pub use foundation::Foundation;
pub use game_state::{GameState, GameStatus};
pub use pile::CardPile;
pub use stack::StackType;
