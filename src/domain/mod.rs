//! Доменная модель: карты, фишки, игрок и его рука.

pub mod card;
pub mod chips;
pub mod errors;
pub mod hand;
pub mod player;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use errors::*;
pub use hand::*;
pub use player::*;
