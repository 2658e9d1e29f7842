//! Доменная модель блэкджека: карты, колода, рука, участники, правила.

pub mod card;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod player;
pub mod rules;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use errors::*;
pub use hand::*;
pub use player::*;
pub use rules::*;
