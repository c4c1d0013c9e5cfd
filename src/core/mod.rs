//! Core game types: the immutable card and item catalogues

pub mod card;
pub mod item;

pub use card::{CardCategory, CardKind, ALL_CARDS};
pub use item::{ItemCategory, ItemKind, ALL_ITEMS};
