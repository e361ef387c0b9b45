//! Card system: attributes, faces, runtime cards and the deck.
//!
//! ## Key Types
//!
//! - `Number`, `Shape`, `Color`, `Shading`: the four three-valued attributes
//! - `CardId`: Stable per-game identity
//! - `CardFace`: Immutable attribute tuple
//! - `Card`: Runtime card state (dealt, selected, matched)
//! - `Deck`: Complete, validated 81-card deck

pub mod attributes;
pub mod definition;
pub mod instance;
pub mod deck;

pub use attributes::{Attribute, AttributeValue, Color, Number, Shading, Shape};
pub use definition::{CardFace, CardId, CardSet};
pub use instance::{Card, Partition};
pub use deck::{Deck, DECK_SIZE};
