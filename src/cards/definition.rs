//! Card identity: the stable id and the immutable attribute tuple.
//!
//! `CardFace` is what is printed on a card. Two cards with the same face
//! are duplicates; a valid deck holds every face exactly once.
//!
//! Mutable table state (selected, matched, dealt) lives in `Card`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::attributes::{Attribute, Color, Number, Shading, Shape};

/// Stable identifier for a card within one game.
///
/// Ids are assigned in deck-construction order before shuffling, so they
/// stay attached to the same face for the lifetime of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Three cards picked together, in pick or table order.
pub type CardSet = [CardId; 3];

/// The printed attributes of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFace {
    pub number: Number,
    pub shape: Shape,
    pub color: Color,
    pub shading: Shading,
}

impl CardFace {
    /// Create a card face.
    #[must_use]
    pub const fn new(number: Number, shape: Shape, color: Color, shading: Shading) -> Self {
        Self {
            number,
            shape,
            color,
            shading,
        }
    }

    /// Whether two faces agree on one attribute.
    #[must_use]
    pub fn same(&self, other: &CardFace, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Number => self.number == other.number,
            Attribute::Shape => self.shape == other.shape,
            Attribute::Color => self.color == other.color,
            Attribute::Shading => self.shading == other.shading,
        }
    }
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.number.count() == 1 { "" } else { "s" };
        write!(
            f,
            "{} {} {} {}{}",
            self.number, self.color, self.shading, self.shape, plural
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(17);
        assert_eq!(id.raw(), 17);
        assert_eq!(format!("{}", id), "Card(17)");
    }

    #[test]
    fn test_same() {
        let a = CardFace::new(Number::One, Shape::Oval, Color::Red, Shading::Solid);
        let b = CardFace::new(Number::Two, Shape::Oval, Color::Green, Shading::Solid);

        assert!(!a.same(&b, Attribute::Number));
        assert!(a.same(&b, Attribute::Shape));
        assert!(!a.same(&b, Attribute::Color));
        assert!(a.same(&b, Attribute::Shading));
    }

    #[test]
    fn test_display() {
        let one = CardFace::new(Number::One, Shape::Diamond, Color::Red, Shading::Solid);
        let three = CardFace::new(Number::Three, Shape::Oval, Color::Purple, Shading::Open);

        assert_eq!(one.to_string(), "one red solid diamond");
        assert_eq!(three.to_string(), "three purple open ovals");
    }
}
