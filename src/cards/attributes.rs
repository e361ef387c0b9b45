//! The four card attributes.
//!
//! Each Set card has one value on each of four dimensions, and every
//! dimension has exactly three values:
//!
//! - `Number`: one, two or three symbols
//! - `Shape`: diamond, squiggle, oval
//! - `Color`: red, green, purple
//! - `Shading`: solid, striped, open
//!
//! Rules never depend on declaration order. The symbol count of `Number`
//! is an explicit value returned by `Number::count`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A three-valued card attribute.
pub trait AttributeValue: Copy + Eq + fmt::Debug + 'static {
    /// Every value of this attribute.
    const ALL: [Self; 3];

    /// The value that completes a Set on this attribute given two cards.
    ///
    /// Equal inputs need the same value again; distinct inputs need the
    /// one remaining value.
    fn complete(a: Self, b: Self) -> Self {
        if a == b {
            return a;
        }
        Self::ALL
            .into_iter()
            .find(|v| *v != a && *v != b)
            .unwrap_or(a)
    }
}

/// Number of symbols printed on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Number {
    One,
    Two,
    Three,
}

impl Number {
    /// How many symbols the card shows.
    #[must_use]
    pub const fn count(self) -> u8 {
        match self {
            Number::One => 1,
            Number::Two => 2,
            Number::Three => 3,
        }
    }

    /// Look up the variant for a symbol count.
    #[must_use]
    pub const fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Number::One),
            2 => Some(Number::Two),
            3 => Some(Number::Three),
            _ => None,
        }
    }
}

impl AttributeValue for Number {
    const ALL: [Self; 3] = [Number::One, Number::Two, Number::Three];
}

/// Symbol shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Diamond,
    Squiggle,
    Oval,
}

impl AttributeValue for Shape {
    const ALL: [Self; 3] = [Shape::Diamond, Shape::Squiggle, Shape::Oval];
}

/// Symbol colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Purple,
}

impl AttributeValue for Color {
    const ALL: [Self; 3] = [Color::Red, Color::Green, Color::Purple];
}

/// Symbol fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shading {
    Solid,
    Striped,
    Open,
}

impl AttributeValue for Shading {
    const ALL: [Self; 3] = [Shading::Solid, Shading::Striped, Shading::Open];
}

/// Names one of the four attribute dimensions.
///
/// Used to report which dimensions broke a triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Number,
    Shape,
    Color,
    Shading,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Number,
        Attribute::Shape,
        Attribute::Color,
        Attribute::Shading,
    ];
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Number::One => "one",
            Number::Two => "two",
            Number::Three => "three",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Shape::Diamond => "diamond",
            Shape::Squiggle => "squiggle",
            Shape::Oval => "oval",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Purple => "purple",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Shading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Shading::Solid => "solid",
            Shading::Striped => "striped",
            Shading::Open => "open",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Attribute::Number => "number",
            Attribute::Shape => "shape",
            Attribute::Color => "color",
            Attribute::Shading => "shading",
        };
        f.write_str(s)
    }
}
