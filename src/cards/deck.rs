//! Deck construction and validation.
//!
//! A deck is every combination of the four attributes, exactly once.
//! `Deck::full` enumerates them in a fixed order, `Deck::shuffled` applies
//! a uniform shuffle, and `Deck::from_faces` accepts a caller-chosen order
//! after checking it is a complete deck.

use rustc_hash::FxHashSet;

use super::attributes::{AttributeValue, Color, Number, Shading, Shape};
use super::definition::{CardFace, CardId};
use super::instance::Card;
use crate::core::GameRng;
use crate::error::{GameError, Result};

/// Cards in a complete deck (3^4).
pub const DECK_SIZE: usize = 81;

/// An ordered, validated deck of undealt cards.
///
/// ## Example
///
/// ```
/// use set_game::cards::{Deck, DECK_SIZE};
/// use set_game::core::GameRng;
///
/// let deck = Deck::shuffled(&mut GameRng::new(42));
/// assert_eq!(deck.len(), DECK_SIZE);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Every face in enumeration order.
    #[must_use]
    pub fn all_faces() -> Vec<CardFace> {
        let mut faces = Vec::with_capacity(DECK_SIZE);
        for number in Number::ALL {
            for shape in Shape::ALL {
                for color in Color::ALL {
                    for shading in Shading::ALL {
                        faces.push(CardFace::new(number, shape, color, shading));
                    }
                }
            }
        }
        faces
    }

    /// A complete deck in enumeration order.
    #[must_use]
    pub fn full() -> Self {
        Self::assign_ids(Self::all_faces())
    }

    /// A complete deck in uniformly random order.
    ///
    /// Ids are assigned before shuffling so they stay tied to the face.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::full();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Build a deck from a caller-chosen order.
    ///
    /// Rejects anything that is not exactly one of each face.
    pub fn from_faces(faces: Vec<CardFace>) -> Result<Self> {
        if faces.len() != DECK_SIZE {
            return Err(GameError::InvalidDeckSize {
                expected: DECK_SIZE,
                actual: faces.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for face in &faces {
            if !seen.insert(*face) {
                return Err(GameError::DuplicateCard(*face));
            }
        }

        Ok(Self::assign_ids(faces))
    }

    fn assign_ids(faces: Vec<CardFace>) -> Self {
        let cards = faces
            .into_iter()
            .enumerate()
            .map(|(i, face)| Card::new(CardId::new(i as u8), face))
            .collect();
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Take the cards out of the deck.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_deck_is_complete() {
        let deck = Deck::full();
        assert_eq!(deck.len(), DECK_SIZE);

        let faces: FxHashSet<CardFace> = deck.cards().iter().map(|c| c.face).collect();
        assert_eq!(faces.len(), DECK_SIZE);
    }

    #[test]
    fn test_ids_are_unique() {
        let deck = Deck::full();
        let ids: FxHashSet<CardId> = deck.cards().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn test_all_cards_start_undealt() {
        let deck = Deck::full();
        assert!(deck.cards().iter().all(|c| c.is_in_deck && !c.show));
    }

    #[test]
    fn test_shuffled_changes_order_keeps_cards() {
        let full = Deck::full();
        let shuffled = Deck::shuffled(&mut GameRng::new(42));

        assert_ne!(full, shuffled);

        let mut ids: Vec<CardId> = shuffled.cards().iter().map(|c| c.id).collect();
        ids.sort_unstable();
        let expected: Vec<CardId> = full.cards().iter().map(|c| c.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_shuffled_keeps_id_face_pairing() {
        let full = Deck::full();
        let shuffled = Deck::shuffled(&mut GameRng::new(9));

        for card in shuffled.cards() {
            assert_eq!(full.cards()[card.id.raw() as usize].face, card.face);
        }
    }

    #[test]
    fn test_shuffled_is_deterministic() {
        let a = Deck::shuffled(&mut GameRng::new(5));
        let b = Deck::shuffled(&mut GameRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_faces_accepts_permutation() {
        let mut faces = Deck::all_faces();
        faces.reverse();
        let deck = Deck::from_faces(faces.clone()).unwrap();

        assert_eq!(deck.cards()[0].face, faces[0]);
        assert_eq!(deck.cards()[0].id, CardId::new(0));
    }

    #[test]
    fn test_from_faces_rejects_duplicate() {
        let mut faces = Deck::all_faces();
        faces[1] = faces[0];

        assert_eq!(
            Deck::from_faces(faces.clone()),
            Err(GameError::DuplicateCard(faces[0]))
        );
    }

    #[test]
    fn test_from_faces_rejects_wrong_size() {
        let mut faces = Deck::all_faces();
        faces.pop();

        assert_eq!(
            Deck::from_faces(faces),
            Err(GameError::InvalidDeckSize {
                expected: 81,
                actual: 80
            })
        );
    }
}
