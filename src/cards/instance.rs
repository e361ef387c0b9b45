//! Card instances - runtime card state.
//!
//! `Card` pairs a face with the flags the table tracks for it. The flags
//! place the card in exactly one partition:
//!
//! - undealt: `is_in_deck`
//! - matched: `is_matched`
//! - active (on the table): neither of the above

use serde::{Deserialize, Serialize};

use super::definition::{CardFace, CardId};

/// Which part of the game a card currently belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Partition {
    /// Still in the deck.
    Undealt,
    /// Face up on the table and selectable.
    Active,
    /// Removed from play as part of a found Set.
    Matched,
}

/// A card in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity for this game.
    pub id: CardId,

    /// Printed attributes.
    pub face: CardFace,

    /// Part of the current selection.
    pub is_selected: bool,

    /// Part of a found Set.
    pub is_matched: bool,

    /// Not yet dealt.
    pub is_in_deck: bool,

    /// Visible in the grid.
    pub show: bool,

    /// Highlighted as part of the last wrong triple. Cleared when the next
    /// selection starts.
    pub is_mismatched: bool,
}

impl Card {
    /// Create an undealt card.
    #[must_use]
    pub fn new(id: CardId, face: CardFace) -> Self {
        Self {
            id,
            face,
            is_selected: false,
            is_matched: false,
            is_in_deck: true,
            show: false,
            is_mismatched: false,
        }
    }

    /// The partition this card's flags place it in.
    #[must_use]
    pub fn partition(&self) -> Partition {
        if self.is_in_deck {
            Partition::Undealt
        } else if self.is_matched {
            Partition::Matched
        } else {
            Partition::Active
        }
    }

    /// Check if the card is on the table and selectable.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.partition() == Partition::Active
    }

    /// Move from the deck to the table.
    pub fn deal(&mut self) {
        self.is_in_deck = false;
        self.show = true;
    }

    /// Take off the table as part of a found Set.
    pub fn mark_matched(&mut self) {
        self.is_matched = true;
        self.is_selected = false;
        self.show = false;
    }

    /// Flag as part of a wrong triple and drop it from the selection.
    pub fn mark_mismatched(&mut self) {
        self.is_mismatched = true;
        self.is_selected = false;
    }
}
