//! Results of engine calls.
//!
//! Every successful call reports what changed, including the benign no-op
//! of dealing from an empty deck, so callers and tests never have to diff
//! state to find out.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::rules::Conflicts;

/// Where the selection stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPhase {
    /// Nothing selected and nothing pending.
    Empty,
    /// One or two cards selected.
    Partial(usize),
    /// A triple was just evaluated. The selection is already empty and the
    /// verdict stays visible until the next choice.
    Resolved,
}

/// The most recently evaluated triple.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The three cards, in selection order.
    pub cards: [CardId; 3],

    /// Attributes that broke the rule. Empty for a Set.
    pub conflicts: Conflicts,
}

impl Resolution {
    /// Whether the triple was a Set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Result of `SetGame::choose`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChooseOutcome {
    /// The card joined the selection (fewer than three now selected).
    Selected(CardId),
    /// The card was already selected and has been dropped.
    Deselected(CardId),
    /// The third pick completed a Set.
    Matched {
        cards: [CardId; 3],
        /// Cards dealt into the vacated slots.
        replacements: Vec<CardId>,
    },
    /// The third pick completed a triple that is not a Set.
    Mismatched {
        cards: [CardId; 3],
        conflicts: Conflicts,
    },
}

/// Result of `SetGame::deal_cards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealOutcome {
    /// These cards moved from the deck to the table, in deck order.
    Dealt(Vec<CardId>),
    /// Nothing left to deal; state unchanged.
    DeckEmpty,
}

impl DealOutcome {
    /// Cards dealt by this call.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        match self {
            DealOutcome::Dealt(cards) => cards,
            DealOutcome::DeckEmpty => &[],
        }
    }
}
