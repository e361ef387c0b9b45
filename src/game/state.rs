//! Game state: the deck, selection, score and history.
//!
//! `cards` holds all 81 cards and is the single source of truth. Card
//! flags split it into the undealt, active and matched partitions; the
//! order of active cards in `cards` is the table order.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::history::{Action, ActionRecord};
use super::outcome::{Resolution, SelectionPhase};
use crate::cards::{Card, CardId, Deck};

/// The current selection. Never more than three cards.
pub type Selection = SmallVec<[CardId; 3]>;

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// All cards, in deck order.
    pub cards: Vec<Card>,

    /// Selected cards, in the order they were picked.
    pub selection: Selection,

    /// Running score. May go negative.
    pub score: i64,

    /// Carry `score` into the next game instead of resetting it.
    pub carry_score: bool,

    /// The triple evaluated by the last choice, until the next choice.
    pub last_resolution: Option<Resolution>,

    /// Accepted actions since this game started.
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a state with every card of `deck` undealt.
    #[must_use]
    pub fn new(deck: Deck, score: i64) -> Self {
        Self {
            cards: deck.into_cards(),
            selection: Selection::new(),
            score,
            carry_score: false,
            last_resolution: None,
            history: Vector::new(),
        }
    }

    // === Lookup ===

    /// Position of a card in `cards`.
    #[must_use]
    pub fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// Get a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Get a mutable card by id.
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    // === Partitions ===

    /// Cards still in the deck, in deal order.
    pub fn undealt(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().filter(|c| c.is_in_deck)
    }

    /// Cards on the table, in table order.
    pub fn active(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().filter(|c| c.is_active())
    }

    /// Cards removed as part of found Sets.
    pub fn matched(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().filter(|c| c.is_matched)
    }

    /// Number of cards left to deal.
    #[must_use]
    pub fn undealt_count(&self) -> usize {
        self.undealt().count()
    }

    // === Selection ===

    /// Check if a card is currently selected.
    #[must_use]
    pub fn is_selected(&self, id: CardId) -> bool {
        self.selection.contains(&id)
    }

    /// Where the selection stands.
    #[must_use]
    pub fn selection_phase(&self) -> SelectionPhase {
        if self.last_resolution.is_some() {
            return SelectionPhase::Resolved;
        }
        match self.selection.len() {
            0 => SelectionPhase::Empty,
            n => SelectionPhase::Partial(n),
        }
    }

    // === History ===

    /// Append an action to the history.
    pub fn record(&mut self, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(action, sequence, self.score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DECK_SIZE;

    #[test]
    fn test_new_state() {
        let state = GameState::new(Deck::full(), 4);

        assert_eq!(state.cards.len(), DECK_SIZE);
        assert_eq!(state.undealt_count(), DECK_SIZE);
        assert_eq!(state.active().count(), 0);
        assert_eq!(state.matched().count(), 0);
        assert_eq!(state.score, 4);
        assert!(!state.carry_score);
        assert_eq!(state.selection_phase(), SelectionPhase::Empty);
    }

    #[test]
    fn test_partitions_follow_flags() {
        let mut state = GameState::new(Deck::full(), 0);
        state.cards[0].deal();
        state.cards[1].deal();
        state.cards[1].mark_matched();

        assert_eq!(state.undealt_count(), DECK_SIZE - 2);
        assert_eq!(state.active().map(|c| c.id).collect::<Vec<_>>(), vec![CardId::new(0)]);
        assert_eq!(state.matched().map(|c| c.id).collect::<Vec<_>>(), vec![CardId::new(1)]);
    }

    #[test]
    fn test_lookup() {
        let mut state = GameState::new(Deck::full(), 0);
        state.cards.swap(0, 10);

        assert_eq!(state.index_of(CardId::new(10)), Some(0));
        assert_eq!(state.card(CardId::new(0)).map(|c| c.id), Some(CardId::new(0)));
        assert!(state.card(CardId::new(200)).is_none());

        if let Some(card) = state.card_mut(CardId::new(3)) {
            card.is_selected = true;
        }
        assert!(state.cards[3].is_selected);
    }

    #[test]
    fn test_selection_phase() {
        let mut state = GameState::new(Deck::full(), 0);
        state.selection.push(CardId::new(1));
        assert_eq!(state.selection_phase(), SelectionPhase::Partial(1));

        state.selection.push(CardId::new(2));
        assert_eq!(state.selection_phase(), SelectionPhase::Partial(2));
        assert!(state.is_selected(CardId::new(2)));

        state.selection.clear();
        state.last_resolution = Some(Resolution {
            cards: [CardId::new(1), CardId::new(2), CardId::new(3)],
            conflicts: Default::default(),
        });
        assert_eq!(state.selection_phase(), SelectionPhase::Resolved);
    }

    #[test]
    fn test_record() {
        let mut state = GameState::new(Deck::full(), 0);
        state.record(Action::NewGame);
        state.score = 3;
        state.record(Action::Deal);

        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[1], ActionRecord::new(Action::Deal, 1, 3));
    }
}
