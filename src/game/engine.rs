//! The Set game engine.
//!
//! `SetGame` owns the state and is the only thing that mutates it. All
//! operations run to completion before returning; the engine has no
//! internal locking, so callers sharing it between threads must wrap it
//! in a lock.
//!
//! ## Choosing cards
//!
//! - picking an unselected card adds it to the selection
//! - picking a selected card drops it
//! - the third pick is evaluated immediately:
//!   - a Set is scored, taken off the table and refilled from the deck
//!   - a wrong triple is penalised and highlighted, and stays on the table
//! - either way the selection empties, and the verdict is kept until the
//!   next pick clears it
//!
//! ```
//! use set_game::{GameConfig, SetGame};
//!
//! let mut game = SetGame::new(GameConfig::default(), 42).unwrap();
//! assert_eq!(game.active_cards().count(), 12);
//!
//! let dealt = game.deal_cards();
//! assert_eq!(dealt.cards().len(), 3);
//! assert_eq!(game.undealt_count(), 81 - 15);
//! ```

use log::{debug, trace, warn};

use super::history::{Action, ActionRecord};
use super::observer::{GameEvent, GameObserver};
use super::outcome::{ChooseOutcome, DealOutcome, Resolution, SelectionPhase};
use super::state::GameState;
use crate::cards::{Card, CardFace, CardId, CardSet, Deck};
use crate::core::{GameConfig, GameRng, GameRngState};
use crate::error::{GameError, Result};
use crate::rules;

/// A single-player game of Set.
pub struct SetGame {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    observers: Vec<Box<dyn GameObserver + Send>>,
}

impl SetGame {
    // === Construction ===

    /// Start a game with a shuffled deck from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Start a game seeded from the operating system.
    pub fn random(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Start a game drawing randomness from `rng`.
    pub fn with_rng(config: GameConfig, mut rng: GameRng) -> Result<Self> {
        config.validate()?;
        let deck = Deck::shuffled(&mut rng);
        Ok(Self::from_deck(config, rng, deck))
    }

    /// Start a game over a caller-chosen deck order.
    ///
    /// `faces` must hold each of the 81 faces exactly once. `seed` drives
    /// later shuffles and new games.
    pub fn with_deck(config: GameConfig, seed: u64, faces: Vec<CardFace>) -> Result<Self> {
        config.validate()?;
        let deck = Deck::from_faces(faces)?;
        Ok(Self::from_deck(config, GameRng::new(seed), deck))
    }

    fn from_deck(config: GameConfig, rng: GameRng, deck: Deck) -> Self {
        let mut game = Self {
            config,
            state: GameState::new(deck, 0),
            rng,
            observers: Vec::new(),
        };
        game.open_table();
        game
    }

    /// Deal the opening cards of a fresh state.
    fn open_table(&mut self) -> Vec<CardId> {
        let dealt = self.deal_from_deck(self.config.initial_deal);
        self.state.record(Action::NewGame);
        debug!(
            "new game: {} cards dealt, score {}",
            dealt.len(),
            self.state.score
        );
        dealt
    }

    // === Observers ===

    /// Register an observer for state changes.
    pub fn subscribe(&mut self, observer: impl GameObserver + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    // === Operations ===

    /// Throw away the current game and start another.
    ///
    /// The score resets to 0 unless `resume_score` was called since the
    /// last new game.
    pub fn start_new_game(&mut self) {
        let score = if self.state.carry_score {
            self.state.score
        } else {
            0
        };

        let deck = Deck::shuffled(&mut self.rng);
        self.state = GameState::new(deck, score);
        let dealt = self.open_table();

        self.emit(GameEvent::NewGame { score, dealt });
    }

    /// Carry the current score into the next `start_new_game`.
    pub fn resume_score(&mut self) {
        self.state.carry_score = true;
        self.state.record(Action::ResumeScore);
        debug!("score {} will carry into the next game", self.state.score);
    }

    /// Deal the next batch from the deck onto the table.
    ///
    /// Deals fewer cards when the deck is nearly empty and nothing at all
    /// when it is empty.
    pub fn deal_cards(&mut self) -> DealOutcome {
        let dealt = self.deal_from_deck(self.config.deal_batch);
        if dealt.is_empty() {
            debug!("deal requested with an empty deck");
            return DealOutcome::DeckEmpty;
        }

        self.state.record(Action::Deal);
        debug!(
            "dealt {} cards, {} left in deck",
            dealt.len(),
            self.state.undealt_count()
        );
        self.emit(GameEvent::Dealt {
            cards: dealt.clone(),
        });
        DealOutcome::Dealt(dealt)
    }

    /// Move up to `count` undealt cards onto the table in deck order.
    fn deal_from_deck(&mut self, count: usize) -> Vec<CardId> {
        let mut dealt = Vec::with_capacity(count.min(self.state.undealt_count()));
        for card in self.state.cards.iter_mut().filter(|c| c.is_in_deck).take(count) {
            card.deal();
            dealt.push(card.id);
        }
        dealt
    }

    /// Rearrange the cards on the table.
    ///
    /// Only the active cards move, and only among the slots active cards
    /// already occupy. Selection and score are untouched.
    pub fn shuffle(&mut self) {
        let slots: Vec<usize> = self
            .state
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_active())
            .map(|(i, _)| i)
            .collect();

        let mut table: Vec<Card> = slots.iter().map(|&i| self.state.cards[i].clone()).collect();
        self.rng.shuffle(&mut table);
        for (slot, card) in slots.into_iter().zip(table) {
            self.state.cards[slot] = card;
        }

        self.state.record(Action::Shuffle);
        debug!("shuffled the table");
        self.emit(GameEvent::Shuffled);
    }

    /// Pick a card on the table.
    ///
    /// Fails without touching state if the card does not exist or is not
    /// on the table.
    pub fn choose(&mut self, id: CardId) -> Result<ChooseOutcome> {
        let Some(card) = self.state.card(id) else {
            warn!("rejected choice of unknown {id}");
            return Err(GameError::UnknownCard(id));
        };
        if !card.is_active() {
            warn!("rejected choice of {id}: not on the table");
            return Err(GameError::CardNotActive(id));
        }

        self.clear_resolution();
        let outcome = self.toggle(id)?;
        self.state.record(Action::Choose(id));
        Ok(outcome)
    }

    fn toggle(&mut self, id: CardId) -> Result<ChooseOutcome> {
        if self.state.is_selected(id) {
            self.state.selection.retain(|s| *s != id);
            self.set_selected(id, false);
            trace!("deselected {id}");
            self.emit(GameEvent::Deselected(id));
            return Ok(ChooseOutcome::Deselected(id));
        }

        self.state.selection.push(id);
        self.set_selected(id, true);
        trace!("selected {id}");
        self.emit(GameEvent::Selected(id));

        if self.state.selection.len() < 3 {
            return Ok(ChooseOutcome::Selected(id));
        }
        self.resolve()
    }

    fn set_selected(&mut self, id: CardId, selected: bool) {
        if let Some(card) = self.state.card_mut(id) {
            card.is_selected = selected;
        }
    }

    /// Drop the previous verdict and its highlight.
    fn clear_resolution(&mut self) {
        if self.state.last_resolution.take().is_some() {
            for card in &mut self.state.cards {
                card.is_mismatched = false;
            }
        }
    }

    /// Evaluate and apply the three selected cards.
    fn resolve(&mut self) -> Result<ChooseOutcome> {
        let ids = [
            self.state.selection[0],
            self.state.selection[1],
            self.state.selection[2],
        ];
        let faces = [self.face(ids[0])?, self.face(ids[1])?, self.face(ids[2])?];
        let conflicts = rules::conflicts(&faces[0], &faces[1], &faces[2]);
        self.state.selection.clear();

        let outcome = if conflicts.is_empty() {
            self.apply_match(ids)
        } else {
            self.apply_mismatch(ids, conflicts.clone())
        };

        self.state.last_resolution = Some(Resolution {
            cards: ids,
            conflicts,
        });
        Ok(outcome)
    }

    fn face(&self, id: CardId) -> Result<CardFace> {
        self.state
            .card(id)
            .map(|c| c.face)
            .ok_or(GameError::UnknownCard(id))
    }

    fn apply_match(&mut self, ids: [CardId; 3]) -> ChooseOutcome {
        let mut slots = Vec::with_capacity(3);
        for id in ids {
            if let Some(index) = self.state.index_of(id) {
                self.state.cards[index].mark_matched();
                slots.push(index);
            }
        }
        self.state.score = self.state.score.saturating_add(self.config.match_reward);

        let replacements = if self.config.backfill_on_match {
            self.backfill(&slots)
        } else {
            Vec::new()
        };

        debug!(
            "matched {} {} {}, score {}",
            ids[0], ids[1], ids[2], self.state.score
        );
        self.emit(GameEvent::Matched {
            cards: ids,
            replacements: replacements.clone(),
            score: self.state.score,
        });
        ChooseOutcome::Matched {
            cards: ids,
            replacements,
        }
    }

    fn apply_mismatch(&mut self, ids: [CardId; 3], conflicts: rules::Conflicts) -> ChooseOutcome {
        for id in ids {
            if let Some(card) = self.state.card_mut(id) {
                card.mark_mismatched();
            }
        }
        self.state.score = self.state.score.saturating_sub(self.config.mismatch_penalty);

        debug!(
            "not a set: {} {} {} differ on {:?}, score {}",
            ids[0], ids[1], ids[2], conflicts, self.state.score
        );
        self.emit(GameEvent::Mismatched {
            cards: ids,
            conflicts: conflicts.clone(),
            score: self.state.score,
        });
        ChooseOutcome::Mismatched {
            cards: ids,
            conflicts,
        }
    }

    /// Deal into the table slots a match vacated, one card per slot.
    ///
    /// Ignores `deal_batch`. The next undealt card swaps places with a matched card, so the new
    /// card shows up where the old one was.
    fn backfill(&mut self, slots: &[usize]) -> Vec<CardId> {
        let mut replacements = Vec::with_capacity(slots.len());
        for &slot in slots {
            let Some(next) = self.state.cards.iter().position(|c| c.is_in_deck) else {
                break;
            };
            self.state.cards.swap(slot, next);
            let card = &mut self.state.cards[slot];
            card.deal();
            replacements.push(card.id);
        }
        replacements
    }

    // === Projections ===

    /// The configuration this game runs with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The full state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// All 81 cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.state.cards
    }

    /// Get a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.state.card(id)
    }

    /// Cards still in the deck.
    pub fn undealt_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.state.undealt()
    }

    /// Cards on the table, in table order.
    pub fn active_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.state.active()
    }

    /// Cards removed as part of found Sets.
    pub fn matched_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.state.matched()
    }

    /// Selected cards, in pick order.
    pub fn selected_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.state
            .selection
            .iter()
            .filter_map(move |&id| self.state.card(id))
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.state.score
    }

    /// Cards left to deal.
    #[must_use]
    pub fn undealt_count(&self) -> usize {
        self.state.undealt_count()
    }

    /// Where the selection stands.
    #[must_use]
    pub fn selection_phase(&self) -> SelectionPhase {
        self.state.selection_phase()
    }

    /// The verdict on the last triple, until the next choice.
    #[must_use]
    pub fn last_resolution(&self) -> Option<&Resolution> {
        self.state.last_resolution.as_ref()
    }

    /// Accepted actions since this game started.
    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> + '_ {
        self.state.history.iter()
    }

    /// A Set currently on the table, if there is one.
    #[must_use]
    pub fn hint(&self) -> Option<CardSet> {
        let table: Vec<Card> = self.state.active().cloned().collect();
        rules::first_set(&table)
    }

    /// Every Set currently on the table.
    #[must_use]
    pub fn sets_on_table(&self) -> Vec<CardSet> {
        let table: Vec<Card> = self.state.active().cloned().collect();
        rules::find_sets(&table)
    }

    /// The deck is empty and no Set is left on the table.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.undealt_count() == 0 && self.hint().is_none()
    }

    /// RNG position, for reproducing the rest of a session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl std::fmt::Debug for SetGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetGame")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
