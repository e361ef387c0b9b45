//! State-change notifications.
//!
//! A presentation layer either polls the engine after each call or
//! subscribes a `GameObserver`. Observers are called synchronously, after
//! the change is applied, in subscription order. They must be `Send` so a
//! game can move behind a lock.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use set_game::{GameConfig, GameEvent, SetGame};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let mut game = SetGame::new(GameConfig::default(), 1).unwrap();
//!
//! let sink = Arc::clone(&seen);
//! game.subscribe(move |event: &GameEvent| sink.lock().unwrap().push(event.clone()));
//! game.shuffle();
//!
//! assert_eq!(seen.lock().unwrap().as_slice(), &[GameEvent::Shuffled]);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::rules::Conflicts;

/// Something that changed in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game started with these opening cards.
    NewGame { score: i64, dealt: Vec<CardId> },
    /// Cards moved from the deck to the table.
    Dealt { cards: Vec<CardId> },
    /// A card joined the selection.
    Selected(CardId),
    /// A card left the selection.
    Deselected(CardId),
    /// A Set was found and removed from the table.
    Matched {
        cards: [CardId; 3],
        replacements: Vec<CardId>,
        score: i64,
    },
    /// A wrong triple was picked.
    Mismatched {
        cards: [CardId; 3],
        conflicts: Conflicts,
        score: i64,
    },
    /// The table order changed.
    Shuffled,
}

/// Receives game events.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}
