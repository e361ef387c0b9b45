//! # set-game
//!
//! A rules engine for the single-player card game Set.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No rendering, layout or animation. A presentation
//!    layer calls into `SetGame` and reads its state back, or subscribes
//!    to `GameEvent`s.
//!
//! 2. **Total Operations**: Misuse is rejected with a `GameError` and never
//!    changes state. Benign no-ops, like dealing from an empty deck, are
//!    reported as explicit outcomes.
//!
//! 3. **Deterministic**: All randomness comes from a seeded `GameRng`, so a
//!    seed fully reproduces a session.
//!
//! ## Modules
//!
//! - `core`: RNG and configuration
//! - `cards`: Attributes, card faces, runtime cards, deck construction
//! - `rules`: The Set rule, third-card completion, Set search
//! - `game`: Game state and the `SetGame` engine
//! - `error`: Error type

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState};

pub use crate::cards::{
    Attribute, AttributeValue, Card, CardFace, CardId, CardSet, Color, Deck, Number, Partition,
    Shading, Shape, DECK_SIZE,
};

pub use crate::rules::{conflicts, find_sets, is_set, third_card, Conflicts};

pub use crate::game::{
    Action, ActionRecord, ChooseOutcome, DealOutcome, GameEvent, GameObserver, GameState,
    Resolution, SelectionPhase, SetGame,
};

pub use crate::error::{GameError, Result};
