//! The game: state, engine, outcomes, history and notifications.
//!
//! ## Key Types
//!
//! - `SetGame`: The engine. All mutation goes through it
//! - `GameState`: Cards, selection, score and history of one game
//! - `ChooseOutcome` / `DealOutcome`: What a call changed
//! - `GameObserver` / `GameEvent`: Push notifications for a presentation layer

pub mod engine;
pub mod history;
pub mod observer;
pub mod outcome;
pub mod state;

pub use engine::SetGame;
pub use history::{Action, ActionRecord};
pub use observer::{GameEvent, GameObserver};
pub use outcome::{ChooseOutcome, DealOutcome, Resolution, SelectionPhase};
pub use state::{GameState, Selection};
