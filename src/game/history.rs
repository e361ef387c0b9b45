//! Action history for the current game.
//!
//! Every accepted call into the engine is appended as an `ActionRecord`.
//! Rejected calls and no-op deals are not recorded. The history lives in
//! an `im::Vector` so snapshots of the state stay cheap to clone.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A call the engine accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A fresh deck was built and the opening cards dealt.
    NewGame,
    /// Cards were dealt from the deck.
    Deal,
    /// A card was chosen.
    Choose(CardId),
    /// The table was rearranged.
    Shuffle,
    /// The score will carry into the next game.
    ResumeScore,
}

/// A recorded action with the score it left behind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Position in the game's history, starting at 0.
    pub sequence: u32,

    /// Score after the action was applied.
    pub score: i64,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, sequence: u32, score: i64) -> Self {
        Self {
            action,
            sequence,
            score,
        }
    }
}
