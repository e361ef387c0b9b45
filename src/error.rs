//! Engine errors.
//!
//! Every `Err` returned by the engine means the call was rejected and the
//! game state was left untouched.

use thiserror::Error;

use crate::cards::{CardFace, CardId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{0} does not exist in this game")]
    UnknownCard(CardId),
    #[error("{0} is not on the table")]
    CardNotActive(CardId),
    #[error("deck must contain {expected} cards, got {actual}")]
    InvalidDeckSize { expected: usize, actual: usize },
    #[error("deck contains {0} more than once")]
    DuplicateCard(CardFace),
    #[error("invalid game configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, GameError>;
