//! Core engine types: RNG and configuration.

pub mod rng;
pub mod config;

pub use rng::{GameRng, GameRngState};
pub use config::{
    GameConfig, DEFAULT_DEAL_BATCH, DEFAULT_INITIAL_DEAL, DEFAULT_MATCH_REWARD,
    DEFAULT_MISMATCH_PENALTY,
};
