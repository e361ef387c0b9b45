//! Game configuration.
//!
//! Scoring and dealing constants are configuration rather than literals so
//! house rules can change them. The defaults are the classic solo values:
//! - a found Set is worth 3 points
//! - a wrong triple costs 1 point
//! - 12 cards are dealt at the start, 3 per deal afterwards

use serde::{Deserialize, Serialize};

use crate::cards::DECK_SIZE;
use crate::error::{GameError, Result};

/// Points awarded for a valid Set.
pub const DEFAULT_MATCH_REWARD: i64 = 3;

/// Points deducted for an invalid triple.
pub const DEFAULT_MISMATCH_PENALTY: i64 = 1;

/// Cards dealt face up when a game starts.
pub const DEFAULT_INITIAL_DEAL: usize = 12;

/// Cards dealt per `deal_cards` call.
pub const DEFAULT_DEAL_BATCH: usize = 3;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use set_game::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_match_reward(5)
///     .with_initial_deal(15);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.match_reward, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Added to the score for each valid Set.
    pub match_reward: i64,

    /// Subtracted from the score for each invalid triple.
    pub mismatch_penalty: i64,

    /// Cards dealt when a game starts.
    pub initial_deal: usize,

    /// Upper bound on cards moved by one deal.
    pub deal_batch: usize,

    /// Refill the table from the deck after a match.
    pub backfill_on_match: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            match_reward: DEFAULT_MATCH_REWARD,
            mismatch_penalty: DEFAULT_MISMATCH_PENALTY,
            initial_deal: DEFAULT_INITIAL_DEAL,
            deal_batch: DEFAULT_DEAL_BATCH,
            backfill_on_match: true,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reward for a valid Set.
    #[must_use]
    pub fn with_match_reward(mut self, reward: i64) -> Self {
        self.match_reward = reward;
        self
    }

    /// Set the penalty for an invalid triple.
    #[must_use]
    pub fn with_mismatch_penalty(mut self, penalty: i64) -> Self {
        self.mismatch_penalty = penalty;
        self
    }

    /// Set the number of cards dealt at the start.
    #[must_use]
    pub fn with_initial_deal(mut self, count: usize) -> Self {
        self.initial_deal = count;
        self
    }

    /// Set the number of cards per deal.
    #[must_use]
    pub fn with_deal_batch(mut self, count: usize) -> Self {
        self.deal_batch = count;
        self
    }

    /// Leave the table short after a match instead of refilling it.
    #[must_use]
    pub fn without_backfill(mut self) -> Self {
        self.backfill_on_match = false;
        self
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.initial_deal > DECK_SIZE {
            return Err(GameError::InvalidConfig("initial deal exceeds deck size"));
        }
        if self.deal_batch == 0 {
            return Err(GameError::InvalidConfig("deal batch must be at least one card"));
        }
        if self.match_reward < 0 || self.mismatch_penalty < 0 {
            return Err(GameError::InvalidConfig("reward and penalty must not be negative"));
        }
        Ok(())
    }
}
