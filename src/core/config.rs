//! Match configuration.
//!
//! The rules are fixed, but a few constants are exposed so hosts and tests
//! can seed the pool and tune pacing:
//! - `seed`: seed of the default shuffle source
//! - `cooldown_turns`: end-turns needed to recharge a cooldown ability
//! - `copies_per_shrine`: copies of each identity in a full pool
//!
//! `MatchConfig` deserializes with defaults for missing fields, so a host
//! can load a partial JSON/TOML table.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::deities::Deity;

/// Default end-turns needed to recharge a cooldown ability.
pub const DEFAULT_COOLDOWN_TURNS: u8 = 3;

/// Default copies of each identity in a full shrine pool.
pub const DEFAULT_COPIES_PER_SHRINE: u8 = 2;

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Seed for the default `GameRng` shuffle source.
    pub seed: u64,

    /// End-turns after use before a cooldown ability is ready again.
    pub cooldown_turns: u8,

    /// Copies of each of the nine identities in a full pool.
    pub copies_per_shrine: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            cooldown_turns: DEFAULT_COOLDOWN_TURNS,
            copies_per_shrine: DEFAULT_COPIES_PER_SHRINE,
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the cooldown length.
    #[must_use]
    pub fn with_cooldown_turns(mut self, turns: u8) -> Self {
        self.cooldown_turns = turns;
        self
    }

    /// Set the number of copies per identity.
    #[must_use]
    pub fn with_copies_per_shrine(mut self, copies: u8) -> Self {
        self.copies_per_shrine = copies;
        self
    }

    /// Number of cards in a full pool.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        Deity::ALL.len() * usize::from(self.copies_per_shrine)
    }

    /// Check the configuration for values the rules cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cooldown_turns == 0 {
            return Err(ConfigError::ZeroCooldown);
        }
        if self.copies_per_shrine == 0 {
            return Err(ConfigError::ZeroCopies);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.cooldown_turns, 3);
        assert_eq!(config.copies_per_shrine, 2);
        assert_eq!(config.pool_size(), 18);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new()
            .with_seed(9)
            .with_cooldown_turns(4)
            .with_copies_per_shrine(1);

        assert_eq!(config.seed, 9);
        assert_eq!(config.cooldown_turns, 4);
        assert_eq!(config.pool_size(), 9);
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        let zero_cd = MatchConfig::new().with_cooldown_turns(0);
        assert_eq!(zero_cd.validate(), Err(ConfigError::ZeroCooldown));

        let zero_copies = MatchConfig::new().with_copies_per_shrine(0);
        assert_eq!(zero_copies.validate(), Err(ConfigError::ZeroCopies));
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{ "seed": 77 }"#).unwrap();
        assert_eq!(config.seed, 77);
        assert_eq!(config.cooldown_turns, DEFAULT_COOLDOWN_TURNS);
        assert_eq!(config.copies_per_shrine, DEFAULT_COPIES_PER_SHRINE);
    }
}
