//! Match configuration.
//!
//! The front end builds a `MatchConfig` at startup; the engine reads it
//! but never changes it between rematches.

use serde::{Deserialize, Serialize};

/// Points needed to win a match unless configured otherwise.
pub const DEFAULT_VICTORY_THRESHOLD: u32 = 3;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 42;

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Points a player needs to win the match (at least 1).
    pub victory_threshold: u32,

    /// Rejected answers tolerated per prompt before giving up.
    ///
    /// `None` re-prompts forever.
    pub max_input_retries: Option<u32>,

    /// Seed for every computer player's random stream.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            victory_threshold: DEFAULT_VICTORY_THRESHOLD,
            max_input_retries: None,
            seed: DEFAULT_SEED,
        }
    }
}

impl MatchConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the victory threshold.
    #[must_use]
    pub fn with_victory_threshold(mut self, threshold: u32) -> Self {
        assert!(threshold > 0, "Victory threshold must be at least 1");
        self.victory_threshold = threshold;
        self
    }

    /// Bound the number of rejected answers per prompt.
    #[must_use]
    pub fn with_max_input_retries(mut self, retries: u32) -> Self {
        self.max_input_retries = Some(retries);
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.victory_threshold, 3);
        assert_eq!(config.max_input_retries, None);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new()
            .with_victory_threshold(5)
            .with_max_input_retries(2)
            .with_seed(7);

        assert_eq!(config.victory_threshold, 5);
        assert_eq!(config.max_input_retries, Some(2));
        assert_eq!(config.seed, 7);
    }

    #[test]
    #[should_panic(expected = "Victory threshold must be at least 1")]
    fn test_zero_threshold() {
        let _ = MatchConfig::new().with_victory_threshold(0);
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::new().with_max_input_retries(4);
        let json = serde_json::to_string(&config).unwrap();
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
