//! Game configuration.
//!
//! `GameConfig` fixes everything about a match that is decided before the
//! first stage runs: the autopilot seed, the setup handicap, whether the
//! optional cards are shuffled in, and the victory thresholds.
//!
//! ```
//! use cold_war_engine::core::GameConfig;
//!
//! let config = GameConfig::new(7)
//!     .with_handicap(0)
//!     .with_optional_cards(false);
//! assert_eq!(config.seed, 7);
//! assert!(!config.optional_cards);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the autopilot that answers Neutral requests.
    pub seed: u64,

    /// Extra setup influence. Negative values give the US `|handicap|`
    /// extra influence, positive values give it to the USSR.
    pub handicap: i32,

    /// Include the optional cards (Defectors excluded, it is standard).
    pub optional_cards: bool,

    /// Place the fixed opening influence printed on the map.
    pub standard_setup: bool,

    /// Turn after which final scoring runs.
    pub final_turn: u8,

    /// VP magnitude that ends the game immediately.
    pub vp_victory: i32,

    /// Answer Neutral requests automatically from the seeded RNG.
    ///
    /// Disable to inject dice rolls and random picks by hand.
    pub autopilot: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            handicap: -2,
            optional_cards: true,
            standard_setup: true,
            final_turn: 10,
            vp_victory: 20,
            autopilot: true,
        }
    }
}

impl GameConfig {
    /// Create a default configuration with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set the setup handicap.
    #[must_use]
    pub fn with_handicap(mut self, handicap: i32) -> Self {
        self.handicap = handicap;
        self
    }

    /// Include or exclude the optional cards.
    #[must_use]
    pub fn with_optional_cards(mut self, enabled: bool) -> Self {
        self.optional_cards = enabled;
        self
    }

    /// Include or skip the fixed opening influence.
    #[must_use]
    pub fn with_standard_setup(mut self, enabled: bool) -> Self {
        self.standard_setup = enabled;
        self
    }

    /// Set the last turn before final scoring.
    #[must_use]
    pub fn with_final_turn(mut self, turn: u8) -> Self {
        assert!((1..=10).contains(&turn), "final turn must be within 1..=10");
        self.final_turn = turn;
        self
    }

    /// Enable or disable the Neutral-request autopilot.
    #[must_use]
    pub fn with_autopilot(mut self, enabled: bool) -> Self {
        self.autopilot = enabled;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        if !(1..=10).contains(&config.final_turn) {
            return Err(ConfigError::FinalTurn(config.final_turn));
        }
        if config.vp_victory <= 0 {
            return Err(ConfigError::VpVictory(config.vp_victory));
        }
        Ok(config)
    }
}

/// Failure to load a `GameConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse game config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("final turn {0} is outside 1..=10")]
    FinalTurn(u8),
    #[error("victory threshold {0} must be positive")]
    VpVictory(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.handicap, -2);
        assert_eq!(config.final_turn, 10);
        assert_eq!(config.vp_victory, 20);
        assert!(config.autopilot);
    }

    #[test]
    fn test_from_json_partial() {
        let config = GameConfig::from_json_str(r#"{"seed": 9, "handicap": 1}"#).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.handicap, 1);
        assert!(config.optional_cards);
    }

    #[test]
    fn test_from_json_rejects_bad_turn() {
        let err = GameConfig::from_json_str(r#"{"final_turn": 12}"#).unwrap_err();
        assert!(matches!(err, ConfigError::FinalTurn(12)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig::new(3).with_autopilot(false);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_json_str(&json).unwrap(), config);
    }
}
