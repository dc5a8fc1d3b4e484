//! Trainer configuration.
//!
//! Everything here has a default, so an empty JSON object is a valid config.
//! Files are validated on load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrainerError};
use crate::preflop::{ChartOverrides, ZoneStrategy};

/// Smallest table the trainer can deal.
pub const MIN_SEATS: usize = 2;

/// Largest table the trainer can deal.
pub const MAX_SEATS: usize = 10;

/// Largest starting stack, in chips.
pub const MAX_STACK: u32 = 1_000_000;

/// Largest raise multiplier.
pub const MAX_RAISE_MULTIPLIER: u32 = 10;

/// Configuration for a [`Trainer`](super::Trainer).
///
/// # Example
/// ```
/// use preflop_trainer::TrainerConfig;
///
/// let config = TrainerConfig::default().with_seed(7);
/// assert_eq!(config.min_players, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Fewest players accepted by `setup`.
    pub min_players: usize,

    /// Most players accepted by `setup`.
    pub max_players: usize,

    /// Smallest starting stack, in chips.
    pub min_stack: u32,

    /// Largest starting stack, in chips.
    pub max_stack: u32,

    /// Rule for mapping seats to zones.
    pub zone_strategy: ZoneStrategy,

    /// Small blind posted each hand.
    pub small_blind: u32,

    /// Big blind posted each hand.
    pub big_blind: u32,

    /// A raise or reraise multiplies the current bet by this.
    pub raise_multiplier: u32,

    /// Random seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Replacement charts in range notation, by archetype then zone.
    pub charts: ChartOverrides,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            min_players: 5,
            max_players: 10,
            min_stack: 50,
            max_stack: 250,
            zone_strategy: ZoneStrategy::ButtonDistance,
            small_blind: 1,
            big_blind: 2,
            raise_multiplier: 3,
            seed: None,
            charts: ChartOverrides::new(),
        }
    }
}

impl TrainerConfig {
    /// Create a new TrainerConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set the zone rule.
    pub fn with_zone_strategy(mut self, strategy: ZoneStrategy) -> Self {
        self.zone_strategy = strategy;
        self
    }

    /// Builder method: set the accepted player range.
    pub fn with_players(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Builder method: set the starting stack range.
    pub fn with_stacks(mut self, min: u32, max: u32) -> Self {
        self.min_stack = min;
        self.max_stack = max;
        self
    }

    /// Builder method: set blinds.
    pub fn with_blinds(mut self, small: u32, big: u32) -> Self {
        self.small_blind = small;
        self.big_blind = big;
        self
    }

    /// Check that a player count is accepted.
    pub fn check_player_count(&self, count: usize) -> Result<()> {
        if count < self.min_players || count > self.max_players {
            return Err(TrainerError::InvalidPlayerCount {
                count,
                min: self.min_players,
                max: self.max_players,
            });
        }
        Ok(())
    }

    /// Validate the configuration.
    ///
    /// Chart overrides are checked when the trainer loads them.
    pub fn validate(&self) -> Result<()> {
        if self.min_players < MIN_SEATS || self.max_players > MAX_SEATS {
            return Err(TrainerError::InvalidConfig(format!(
                "player range {}-{} must lie within {}-{}",
                self.min_players, self.max_players, MIN_SEATS, MAX_SEATS
            )));
        }
        if self.min_players > self.max_players {
            return Err(TrainerError::InvalidConfig(format!(
                "min_players {} exceeds max_players {}",
                self.min_players, self.max_players
            )));
        }
        if self.min_stack == 0 || self.min_stack > self.max_stack || self.max_stack > MAX_STACK {
            return Err(TrainerError::InvalidConfig(format!(
                "invalid stack range {}-{}",
                self.min_stack, self.max_stack
            )));
        }
        if self.small_blind == 0 || self.small_blind > self.big_blind || self.big_blind > MAX_STACK {
            return Err(TrainerError::InvalidConfig(format!(
                "invalid blinds {}/{}",
                self.small_blind, self.big_blind
            )));
        }
        if !(2..=MAX_RAISE_MULTIPLIER).contains(&self.raise_multiplier) {
            return Err(TrainerError::InvalidConfig(format!(
                "raise_multiplier must be between 2 and {}, got {}",
                MAX_RAISE_MULTIPLIER, self.raise_multiplier
            )));
        }
        Ok(())
    }
}
