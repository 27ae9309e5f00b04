//! # Generation Module
//!
//! Procedural map generation: path synthesis, obstacle placement, and validation.
//!
//! This module provides the whole generation pipeline. [`MapGenerator`]
//! resolves catalog parameters, runs one of the [`paths`] strategies,
//! scatters obstacles with [`ObstaclePlacer`], and checks the result with
//! [`MapValidator`], falling back to a simpler strategy when a map fails.

pub mod generator;
pub mod obstacles;
pub mod paths;
pub mod validator;
pub mod waypoints;

pub use generator::*;
pub use obstacles::*;
pub use paths::*;
pub use validator::*;
pub use waypoints::*;

use crate::{config, Complexity, TowerforgeError, TowerforgeResult};
use serde::{Deserialize, Serialize};
use std::path::Path as FsPath;

/// Configuration for a map generator.
///
/// Controls the random seed used by convenience entry points and how the
/// generator retries maps that fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Attempts per map, including the first one
    pub max_attempts: u32,
    /// Strategy used from the second attempt onward
    pub fallback: Complexity,
}

impl GenerationConfig {
    /// Creates the default configuration: unseeded, five attempts, linear fallback.
    ///
    /// # Examples
    ///
    /// ```
    /// use towerforge::{Complexity, GenerationConfig};
    ///
    /// let config = GenerationConfig::new();
    /// assert_eq!(config.max_attempts, 5);
    /// assert_eq!(config.fallback, Complexity::Linear);
    /// assert!(config.seed.is_none());
    /// ```
    pub fn new() -> Self {
        Self {
            seed: None,
            max_attempts: config::MAX_GENERATION_ATTEMPTS,
            fallback: Complexity::Linear,
        }
    }

    /// Creates a default configuration with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new()
        }
    }

    /// Creates a seeded single-attempt configuration, so the requested
    /// strategy's validation failure surfaces instead of falling back.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            max_attempts: 1,
            ..Self::new()
        }
    }

    /// Loads a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<FsPath>) -> TowerforgeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can produce maps.
    pub fn validate(&self) -> TowerforgeResult<()> {
        if self.max_attempts == 0 {
            return Err(TowerforgeError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Creates a random number generator from the config, seeded when a seed is set.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Draws uniformly from `[low, high]`, or returns `low` when the range is empty.
    pub fn roll_between<R: Rng + ?Sized>(rng: &mut R, low: i32, high: i32) -> i32 {
        if high < low {
            low
        } else {
            rng.gen_range(low..=high)
        }
    }
}
