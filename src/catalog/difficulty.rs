//! # Difficulty and Size Tables
//!
//! Numeric generation parameters keyed by difficulty and grid-size names.

use crate::{config, Difficulty, Dimensions, MapSize, TowerforgeError, TowerforgeResult};
use serde::{Deserialize, Serialize};

/// Generation parameters for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultySettings {
    /// Target number of path cells
    pub path_length: usize,
    /// Intermediate waypoints for curved paths
    pub turn_count: usize,
    /// Obstacles requested from the placer
    pub obstacle_count: usize,
}

/// Grid dimensions for one named size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSettings {
    pub width: i32,
    pub height: i32,
}

impl SizeSettings {
    /// Converts to grid dimensions.
    pub fn dimensions(self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

/// Immutable difficulty and size tables.
///
/// Rows are stored in catalog order and indexed by the enum discriminant.
///
/// # Examples
///
/// ```
/// use towerforge::{Difficulty, DifficultyProfile};
///
/// let profile = DifficultyProfile::builtin();
/// let easy = profile.settings(Difficulty::Easy);
/// assert_eq!(easy.path_length, 8);
/// assert_eq!(easy.obstacle_count, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyProfile {
    difficulties: [DifficultySettings; 4],
    sizes: [SizeSettings; 3],
}

static BUILTIN_PROFILE: DifficultyProfile = DifficultyProfile {
    difficulties: [
        DifficultySettings {
            path_length: 8,
            turn_count: 2,
            obstacle_count: 3,
        },
        DifficultySettings {
            path_length: 12,
            turn_count: 4,
            obstacle_count: 6,
        },
        DifficultySettings {
            path_length: 16,
            turn_count: 6,
            obstacle_count: 10,
        },
        DifficultySettings {
            path_length: 20,
            turn_count: 8,
            obstacle_count: 15,
        },
    ],
    sizes: [
        SizeSettings {
            width: 25,
            height: 20,
        },
        SizeSettings {
            width: 32,
            height: 24,
        },
        SizeSettings {
            width: 40,
            height: 30,
        },
    ],
};

impl DifficultyProfile {
    /// Creates a profile from rows in catalog order
    /// (`easy` to `nightmare`, `small` to `large`).
    ///
    /// # Errors
    ///
    /// Returns [`TowerforgeError::InvalidConfig`] if a difficulty asks for
    /// fewer path cells than a valid map needs, or a grid side is shorter
    /// than [`config::MIN_GRID_SIDE`].
    pub fn new(
        difficulties: [DifficultySettings; 4],
        sizes: [SizeSettings; 3],
    ) -> TowerforgeResult<Self> {
        for (difficulty, settings) in Difficulty::ALL.iter().zip(&difficulties) {
            if settings.path_length < config::MIN_PATH_LENGTH {
                return Err(TowerforgeError::InvalidConfig(format!(
                    "difficulty '{}' has path_length {}, below the minimum of {}",
                    difficulty,
                    settings.path_length,
                    config::MIN_PATH_LENGTH
                )));
            }
        }

        for (size, settings) in MapSize::ALL.iter().zip(&sizes) {
            if settings.width < config::MIN_GRID_SIDE || settings.height < config::MIN_GRID_SIDE {
                return Err(TowerforgeError::InvalidConfig(format!(
                    "size '{}' is {}x{}, below the minimum side of {}",
                    size,
                    settings.width,
                    settings.height,
                    config::MIN_GRID_SIDE
                )));
            }
        }

        Ok(Self {
            difficulties,
            sizes,
        })
    }

    /// Gets the process-wide built-in tables.
    pub fn builtin() -> &'static DifficultyProfile {
        &BUILTIN_PROFILE
    }

    /// Gets the settings for a difficulty level.
    pub fn settings(&self, difficulty: Difficulty) -> DifficultySettings {
        self.difficulties[difficulty as usize]
    }

    /// Gets the grid size for a named size.
    pub fn size(&self, size: MapSize) -> SizeSettings {
        self.sizes[size as usize]
    }

    /// Looks up difficulty settings by key.
    pub fn lookup_difficulty(&self, key: &str) -> TowerforgeResult<DifficultySettings> {
        Ok(self.settings(key.parse()?))
    }

    /// Looks up grid dimensions by size key.
    pub fn lookup_size(&self, key: &str) -> TowerforgeResult<Dimensions> {
        let size: MapSize = key.parse()?;
        Ok(self.size(size).dimensions())
    }
}
