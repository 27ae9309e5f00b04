//! # Towerforge
//!
//! Procedural map generation for tower-defense levels.
//!
//! ## Architecture Overview
//!
//! A generated level is a traversal path across a grid plus a scatter of
//! decorative, non-blocking obstacles. The crate is organised around a few
//! key concepts:
//!
//! - **Catalogs**: immutable theme, difficulty, and size tables built once per process
//! - **Path Strategies**: linear, curved, maze, and spiral path synthesis
//! - **Obstacle Placement**: themed decorations kept clear of the path
//! - **Validation**: playability checks with bounded fallback regeneration
//! - **Map Stores**: the persistence seam used by callers of the generator
//!
//! ## Randomness
//!
//! Every random draw goes through an injected [`rand::Rng`], so a seeded
//! generator reproduces the same map byte for byte.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use towerforge::{MapGenerator, MapRequest};
//!
//! let generator = MapGenerator::new();
//! let mut rng = StdRng::seed_from_u64(7);
//! let map = generator.generate_map(&MapRequest::default(), &mut rng).unwrap();
//! assert!(map.generated);
//! assert!(map.path.len() >= 3);
//! ```

pub mod catalog;
pub mod generation;
pub mod map;
pub mod store;
pub mod utils;

// Core module re-exports
pub use catalog::*;
pub use generation::*;
pub use map::*;
pub use store::*;

use std::path::PathBuf;

/// Core error type for the Towerforge generation engine.
#[derive(thiserror::Error, Debug)]
pub enum TowerforgeError {
    /// A difficulty, theme, size, or complexity key is not in its table
    #[error("Unknown {table} key: '{key}'")]
    ConfigLookup { table: ConfigTable, key: String },

    /// Every generation attempt failed validation
    #[error("Map generation exhausted after {attempts} attempts (last failure: {last_failure})")]
    GenerationExhausted {
        attempts: u32,
        last_failure: ValidationFailure,
    },

    /// Generation settings cannot produce a map
    #[error("Invalid generation config: {0}")]
    InvalidConfig(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Map store file does not exist
    #[error("Map store not found at {}", .0.display())]
    StoreMissing(PathBuf),

    /// No stored map has the requested id
    #[error("No map with id {0}")]
    MapNotFound(u32),

    /// Map store file has the wrong shape
    #[error("Invalid map store: {0}")]
    StoreFormat(String),
}

impl TowerforgeError {
    /// Builds a lookup error for an unknown key.
    pub fn unknown_key(table: ConfigTable, key: impl Into<String>) -> Self {
        TowerforgeError::ConfigLookup {
            table,
            key: key.into(),
        }
    }
}

/// Result type used throughout the Towerforge codebase.
pub type TowerforgeResult<T> = Result<T, TowerforgeError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation constants.
pub mod config {
    /// Attempts allowed per `generate_map` call, including the first one
    pub const MAX_GENERATION_ATTEMPTS: u32 = 5;

    /// Smallest map id handed out by the generator
    pub const MIN_MAP_ID: u32 = 1000;

    /// Largest map id handed out by the generator
    pub const MAX_MAP_ID: u32 = 9999;

    /// Minimum number of path cells for a playable map
    pub const MIN_PATH_LENGTH: usize = 3;

    /// Minimum horizontal distance between the start cell and the exit cell
    pub const MIN_HORIZONTAL_SEPARATION: i32 = 5;

    /// Obstacle draws allowed per requested obstacle
    pub const OBSTACLE_ATTEMPTS_PER_SLOT: usize = 3;

    /// Smallest grid width or height a difficulty profile may declare
    pub const MIN_GRID_SIDE: i32 = 10;
}
