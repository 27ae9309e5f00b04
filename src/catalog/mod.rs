//! # Catalog Module
//!
//! Read-only generation tables: themes, difficulty settings, and grid sizes.
//!
//! Tables are built once on first access and only ever handed out as
//! `&'static` references, so any number of callers can read them
//! concurrently without locking.

pub mod difficulty;
pub mod themes;

pub use difficulty::*;
pub use themes::*;

use crate::{TowerforgeError, TowerforgeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The lookup table a configuration key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigTable {
    Theme,
    Difficulty,
    Size,
    Complexity,
}

impl fmt::Display for ConfigTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigTable::Theme => "theme",
            ConfigTable::Difficulty => "difficulty",
            ConfigTable::Size => "size",
            ConfigTable::Complexity => "complexity",
        };
        f.write_str(name)
    }
}

/// Upper-cases the first character of a key (`"nightmare"` -> `"Nightmare"`).
pub(crate) fn title_case(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generates the string-key plumbing shared by the keyed catalog enums.
macro_rules! keyed_enum {
    ($name:ident, $table:expr, { $($variant:ident => $key:literal),+ $(,)? }) => {
        impl $name {
            /// Every variant, in catalog order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Gets the lowercase key used in requests and map documents.
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            /// Gets the key with its first letter capitalised.
            pub fn title(self) -> String {
                title_case(self.key())
            }
        }

        impl FromStr for $name {
            type Err = TowerforgeError;

            fn from_str(key: &str) -> TowerforgeResult<Self> {
                match key {
                    $($key => Ok($name::$variant),)+
                    _ => Err(TowerforgeError::unknown_key($table, key)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

/// Difficulty levels, scaling path length, turns, and obstacle count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Nightmare,
}

keyed_enum!(Difficulty, ConfigTable::Difficulty, {
    Easy => "easy",
    Medium => "medium",
    Hard => "hard",
    Nightmare => "nightmare",
});

/// Named grid sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapSize {
    Small,
    Medium,
    Large,
}

keyed_enum!(MapSize, ConfigTable::Size, {
    Small => "small",
    Medium => "medium",
    Large => "large",
});

/// Path-shape strategy used to build the traversal route.
///
/// # Examples
///
/// ```
/// use towerforge::Complexity;
///
/// let complexity: Complexity = "spiral".parse().unwrap();
/// assert_eq!(complexity, Complexity::Spiral);
/// assert!("zigzag".parse::<Complexity>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Linear,
    Curved,
    Maze,
    Spiral,
}

keyed_enum!(Complexity, ConfigTable::Complexity, {
    Linear => "linear",
    Curved => "curved",
    Maze => "maze",
    Spiral => "spiral",
});

/// Lists every difficulty key, in catalog order.
pub fn list_difficulties() -> Vec<&'static str> {
    Difficulty::ALL.iter().map(|difficulty| difficulty.key()).collect()
}

/// Lists every complexity key, in catalog order.
pub fn list_complexities() -> Vec<&'static str> {
    Complexity::ALL.iter().map(|complexity| complexity.key()).collect()
}

/// Lists every size key, in catalog order.
pub fn list_sizes() -> Vec<&'static str> {
    MapSize::ALL.iter().map(|size| size.key()).collect()
}
