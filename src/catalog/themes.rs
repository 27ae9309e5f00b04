//! # Theme Catalog
//!
//! Obstacle vocabularies, sprite ids, and color palettes for each map theme.

use crate::{ConfigTable, TowerforgeError, TowerforgeResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

/// Path and background colors for a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub path: String,
    #[serde(rename = "bg")]
    pub background: String,
}

impl ThemeColors {
    /// Creates a new palette.
    pub fn new(path: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            background: background.into(),
        }
    }
}

/// A complete theme: vocabulary for obstacle placement plus its palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    pub key: String,
    pub display_name: String,
    /// Obstacle kinds, in draw order
    pub obstacle_types: Vec<String>,
    /// Sprite id for every obstacle kind
    pub sprite_map: BTreeMap<String, String>,
    pub colors: ThemeColors,
}

impl ThemeDefinition {
    fn builtin(
        key: &str,
        display_name: &str,
        obstacles: &[(&str, &str)],
        path_color: &str,
        background_color: &str,
    ) -> Self {
        Self {
            key: key.to_string(),
            display_name: display_name.to_string(),
            obstacle_types: obstacles.iter().map(|(kind, _)| kind.to_string()).collect(),
            sprite_map: obstacles
                .iter()
                .map(|(kind, sprite)| (kind.to_string(), sprite.to_string()))
                .collect(),
            colors: ThemeColors::new(path_color, background_color),
        }
    }

    /// Gets the sprite id for an obstacle kind.
    pub fn sprite_for(&self, kind: &str) -> Option<&str> {
        self.sprite_map.get(kind).map(String::as_str)
    }

    /// Gets the client-facing summary of this theme.
    pub fn summary(&self) -> ThemeSummary {
        ThemeSummary {
            display_name: self.display_name.clone(),
            colors: self.colors.clone(),
        }
    }
}

/// What clients see of a theme: its name and palette, without the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSummary {
    #[serde(rename = "name")]
    pub display_name: String,
    pub colors: ThemeColors,
}

/// Immutable table of themes, keyed by theme key.
///
/// # Examples
///
/// ```
/// use towerforge::ThemeCatalog;
///
/// let catalog = ThemeCatalog::builtin();
/// let forest = catalog.theme("forest").unwrap();
/// assert_eq!(forest.display_name, "Forest");
/// assert!(catalog.theme("mars").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<ThemeDefinition>,
}

static BUILTIN_THEMES: OnceLock<ThemeCatalog> = OnceLock::new();

impl ThemeCatalog {
    /// Builds a catalog from caller-supplied themes.
    ///
    /// Every theme needs a unique key, at least one obstacle kind, and a
    /// sprite for each of its obstacle kinds.
    pub fn new(themes: Vec<ThemeDefinition>) -> TowerforgeResult<Self> {
        Self::check_themes(&themes)?;
        Ok(Self { themes })
    }

    fn check_themes(themes: &[ThemeDefinition]) -> TowerforgeResult<()> {
        let mut seen = HashSet::new();

        for theme in themes {
            if !seen.insert(theme.key.as_str()) {
                return Err(TowerforgeError::InvalidConfig(format!(
                    "duplicate theme key '{}'",
                    theme.key
                )));
            }
            if theme.obstacle_types.is_empty() {
                return Err(TowerforgeError::InvalidConfig(format!(
                    "theme '{}' has no obstacle types",
                    theme.key
                )));
            }
            if let Some(kind) = theme
                .obstacle_types
                .iter()
                .find(|kind| !theme.sprite_map.contains_key(kind.as_str()))
            {
                return Err(TowerforgeError::InvalidConfig(format!(
                    "theme '{}' has no sprite for obstacle '{}'",
                    theme.key, kind
                )));
            }
        }

        Ok(())
    }

    /// Parses and validates a catalog from a JSON array of theme definitions.
    pub fn from_json(json: &str) -> TowerforgeResult<Self> {
        let themes: Vec<ThemeDefinition> = serde_json::from_str(json)?;
        Self::new(themes)
    }

    /// Gets the process-wide built-in catalog.
    pub fn builtin() -> &'static ThemeCatalog {
        BUILTIN_THEMES.get_or_init(|| ThemeCatalog {
            themes: vec![
                ThemeDefinition::builtin(
                    "forest",
                    "Forest",
                    &[
                        ("tree", "tree_1"),
                        ("bush", "bush_1"),
                        ("water", "water_1"),
                        ("rock", "rock_1"),
                    ],
                    "#8B7355",
                    "#6b8e6b",
                ),
                ThemeDefinition::builtin(
                    "desert",
                    "Desert",
                    &[
                        ("cactus", "cactus_1"),
                        ("rock", "desert_rock_1"),
                        ("oasis", "oasis_1"),
                        ("dune", "dune_1"),
                    ],
                    "#D2B48C",
                    "#F4A460",
                ),
                ThemeDefinition::builtin(
                    "snow",
                    "Snow",
                    &[
                        ("ice", "ice_1"),
                        ("snowman", "snowman_1"),
                        ("frozen_tree", "frozen_tree_1"),
                        ("ice_rock", "ice_rock_1"),
                    ],
                    "#B0C4DE",
                    "#F0F8FF",
                ),
                ThemeDefinition::builtin(
                    "lava",
                    "Lava",
                    &[
                        ("volcano_rock", "volcano_rock_1"),
                        ("lava_pool", "lava_pool_1"),
                        ("obsidian", "obsidian_1"),
                        ("fire_crystal", "fire_crystal_1"),
                    ],
                    "#8B0000",
                    "#FF4500",
                ),
            ],
        })
    }

    /// Looks up a theme by key.
    pub fn theme(&self, key: &str) -> TowerforgeResult<&ThemeDefinition> {
        self.themes
            .iter()
            .find(|theme| theme.key == key)
            .ok_or_else(|| TowerforgeError::unknown_key(ConfigTable::Theme, key))
    }

    /// Lists theme keys in catalog order.
    pub fn keys(&self) -> Vec<&str> {
        self.themes.iter().map(|theme| theme.key.as_str()).collect()
    }

    /// Lists every theme's display name and palette, keyed by theme key.
    pub fn list_themes(&self) -> BTreeMap<String, ThemeSummary> {
        self.themes
            .iter()
            .map(|theme| (theme.key.clone(), theme.summary()))
            .collect()
    }

    /// Iterates over every theme definition.
    pub fn iter(&self) -> impl Iterator<Item = &ThemeDefinition> {
        self.themes.iter()
    }
}
