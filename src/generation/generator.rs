//! # Map Generator
//!
//! Orchestrates a full generation run: parameter resolution, path synthesis,
//! obstacle placement, validation, and bounded fallback regeneration.

use crate::{
    config, Complexity, Difficulty, DifficultyProfile, DifficultySettings, Dimensions,
    GenerationConfig, MapDocument, MapSize, MapValidator, ObstaclePlacer, ThemeCatalog,
    ThemeDefinition, ThemeSummary, TowerforgeError, TowerforgeResult,
};
use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameters for one map.
///
/// # Examples
///
/// ```
/// use towerforge::{Complexity, Difficulty, MapRequest};
///
/// let request = MapRequest::from_keys("hard", "snow", "large", "maze", None).unwrap();
/// assert_eq!(request.difficulty, Difficulty::Hard);
/// assert_eq!(request.complexity, Complexity::Maze);
///
/// assert!(MapRequest::from_keys("hard", "snow", "huge", "maze", None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRequest {
    pub difficulty: Difficulty,
    /// Theme key; resolved against the generator's theme catalog
    pub theme: String,
    pub size: MapSize,
    pub complexity: Complexity,
    /// Name to use instead of the generated one
    pub custom_name: Option<String>,
}

impl MapRequest {
    /// Creates a request from typed parameters.
    pub fn new(
        difficulty: Difficulty,
        theme: impl Into<String>,
        size: MapSize,
        complexity: Complexity,
    ) -> Self {
        Self {
            difficulty,
            theme: theme.into(),
            size,
            complexity,
            custom_name: None,
        }
    }

    /// Parses a request from string keys.
    ///
    /// The theme key is checked later, against the catalog of the generator
    /// that runs the request.
    pub fn from_keys(
        difficulty: &str,
        theme: &str,
        size: &str,
        complexity: &str,
        custom_name: Option<&str>,
    ) -> TowerforgeResult<Self> {
        Ok(Self {
            difficulty: difficulty.parse()?,
            theme: theme.to_string(),
            size: size.parse()?,
            complexity: complexity.parse()?,
            custom_name: custom_name.map(str::to_string),
        })
    }

    /// Sets a custom map name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.custom_name = Some(name.into());
        self
    }
}

impl Default for MapRequest {
    fn default() -> Self {
        Self::new(
            Difficulty::Medium,
            "forest",
            MapSize::Medium,
            Complexity::Curved,
        )
    }
}

/// Map generator tying the catalogs, strategies, placer, and validator together.
///
/// Generation runs at most `max_attempts` times. The first attempt uses the
/// requested complexity; later attempts use the configured fallback. A map
/// is only returned after it passes validation.
#[derive(Debug, Clone)]
pub struct MapGenerator<'a> {
    themes: &'a ThemeCatalog,
    profile: &'a DifficultyProfile,
    config: GenerationConfig,
    placer: ObstaclePlacer,
    validator: MapValidator,
}

impl MapGenerator<'static> {
    /// Creates a generator over the built-in catalogs with the default config.
    pub fn new() -> Self {
        Self::with_config(GenerationConfig::default())
    }

    /// Creates a generator over the built-in catalogs.
    pub fn with_config(config: GenerationConfig) -> Self {
        MapGenerator::with_catalogs(ThemeCatalog::builtin(), DifficultyProfile::builtin(), config)
    }
}

impl Default for MapGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> MapGenerator<'a> {
    /// Creates a generator over caller-supplied catalogs.
    pub fn with_catalogs(
        themes: &'a ThemeCatalog,
        profile: &'a DifficultyProfile,
        config: GenerationConfig,
    ) -> Self {
        Self {
            themes,
            profile,
            config,
            placer: ObstaclePlacer::new(),
            validator: MapValidator::new(),
        }
    }

    /// Gets the generator configuration.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generates a validated map.
    ///
    /// # Errors
    ///
    /// - [`TowerforgeError::ConfigLookup`] if the theme is not in the catalog
    /// - [`TowerforgeError::GenerationExhausted`] if every attempt fails validation
    /// - [`TowerforgeError::InvalidConfig`] if the config or theme cannot be used
    pub fn generate_map<R: Rng + ?Sized>(
        &self,
        request: &MapRequest,
        rng: &mut R,
    ) -> TowerforgeResult<MapDocument> {
        self.config.validate()?;

        let dimensions = self.profile.size(request.size).dimensions();
        let settings = self.profile.settings(request.difficulty);
        let theme = self.themes.theme(&request.theme)?;

        let mut complexity = request.complexity;
        let mut attempt = 1;

        loop {
            let map = self.assemble(request, complexity, dimensions, settings, theme, rng)?;

            let failure = match self.validator.validate(&map) {
                Ok(()) => {
                    info!(
                        "Generated map {} '{}' ({} path cells, {} obstacles) on attempt {}",
                        map.id,
                        map.name,
                        map.path.len(),
                        map.obstacles.len(),
                        attempt
                    );
                    return Ok(map);
                }
                Err(failure) => failure,
            };

            if attempt >= self.config.max_attempts {
                return Err(TowerforgeError::GenerationExhausted {
                    attempts: attempt,
                    last_failure: failure,
                });
            }

            warn!(
                "Attempt {} with {} paths failed validation ({}); retrying with {}",
                attempt, complexity, failure, self.config.fallback
            );
            complexity = self.config.fallback;
            attempt += 1;
        }
    }

    /// Generates a validated map from string keys.
    pub fn generate_map_by_keys<R: Rng + ?Sized>(
        &self,
        difficulty: &str,
        theme: &str,
        size: &str,
        complexity: &str,
        custom_name: Option<&str>,
        rng: &mut R,
    ) -> TowerforgeResult<MapDocument> {
        let request = MapRequest::from_keys(difficulty, theme, size, complexity, custom_name)?;
        self.generate_map(&request, rng)
    }

    /// Builds one candidate map without validating it.
    fn assemble<R: Rng + ?Sized>(
        &self,
        request: &MapRequest,
        complexity: Complexity,
        dimensions: Dimensions,
        settings: DifficultySettings,
        theme: &ThemeDefinition,
        rng: &mut R,
    ) -> TowerforgeResult<MapDocument> {
        let id = rng.gen_range(config::MIN_MAP_ID..=config::MAX_MAP_ID);

        let traced = complexity.trace_path(dimensions, &settings, rng);
        debug!(
            "Map {} traced {} path from {} with {} cells",
            id,
            complexity,
            traced.start,
            traced.path.len()
        );

        let obstacles = self.placer.place(
            dimensions,
            traced.start,
            &traced.path,
            settings.obstacle_count,
            theme,
            rng,
        )?;

        let name = request
            .custom_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| default_map_name(theme, complexity, request.difficulty));

        Ok(MapDocument {
            id,
            name,
            start: traced.start,
            path: traced.path,
            obstacles,
            difficulty: request.difficulty,
            theme: theme.key.clone(),
            size: request.size,
            complexity,
            dimensions,
            generated: true,
            colors: theme.colors.clone(),
        })
    }

    /// Lists every theme's display name and palette.
    pub fn list_themes(&self) -> BTreeMap<String, ThemeSummary> {
        self.themes.list_themes()
    }

    /// Lists difficulty keys.
    pub fn list_difficulties(&self) -> Vec<&'static str> {
        crate::list_difficulties()
    }

    /// Lists complexity keys.
    pub fn list_complexities(&self) -> Vec<&'static str> {
        crate::list_complexities()
    }
}

/// Builds the default map name, e.g. `"Forest Linear (Easy)"`.
pub fn default_map_name(
    theme: &ThemeDefinition,
    complexity: Complexity,
    difficulty: Difficulty,
) -> String {
    format!(
        "{} {} ({})",
        theme.display_name,
        complexity.title(),
        difficulty.title()
    )
}
