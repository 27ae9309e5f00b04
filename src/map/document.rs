//! # Map Documents
//!
//! The assembled output of a generation run, serialised field-for-field in
//! the JSON shape consumed by game clients and map stores.

use crate::{Complexity, Difficulty, Dimensions, MapSize, Path, Point, ThemeColors, TowerforgeResult};
use serde::{Deserialize, Serialize};

/// Theme-specific appearance of an obstacle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleAttributes {
    /// Obstacle kind from the theme vocabulary (e.g. `tree`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Sprite the client draws for this kind
    pub sprite_id: String,
}

/// A decorative grid cell that never sits on the start or path cells.
///
/// # Examples
///
/// ```
/// use towerforge::{Obstacle, Point};
///
/// let obstacle = Obstacle::new(Point::new(4, 7), "tree", "tree_1");
/// assert_eq!(obstacle.position(), Point::new(4, 7));
/// assert_eq!(obstacle.kind(), "tree");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    pub attributes: ObstacleAttributes,
}

impl Obstacle {
    /// Creates a new obstacle at the given cell.
    pub fn new(position: Point, kind: impl Into<String>, sprite_id: impl Into<String>) -> Self {
        Self {
            x: position.x,
            y: position.y,
            attributes: ObstacleAttributes {
                kind: kind.into(),
                sprite_id: sprite_id.into(),
            },
        }
    }

    /// Gets the cell this obstacle occupies.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Gets the obstacle kind.
    pub fn kind(&self) -> &str {
        &self.attributes.kind
    }

    /// Gets the sprite id.
    pub fn sprite_id(&self) -> &str {
        &self.attributes.sprite_id
    }
}

/// A complete generated level.
///
/// Built once by [`crate::MapGenerator`] and handed to the caller; the
/// generator never touches it again. Documents returned by the generator
/// always have `generated == true` and have passed [`crate::MapValidator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDocument {
    /// Random 4-digit identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Entry cell on the grid edge
    pub start: Point,
    /// Traversal route from (but excluding) the start cell
    pub path: Path,
    /// Themed decorations
    pub obstacles: Vec<Obstacle>,
    pub difficulty: Difficulty,
    /// Theme key in the theme catalog
    pub theme: String,
    pub size: MapSize,
    /// Path strategy that produced the accepted path
    pub complexity: Complexity,
    pub dimensions: Dimensions,
    pub generated: bool,
    pub colors: ThemeColors,
}

impl MapDocument {
    /// Gets the exit cell (last path point), if the path is non-empty.
    pub fn exit(&self) -> Option<Point> {
        self.path.last().copied()
    }

    /// Serialises the document to compact JSON.
    pub fn to_json(&self) -> TowerforgeResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialises the document to indented JSON.
    pub fn to_json_pretty(&self) -> TowerforgeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
