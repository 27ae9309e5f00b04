//! # Map Validation
//!
//! Playability checks applied to every assembled map before it is returned.

use crate::{config, MapDocument, Point};
use std::collections::HashSet;

/// Reason a map failed validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// Too few path cells
    #[error("path has {length} cells, fewer than {minimum}")]
    PathTooShort { length: usize, minimum: usize },

    /// Exit column too close to the start column
    #[error("start column {start_x} and exit column {exit_x} are fewer than {minimum} apart")]
    InsufficientSeparation {
        start_x: i32,
        exit_x: i32,
        minimum: i32,
    },

    /// An obstacle occupies the start cell or a path cell
    #[error("obstacle at {cell} sits on the path")]
    ObstacleOnPath { cell: Point },
}

/// Structural playability checks.
///
/// The separation check compares columns only, and the obstacle check looks
/// at bare start and path cells, not the one-cell buffer [`crate::ObstaclePlacer`]
/// keeps clear.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use towerforge::{MapGenerator, MapRequest, MapValidator};
///
/// let mut rng = StdRng::seed_from_u64(21);
/// let map = MapGenerator::new().generate_map(&MapRequest::default(), &mut rng).unwrap();
/// assert!(MapValidator::new().is_valid(&map));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapValidator {
    /// Minimum number of path cells
    pub min_path_length: usize,
    /// Minimum column distance between start and exit
    pub min_separation: i32,
}

impl MapValidator {
    /// Creates a validator with the standard thresholds.
    pub fn new() -> Self {
        Self {
            min_path_length: config::MIN_PATH_LENGTH,
            min_separation: config::MIN_HORIZONTAL_SEPARATION,
        }
    }

    /// Checks a map, reporting the first failed rule.
    pub fn validate(&self, map: &MapDocument) -> Result<(), ValidationFailure> {
        if map.path.len() < self.min_path_length {
            return Err(ValidationFailure::PathTooShort {
                length: map.path.len(),
                minimum: self.min_path_length,
            });
        }

        if let Some(exit) = map.exit() {
            if (map.start.x - exit.x).abs() < self.min_separation {
                return Err(ValidationFailure::InsufficientSeparation {
                    start_x: map.start.x,
                    exit_x: exit.x,
                    minimum: self.min_separation,
                });
            }
        }

        let mut route: HashSet<Point> = map.path.iter().copied().collect();
        route.insert(map.start);

        if let Some(obstacle) = map
            .obstacles
            .iter()
            .find(|obstacle| route.contains(&obstacle.position()))
        {
            return Err(ValidationFailure::ObstacleOnPath {
                cell: obstacle.position(),
            });
        }

        Ok(())
    }

    /// Checks a map, discarding the failure reason.
    pub fn is_valid(&self, map: &MapDocument) -> bool {
        self.validate(map).is_ok()
    }
}

impl Default for MapValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Complexity, Difficulty, Dimensions, MapSize, Obstacle, ThemeColors};

    fn map_with(start: Point, path: Vec<Point>, obstacles: Vec<Obstacle>) -> MapDocument {
        MapDocument {
            id: 1234,
            name: "Test".to_string(),
            start,
            path,
            obstacles,
            difficulty: Difficulty::Easy,
            theme: "forest".to_string(),
            size: MapSize::Small,
            complexity: Complexity::Linear,
            dimensions: Dimensions::new(25, 20),
            generated: true,
            colors: ThemeColors::new("#8B7355", "#6b8e6b"),
        }
    }

    fn row(y: i32, xs: std::ops::RangeInclusive<i32>) -> Vec<Point> {
        xs.map(|x| Point::new(x, y)).collect()
    }

    #[test]
    fn test_valid_map() {
        let map = map_with(
            Point::new(0, 10),
            row(10, 2..=12),
            vec![Obstacle::new(Point::new(5, 3), "tree", "tree_1")],
        );
        assert_eq!(MapValidator::new().validate(&map), Ok(()));
    }

    #[test]
    fn test_short_path() {
        let map = map_with(Point::new(0, 10), row(10, 6..=7), vec![]);
        assert_eq!(
            MapValidator::new().validate(&map),
            Err(ValidationFailure::PathTooShort {
                length: 2,
                minimum: 3
            })
        );
    }

    #[test]
    fn test_separation_counts_columns_only() {
        // Exit is far away vertically but only four columns over
        let path = vec![
            Point::new(4, 1),
            Point::new(4, 2),
            Point::new(4, 3),
            Point::new(4, 18),
        ];
        let map = map_with(Point::new(0, 10), path, vec![]);
        assert!(matches!(
            MapValidator::new().validate(&map),
            Err(ValidationFailure::InsufficientSeparation {
                start_x: 0,
                exit_x: 4,
                ..
            })
        ));

        // Exactly five columns passes
        let map = map_with(Point::new(0, 10), row(10, 1..=5), vec![]);
        assert!(MapValidator::new().is_valid(&map));
    }

    #[test]
    fn test_obstacle_on_path_cell() {
        let map = map_with(
            Point::new(0, 10),
            row(10, 2..=12),
            vec![Obstacle::new(Point::new(7, 10), "rock", "rock_1")],
        );
        assert_eq!(
            MapValidator::new().validate(&map),
            Err(ValidationFailure::ObstacleOnPath {
                cell: Point::new(7, 10)
            })
        );
    }

    #[test]
    fn test_obstacle_on_start_cell() {
        let map = map_with(
            Point::new(0, 10),
            row(10, 2..=12),
            vec![Obstacle::new(Point::new(0, 10), "rock", "rock_1")],
        );
        assert!(!MapValidator::new().is_valid(&map));
    }

    #[test]
    fn test_obstacle_next_to_path_is_allowed() {
        // The placer would never put this here, but it does not block the path
        let map = map_with(
            Point::new(0, 10),
            row(10, 2..=12),
            vec![Obstacle::new(Point::new(7, 11), "bush", "bush_1")],
        );
        assert!(MapValidator::new().is_valid(&map));
    }

    #[test]
    fn test_failure_messages() {
        let failure = ValidationFailure::ObstacleOnPath {
            cell: Point::new(3, 4),
        };
        assert_eq!(failure.to_string(), "obstacle at (3, 4) sits on the path");
    }
}
