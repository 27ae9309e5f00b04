//! # Obstacle Placement
//!
//! Scatters themed decorations across the grid without touching the path.

use crate::{config, Dimensions, Obstacle, Point, ThemeDefinition, TowerforgeError, TowerforgeResult};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Best-effort obstacle scatterer.
///
/// Obstacles land on interior cells that are neither the start cell nor
/// within one cell (8-neighbourhood) of any path cell, and never on top of
/// each other. Placement gives up after `attempts_per_slot * count` draws,
/// so fewer obstacles than requested is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstaclePlacer {
    /// Random draws allowed per requested obstacle
    pub attempts_per_slot: usize,
}

impl ObstaclePlacer {
    /// Creates a placer with the standard attempt budget.
    pub fn new() -> Self {
        Self {
            attempts_per_slot: config::OBSTACLE_ATTEMPTS_PER_SLOT,
        }
    }

    /// Builds the set of cells obstacles must avoid.
    pub fn blocked_cells(start: Point, path: &[Point]) -> HashSet<Point> {
        let mut blocked = HashSet::with_capacity(path.len() * 9 + 1);
        blocked.insert(start);
        for point in path {
            blocked.extend(point.moore_neighbourhood());
        }
        blocked
    }

    /// Places up to `count` obstacles drawn from the theme's vocabulary.
    ///
    /// Fails only when the theme cannot name a sprite for an obstacle kind.
    pub fn place<R: Rng + ?Sized>(
        &self,
        dimensions: Dimensions,
        start: Point,
        path: &[Point],
        count: usize,
        theme: &ThemeDefinition,
        rng: &mut R,
    ) -> TowerforgeResult<Vec<Obstacle>> {
        let mut obstacles = Vec::with_capacity(count);
        if dimensions.width < 3 || dimensions.height < 3 {
            return Ok(obstacles);
        }

        let mut blocked = Self::blocked_cells(start, path);
        let max_attempts = count * self.attempts_per_slot;
        let mut attempts = 0;

        while obstacles.len() < count && attempts < max_attempts {
            let cell = Point::new(
                rng.gen_range(1..=dimensions.width - 2),
                rng.gen_range(1..=dimensions.height - 2),
            );
            attempts += 1;

            if !blocked.insert(cell) {
                continue;
            }

            let kind = theme.obstacle_types.choose(rng).ok_or_else(|| {
                TowerforgeError::InvalidConfig(format!(
                    "theme '{}' has no obstacle types",
                    theme.key
                ))
            })?;
            let sprite_id = theme.sprite_for(kind).ok_or_else(|| {
                TowerforgeError::InvalidConfig(format!(
                    "theme '{}' has no sprite for obstacle '{}'",
                    theme.key, kind
                ))
            })?;

            obstacles.push(Obstacle::new(cell, kind.as_str(), sprite_id));
        }

        debug!(
            "Placed {}/{} '{}' obstacles in {} draws",
            obstacles.len(),
            count,
            theme.key,
            attempts
        );
        Ok(obstacles)
    }
}

impl Default for ObstaclePlacer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ThemeCatalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn straight_path() -> (Point, Vec<Point>) {
        let start = Point::new(0, 10);
        let path = (1..24).map(|x| Point::new(x, 10)).collect();
        (start, path)
    }

    #[test]
    fn test_blocked_cells_cover_path_buffer() {
        let blocked = ObstaclePlacer::blocked_cells(Point::new(0, 5), &[Point::new(2, 5)]);

        assert!(blocked.contains(&Point::new(0, 5)));
        assert!(blocked.contains(&Point::new(2, 5)));
        assert!(blocked.contains(&Point::new(1, 4)));
        assert!(blocked.contains(&Point::new(3, 6)));
        assert!(!blocked.contains(&Point::new(4, 5)));
        // The start cell gets no buffer of its own
        assert!(!blocked.contains(&Point::new(0, 7)));
        assert_eq!(blocked.len(), 10);
    }

    #[test]
    fn test_obstacles_avoid_path_buffer() {
        let forest = ThemeCatalog::builtin().theme("forest").unwrap();
        let placer = ObstaclePlacer::new();
        let dims = Dimensions::new(25, 20);
        let (start, path) = straight_path();

        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let obstacles = placer.place(dims, start, &path, 15, forest, &mut rng).unwrap();

            assert!(obstacles.len() <= 15);
            for obstacle in &obstacles {
                assert!(dims.is_interior(obstacle.position()));
                assert!((obstacle.y - 10).abs() >= 2, "obstacle at {:?}", obstacle);
            }
        }
    }

    #[test]
    fn test_obstacles_never_share_a_cell() {
        let lava = ThemeCatalog::builtin().theme("lava").unwrap();
        let placer = ObstaclePlacer::new();
        let dims = Dimensions::new(10, 10);
        let (start, path) = (Point::new(0, 5), vec![Point::new(2, 5)]);

        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let obstacles = placer.place(dims, start, &path, 40, lava, &mut rng).unwrap();
            let cells: HashSet<_> = obstacles.iter().map(Obstacle::position).collect();
            assert_eq!(cells.len(), obstacles.len());
        }
    }

    #[test]
    fn test_obstacle_kinds_match_theme() {
        let snow = ThemeCatalog::builtin().theme("snow").unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let (start, path) = straight_path();

        let obstacles = ObstaclePlacer::new()
            .place(Dimensions::new(25, 20), start, &path, 10, snow, &mut rng)
            .unwrap();

        assert!(!obstacles.is_empty());
        for obstacle in &obstacles {
            assert!(snow.obstacle_types.iter().any(|kind| kind == obstacle.kind()));
            assert_eq!(snow.sprite_for(obstacle.kind()), Some(obstacle.sprite_id()));
        }
    }

    #[test]
    fn test_crowded_grid_returns_fewer() {
        // A 5x5 grid whose interior is entirely inside the path buffer
        let forest = ThemeCatalog::builtin().theme("forest").unwrap();
        let path = vec![Point::new(2, 1), Point::new(2, 2), Point::new(2, 3)];
        let mut rng = StdRng::seed_from_u64(3);

        let obstacles = ObstaclePlacer::new()
            .place(Dimensions::new(5, 5), Point::new(0, 2), &path, 6, forest, &mut rng)
            .unwrap();
        assert!(obstacles.is_empty());
    }

    #[test]
    fn test_zero_count_places_nothing() {
        let forest = ThemeCatalog::builtin().theme("forest").unwrap();
        let (start, path) = straight_path();
        let mut rng = StdRng::seed_from_u64(3);

        let obstacles = ObstaclePlacer::new()
            .place(Dimensions::new(25, 20), start, &path, 0, forest, &mut rng)
            .unwrap();
        assert!(obstacles.is_empty());
    }

    #[test]
    fn test_missing_sprite_is_an_error() {
        let mut broken = ThemeCatalog::builtin().theme("desert").unwrap().clone();
        broken.sprite_map.clear();
        let (start, path) = straight_path();
        let mut rng = StdRng::seed_from_u64(3);

        let result = ObstaclePlacer::new().place(
            Dimensions::new(25, 20),
            start,
            &path,
            5,
            &broken,
            &mut rng,
        );
        assert!(matches!(result, Err(TowerforgeError::InvalidConfig(_))));
    }
}
