//! # Curved Paths
//!
//! Edge-to-edge routes bent through jittered waypoints.

use super::{PathStrategy, TracedPath};
use crate::generation::utils::roll_between;
use crate::generation::waypoints::{connect_waypoints, plan_waypoints};
use crate::{DifficultySettings, Dimensions, Point};
use log::debug;
use rand::Rng;

/// Grid edge a curved path enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryEdge {
    Left,
    Top,
    Bottom,
}

impl EntryEdge {
    /// Every entry edge, in draw order.
    pub const ALL: [EntryEdge; 3] = [EntryEdge::Left, EntryEdge::Top, EntryEdge::Bottom];
}

/// Path from a random edge to a cell on the opposite edge, bent by
/// `turn_count` jittered waypoints and joined with straight segments.
///
/// Short segments can revisit cells; the duplicates are kept. A negative
/// `waypoint_jitter` counts as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurvedPath {
    /// Distance kept from the grid corners when picking edge cells
    pub edge_margin: i32,
    /// Maximum waypoint offset on each axis
    pub waypoint_jitter: i32,
    /// Distance waypoints keep from the grid border
    pub waypoint_margin: i32,
}

impl CurvedPath {
    /// Creates a curved strategy with the standard tuning.
    pub fn new() -> Self {
        Self {
            edge_margin: 3,
            waypoint_jitter: 3,
            waypoint_margin: 2,
        }
    }

    /// Picks a random cell along the x axis, away from the corners.
    fn roll_column<R: Rng + ?Sized>(&self, dimensions: Dimensions, rng: &mut R) -> i32 {
        roll_between(
            rng,
            self.edge_margin,
            dimensions.width - 1 - self.edge_margin,
        )
    }

    /// Picks a random cell along the y axis, away from the corners.
    fn roll_row<R: Rng + ?Sized>(&self, dimensions: Dimensions, rng: &mut R) -> i32 {
        roll_between(
            rng,
            self.edge_margin,
            dimensions.height - 1 - self.edge_margin,
        )
    }

    /// Picks the entry cell and the exit cell for an entry edge.
    pub fn endpoints<R: Rng + ?Sized>(
        &self,
        edge: EntryEdge,
        dimensions: Dimensions,
        rng: &mut R,
    ) -> (Point, Point) {
        let last_column = dimensions.width - 1;
        let last_row = dimensions.height - 1;

        match edge {
            EntryEdge::Left => {
                let start = Point::new(0, self.roll_row(dimensions, rng));
                let exit = Point::new(last_column, self.roll_row(dimensions, rng));
                (start, exit)
            }
            EntryEdge::Top => {
                let start = Point::new(self.roll_column(dimensions, rng), 0);
                let exit = Point::new(self.roll_column(dimensions, rng), last_row);
                (start, exit)
            }
            EntryEdge::Bottom => {
                let start = Point::new(self.roll_column(dimensions, rng), last_row);
                let exit = Point::new(self.roll_column(dimensions, rng), 0);
                (start, exit)
            }
        }
    }
}

impl Default for CurvedPath {
    fn default() -> Self {
        Self::new()
    }
}

impl PathStrategy for CurvedPath {
    fn trace<R: Rng + ?Sized>(
        &self,
        dimensions: Dimensions,
        settings: &DifficultySettings,
        rng: &mut R,
    ) -> TracedPath {
        let edge = EntryEdge::ALL[rng.gen_range(0..EntryEdge::ALL.len())];
        let (start, exit) = self.endpoints(edge, dimensions, rng);

        let waypoints = plan_waypoints(
            start,
            exit,
            settings.turn_count,
            dimensions,
            self.waypoint_jitter,
            self.waypoint_margin,
            rng,
        );
        let path = connect_waypoints(start, &waypoints);

        debug!(
            "{} traced from {:?} edge {} to {} with {} cells",
            self.strategy_type(),
            edge,
            start,
            exit,
            path.len()
        );
        TracedPath::new(start, path)
    }

    fn strategy_type(&self) -> &'static str {
        "CurvedPath"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn medium() -> DifficultySettings {
        DifficultySettings {
            path_length: 12,
            turn_count: 4,
            obstacle_count: 6,
        }
    }

    #[test]
    fn test_endpoints_sit_on_edges() {
        let strategy = CurvedPath::new();
        let dims = Dimensions::new(32, 24);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            let (start, exit) = strategy.endpoints(EntryEdge::Left, dims, &mut rng);
            assert_eq!(start.x, 0);
            assert_eq!(exit.x, 31);
            assert!((3..=20).contains(&start.y));
            assert!((3..=20).contains(&exit.y));

            let (start, exit) = strategy.endpoints(EntryEdge::Top, dims, &mut rng);
            assert_eq!(start.y, 0);
            assert_eq!(exit.y, 23);
            assert!((3..=28).contains(&start.x));

            let (start, exit) = strategy.endpoints(EntryEdge::Bottom, dims, &mut rng);
            assert_eq!(start.y, 23);
            assert_eq!(exit.y, 0);
            assert!((3..=28).contains(&exit.x));
        }
    }

    #[test]
    fn test_curved_path_ends_at_exit_edge() {
        let strategy = CurvedPath::new();
        let dims = Dimensions::new(32, 24);

        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let traced = strategy.trace(dims, &medium(), &mut rng);
            let exit = *traced.path.last().unwrap();

            match (traced.start.x, traced.start.y) {
                (0, _) => assert_eq!(exit.x, 31),
                (_, 0) => assert_eq!(exit.y, 23),
                (_, 23) => assert_eq!(exit.y, 0),
                other => panic!("start {other:?} is not on an entry edge"),
            }
        }
    }

    #[test]
    fn test_curved_path_never_skips_more_than_a_cell() {
        let strategy = CurvedPath::new();
        let dims = Dimensions::new(40, 30);

        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let traced = strategy.trace(dims, &medium(), &mut rng);

            // Truncated interpolation can leave a one-cell gap inside a segment
            assert!(traced.start.chebyshev_distance(traced.path[0]) <= 2);
            for window in traced.path.windows(2) {
                assert!(window[0].chebyshev_distance(window[1]) <= 2);
            }
        }
    }

    #[test]
    fn test_entry_edges_all_occur() {
        let strategy = CurvedPath::new();
        let dims = Dimensions::new(25, 20);
        let mut left = false;
        let mut top = false;
        let mut bottom = false;

        for seed in 0..60 {
            let mut rng = StdRng::seed_from_u64(seed);
            let start = strategy.trace(dims, &medium(), &mut rng).start;
            left |= start.x == 0;
            top |= start.y == 0;
            bottom |= start.y == 19;
        }

        assert!(left && top && bottom);
    }

    #[test]
    fn test_negative_jitter_counts_as_zero() {
        let strategy = CurvedPath {
            waypoint_jitter: -1,
            ..CurvedPath::new()
        };

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let traced = strategy.trace(Dimensions::new(32, 24), &medium(), &mut rng);
            assert!(!traced.path.is_empty());
        }
    }
}
