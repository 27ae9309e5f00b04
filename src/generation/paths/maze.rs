//! # Maze Paths
//!
//! Switchback routes alternating rightward runs with vertical runs.

use super::{left_entry, PathStrategy, TracedPath, FIRST_PATH_COLUMN};
use crate::utils::clamp_axis;
use crate::{DifficultySettings, Dimensions, Point};
use log::debug;
use rand::Rng;

/// Direction of the current maze run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Right,
    Up,
    Down,
}

impl Heading {
    /// Gets the cell offset of one step in this heading.
    pub fn delta(self) -> Point {
        match self {
            Heading::Right => Point::new(1, 0),
            Heading::Up => Point::new(0, -1),
            Heading::Down => Point::new(0, 1),
        }
    }
}

/// Path built from runs of 2 to 4 cells, alternating between heading right
/// and heading up or down, until it reaches the third-to-last column.
///
/// Every other run heads right and covers at least one column, so the walk
/// reaches the exit column after at most `2 * width` runs. Run lengths below
/// one cell are raised to one when tracing, and `max_run` never drops below
/// `min_run`. Vertical runs that hit the border repeat the clamped cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazePath {
    /// Shortest run in cells
    pub min_run: u32,
    /// Longest run in cells
    pub max_run: u32,
}

impl MazePath {
    /// Creates a maze strategy with the standard tuning.
    pub fn new() -> Self {
        Self {
            min_run: 2,
            max_run: 4,
        }
    }
}

impl Default for MazePath {
    fn default() -> Self {
        Self::new()
    }
}

impl PathStrategy for MazePath {
    fn trace<R: Rng + ?Sized>(
        &self,
        dimensions: Dimensions,
        _settings: &DifficultySettings,
        rng: &mut R,
    ) -> TracedPath {
        let start = left_entry(dimensions);
        let exit_column = dimensions.width - 3;
        let min_run = self.min_run.max(1);
        let max_run = self.max_run.max(min_run);

        let mut path = Vec::new();
        let mut current = Point::new(FIRST_PATH_COLUMN, start.y);
        let mut heading = Heading::Right;
        let mut runs = 0;

        while current.x < exit_column {
            let run_length = rng.gen_range(min_run..=max_run);
            runs += 1;

            for _ in 0..run_length {
                let next = current + heading.delta();
                current = Point::new(
                    clamp_axis(next.x, 1, dimensions.width - 2),
                    clamp_axis(next.y, 1, dimensions.height - 2),
                );
                path.push(current);

                if current.x >= exit_column {
                    break;
                }
            }

            if current.x < exit_column {
                heading = match heading {
                    Heading::Right => {
                        if rng.gen_bool(0.5) {
                            Heading::Up
                        } else {
                            Heading::Down
                        }
                    }
                    Heading::Up | Heading::Down => Heading::Right,
                };
            }
        }

        debug!(
            "{} traced with {} cells over {} runs",
            self.strategy_type(),
            path.len(),
            runs
        );
        TracedPath::new(start, path)
    }

    fn strategy_type(&self) -> &'static str {
        "MazePath"
    }
}
