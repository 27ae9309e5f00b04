//! # Path Strategies
//!
//! The four path-shape strategies behind [`Complexity`].
//!
//! Every strategy takes the grid dimensions and the difficulty settings and
//! returns an entry cell on the grid edge plus the ordered route that leads
//! away from it. Strategies draw all randomness from the caller's RNG.

pub mod curved;
pub mod linear;
pub mod maze;
pub mod spiral;

pub use curved::*;
pub use linear::*;
pub use maze::*;
pub use spiral::*;

use crate::{Complexity, DifficultySettings, Dimensions, Path, Point};
use rand::Rng;

/// Clamps a tuning probability into `[0, 1]`; NaN counts as zero.
pub(crate) fn unit_probability(chance: f64) -> f64 {
    if chance.is_nan() {
        0.0
    } else {
        chance.clamp(0.0, 1.0)
    }
}

/// Entry cell and route produced by a path strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedPath {
    pub start: Point,
    pub path: Path,
}

impl TracedPath {
    /// Creates a traced path.
    pub fn new(start: Point, path: Path) -> Self {
        Self { start, path }
    }
}

/// Trait for path-shape strategies.
pub trait PathStrategy {
    /// Builds an entry cell and route for a grid of the given size.
    fn trace<R: Rng + ?Sized>(
        &self,
        dimensions: Dimensions,
        settings: &DifficultySettings,
        rng: &mut R,
    ) -> TracedPath;

    /// Gets the strategy name for logging and debugging.
    fn strategy_type(&self) -> &'static str;
}

impl Complexity {
    /// Runs the default-tuned strategy for this complexity.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use towerforge::{Complexity, Difficulty, DifficultyProfile, Dimensions};
    ///
    /// let settings = DifficultyProfile::builtin().settings(Difficulty::Easy);
    /// let mut rng = StdRng::seed_from_u64(3);
    /// let traced = Complexity::Maze.trace_path(Dimensions::new(25, 20), &settings, &mut rng);
    /// assert_eq!(traced.start.x, 0);
    /// assert!(!traced.path.is_empty());
    /// ```
    pub fn trace_path<R: Rng + ?Sized>(
        self,
        dimensions: Dimensions,
        settings: &DifficultySettings,
        rng: &mut R,
    ) -> TracedPath {
        match self {
            Complexity::Linear => LinearPath::default().trace(dimensions, settings, rng),
            Complexity::Curved => CurvedPath::default().trace(dimensions, settings, rng),
            Complexity::Maze => MazePath::default().trace(dimensions, settings, rng),
            Complexity::Spiral => SpiralPath::default().trace(dimensions, settings, rng),
        }
    }
}

/// Column where the left-entry strategies place their first path cell.
pub(crate) const FIRST_PATH_COLUMN: i32 = 2;

/// Entry cell shared by the left-entry strategies: column 0, middle row.
pub(crate) fn left_entry(dimensions: Dimensions) -> Point {
    Point::new(0, dimensions.height / 2)
}
