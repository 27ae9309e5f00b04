//! # Linear Paths
//!
//! A left-to-right route with occasional one-row jogs.

use super::{left_entry, unit_probability, PathStrategy, TracedPath, FIRST_PATH_COLUMN};
use crate::utils::clamp_axis;
use crate::{DifficultySettings, Dimensions, Point};
use log::debug;
use rand::Rng;

/// Straight path across the grid in two-column strides.
///
/// The path holds at most `min(path_length, width - 3)` cells. On interior
/// steps a jog may shift the row by one; the jog cell sits in the stride
/// column and the stride cell follows one column later.
///
/// Out-of-range tunings are clamped when tracing: `variation_chance` to
/// `[0, 1]` and `stride` to at least one column.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPath {
    /// Probability of a jog on an interior step (0.0 to 1.0)
    pub variation_chance: f64,
    /// Columns advanced per stride
    pub stride: i32,
}

impl LinearPath {
    /// Creates a linear strategy with the standard tuning.
    pub fn new() -> Self {
        Self {
            variation_chance: 0.3,
            stride: 2,
        }
    }
}

impl Default for LinearPath {
    fn default() -> Self {
        Self::new()
    }
}

impl PathStrategy for LinearPath {
    fn trace<R: Rng + ?Sized>(
        &self,
        dimensions: Dimensions,
        settings: &DifficultySettings,
        rng: &mut R,
    ) -> TracedPath {
        let start = left_entry(dimensions);
        let variation_chance = unit_probability(self.variation_chance);
        let stride = self.stride.max(1);
        let target_length = settings
            .path_length
            .min(usize::try_from(dimensions.width - 3).unwrap_or(0));

        let mut path = Vec::with_capacity(target_length);
        let mut x = FIRST_PATH_COLUMN;
        let mut y = start.y;

        for step in 0..target_length {
            if path.len() >= target_length {
                break;
            }

            // A jog needs room for itself and the stride cell after it
            let interior = step > 0 && step + 1 < target_length;
            if interior && path.len() + 2 <= target_length && rng.gen_bool(variation_chance)
            {
                let shift = if rng.gen_bool(0.5) { 1 } else { -1 };
                let jogged_y = clamp_axis(y + shift, 1, dimensions.height - 2);
                if jogged_y != y {
                    path.push(Point::new(x, jogged_y));
                    y = jogged_y;
                    x += 1;
                }
            }

            path.push(Point::new(x, y));
            x += stride;

            if x >= dimensions.width - 1 {
                break;
            }
        }

        debug!("{} traced with {} cells", self.strategy_type(), path.len());
        TracedPath::new(start, path)
    }

    fn strategy_type(&self) -> &'static str {
        "LinearPath"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn easy() -> DifficultySettings {
        DifficultySettings {
            path_length: 8,
            turn_count: 2,
            obstacle_count: 3,
        }
    }

    #[test]
    fn test_linear_without_jogs() {
        // A constant u64::MAX never passes gen_bool(0.3)
        let mut rng = StepRng::new(u64::MAX, 0);
        let traced = LinearPath::new().trace(Dimensions::new(25, 20), &easy(), &mut rng);

        assert_eq!(traced.start, Point::new(0, 10));
        let expected: Vec<_> = (0..8).map(|i| Point::new(2 + 2 * i, 10)).collect();
        assert_eq!(traced.path, expected);
    }

    #[test]
    fn test_linear_with_every_jog() {
        // A constant zero passes every gen_bool, so every interior step jogs down
        let mut rng = StepRng::new(0, 0);
        let traced = LinearPath::new().trace(Dimensions::new(25, 20), &easy(), &mut rng);

        assert_eq!(
            traced.path,
            vec![
                Point::new(2, 10),
                Point::new(4, 11),
                Point::new(5, 11),
                Point::new(7, 12),
                Point::new(8, 12),
                Point::new(10, 13),
                Point::new(11, 13),
                Point::new(13, 13),
            ]
        );
    }

    #[test]
    fn test_linear_respects_target_length() {
        let strategy = LinearPath::new();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let traced = strategy.trace(Dimensions::new(25, 20), &easy(), &mut rng);
            assert!(traced.path.len() <= 8);
            assert!(traced.path.len() >= 3);
        }
    }

    #[test]
    fn test_linear_strides_by_two() {
        let strategy = LinearPath::new();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let traced = strategy.trace(Dimensions::new(32, 24), &easy(), &mut rng);

            for window in traced.path.windows(2) {
                let (a, b) = (window[0], window[1]);
                if a.y == b.y {
                    // Same row: a stride, or the stride that follows a jog
                    assert!(b.x - a.x == 2 || b.x - a.x == 1);
                } else {
                    // Row change: a jog one row over, in the next stride column
                    assert_eq!(b.x - a.x, 2);
                    assert_eq!((b.y - a.y).abs(), 1);
                }
            }
        }
    }

    #[test]
    fn test_linear_jogs_stay_inside() {
        let settings = DifficultySettings {
            path_length: 40,
            turn_count: 0,
            obstacle_count: 0,
        };
        let mut rng = StepRng::new(0, 0);
        let traced = LinearPath::new().trace(Dimensions::new(60, 6), &settings, &mut rng);

        assert!(traced.path.iter().all(|p| (1..=4).contains(&p.y)));
        assert!(traced.path.iter().all(|p| p.x < 60));
    }

    #[test]
    fn test_linear_on_narrow_grid() {
        let mut rng = StdRng::seed_from_u64(5);
        let traced = LinearPath::new().trace(Dimensions::new(3, 3), &easy(), &mut rng);
        assert!(traced.path.is_empty());
    }

    #[test]
    fn test_out_of_range_tuning_is_clamped() {
        let dims = Dimensions::new(25, 20);
        let overeager = LinearPath {
            variation_chance: 1.5,
            stride: 0,
        };
        let traced = overeager.trace(dims, &easy(), &mut StdRng::seed_from_u64(8));
        assert!(traced.path.len() <= 8);
        assert!(traced.path.windows(2).all(|pair| pair[1].x > pair[0].x));

        let undefined = LinearPath {
            variation_chance: f64::NAN,
            ..LinearPath::new()
        };
        let traced = undefined.trace(dims, &easy(), &mut StepRng::new(0, 0));
        assert!(traced.path.iter().all(|cell| cell.y == 10));
    }
}
