//! # Waypoints
//!
//! Intermediate targets for curved paths and the straight segments joining them.

use crate::utils::{clamp_axis, lerp_truncated};
use crate::{Dimensions, Path, Point};
use rand::Rng;

/// Plans `turns` jittered waypoints between `from` and `to`, then `to` itself.
///
/// Waypoint `i` starts at progress `(i + 1) / (turns + 1)` along the straight
/// line, is offset by up to `jitter` cells on each axis, and is clamped to
/// stay `margin` cells away from the grid border. A negative `jitter` counts
/// as zero.
pub fn plan_waypoints<R: Rng + ?Sized>(
    from: Point,
    to: Point,
    turns: usize,
    dimensions: Dimensions,
    jitter: i32,
    margin: i32,
    rng: &mut R,
) -> Vec<Point> {
    let jitter = jitter.max(0);
    let mut waypoints = Vec::with_capacity(turns + 1);

    for turn in 0..turns {
        let progress = (turn + 1) as f64 / (turns + 1) as f64;
        let base_x = lerp_truncated(from.x, to.x, progress);
        let base_y = lerp_truncated(from.y, to.y, progress);

        let offset_x = rng.gen_range(-jitter..=jitter);
        let offset_y = rng.gen_range(-jitter..=jitter);

        waypoints.push(Point::new(
            clamp_axis(base_x + offset_x, margin, dimensions.width - 1 - margin),
            clamp_axis(base_y + offset_y, margin, dimensions.height - 1 - margin),
        ));
    }

    waypoints.push(to);
    waypoints
}

/// Walks a straight segment from `from` to `to`, excluding `from`.
///
/// Takes `max(|dx|, |dy|)` steps and truncates each interpolated coordinate,
/// so a segment never has more cells than its longer axis.
///
/// # Examples
///
/// ```
/// use towerforge::{trace_segment, Point};
///
/// let cells = trace_segment(Point::new(0, 0), Point::new(3, 1));
/// assert_eq!(cells.len(), 3);
/// assert_eq!(cells.last(), Some(&Point::new(3, 1)));
/// assert!(trace_segment(Point::new(2, 2), Point::new(2, 2)).is_empty());
/// ```
pub fn trace_segment(from: Point, to: Point) -> Path {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let steps = dx.abs().max(dy.abs());

    (1..=steps)
        .map(|step| {
            let fraction = f64::from(step) / f64::from(steps);
            Point::new(
                lerp_truncated(from.x, to.x, fraction),
                lerp_truncated(from.y, to.y, fraction),
            )
        })
        .collect()
}

/// Joins `start` and each waypoint in turn with straight segments.
pub fn connect_waypoints(start: Point, waypoints: &[Point]) -> Path {
    let mut path = Path::new();
    let mut current = start;

    for &waypoint in waypoints {
        path.extend(trace_segment(current, waypoint));
        current = waypoint;
    }

    path
}
