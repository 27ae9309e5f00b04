//! # Map Module
//!
//! Grid geometry and the map document produced by the generator.
//!
//! This module contains the data model shared by every generation stage:
//! - Grid cells and their neighbourhoods
//! - Ordered traversal paths
//! - Themed obstacles and the assembled map document

pub mod document;

pub use document::*;

use serde::{Deserialize, Serialize};

/// A 0-based cell coordinate on the map grid.
///
/// # Examples
///
/// ```
/// use towerforge::Point;
///
/// let point = Point::new(10, 5);
/// assert_eq!(point.x, 10);
/// assert_eq!(point.y, 5);
///
/// let neighbourhood = point.moore_neighbourhood();
/// assert_eq!(neighbourhood.len(), 9); // The cell plus its 8 neighbours
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Ordered traversal route, excluding the start cell and ending at the exit cell.
pub type Path = Vec<Point>;

impl Point {
    /// Creates a new point with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Calculates the Chebyshev (king-move) distance to another point.
    ///
    /// # Examples
    ///
    /// ```
    /// use towerforge::Point;
    ///
    /// let a = Point::new(0, 0);
    /// let b = Point::new(3, -1);
    /// assert_eq!(a.chebyshev_distance(b), 3);
    /// ```
    pub fn chebyshev_distance(self, other: Point) -> u32 {
        (self.x - other.x)
            .unsigned_abs()
            .max((self.y - other.y).unsigned_abs())
    }

    /// Returns the cell itself and its 8 surrounding cells.
    ///
    /// Cells outside the grid are included; callers only use the result for
    /// membership checks.
    pub fn moore_neighbourhood(self) -> Vec<Point> {
        let mut cells = Vec::with_capacity(9);
        for dx in -1..=1 {
            for dy in -1..=1 {
                cells.push(Point::new(self.x + dx, self.y + dy));
            }
        }
        cells
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

impl Dimensions {
    /// Creates new grid dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Checks if a point lies on the grid.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0 && point.y >= 0 && point.x < self.width && point.y < self.height
    }

    /// Checks if a point lies on the grid but off its outer ring.
    pub fn is_interior(&self, point: Point) -> bool {
        point.x >= 1 && point.y >= 1 && point.x <= self.width - 2 && point.y <= self.height - 2
    }
}
