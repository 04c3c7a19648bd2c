use std::fmt;

use super::{Point2, Vector2};

/// An immutable 2D coordinate in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns the Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        nalgebra::distance(&Point2::from(self), &Point2::from(other))
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let from = Point2::from(self);
        let delta: Vector2 = Point2::from(other) - from;
        (from + delta * t).into()
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for Point2 {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
