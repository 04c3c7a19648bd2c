//! Circle and arc helpers shared by curved segments.
//!
//! Angles are in radians, measured counter-clockwise from the positive x axis.
//! A positive sweep runs counter-clockwise, a negative sweep clockwise.

use super::{Point, Point2, Vector2};

/// Returns the point on the circle around `center` at `angle`.
#[must_use]
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    let offset = Vector2::new(angle.cos(), angle.sin()) * radius;
    (Point2::from(center) + offset).into()
}

/// Returns the center of the circle of `radius` on which `point` lies at `angle`.
#[must_use]
pub fn center_through(point: Point, radius: f64, angle: f64) -> Point {
    let offset = Vector2::new(angle.cos(), angle.sin()) * radius;
    (Point2::from(point) - offset).into()
}

/// Length of an arc of `radius` sweeping `sweep` radians, in either direction.
#[must_use]
pub fn arc_length(radius: f64, sweep: f64) -> f64 {
    radius * sweep.abs()
}

/// Angle reached after covering fraction `t` of `sweep`, starting at `start_angle`.
#[must_use]
pub fn angle_at(start_angle: f64, sweep: f64, t: f64) -> f64 {
    start_angle + sweep * t
}
