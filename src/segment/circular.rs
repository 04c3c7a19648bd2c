use crate::error::{GeometryError, Result};
use crate::math::arc::{angle_at, arc_length, center_through, point_on_circle};
use crate::math::{Point, TOLERANCE};

use super::{fraction_along, ConnectionPoints, ConnectionRole, Origin, TrackGeometry};

/// A curved piece of track following a circular arc.
///
/// The arc starts at `start`, which lies on the circle at `rotation_start`
/// degrees, and sweeps to `rotation_end` degrees. A positive sweep turns
/// counter-clockwise, a negative sweep clockwise. Sweeps beyond a full turn
/// are kept as is and simply produce a longer arc.
#[derive(Debug, Clone, PartialEq)]
pub struct Circular {
    start: Point,
    end: Point,
    center: Point,
    radius: f64,
    rotation_start: f64,
    rotation_end: f64,
}

impl Circular {
    /// Creates a circular segment.
    ///
    /// # Arguments
    ///
    /// * `start` - Entry endpoint, on the circle at `rotation_start`
    /// * `rotation_start` - Angle of `start` around the center, in degrees
    /// * `rotation_end` - Angle of the exit endpoint around the center, in degrees
    /// * `radius` - Radius (must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive, the sweep is zero, or
    /// the start point is not finite.
    pub fn new(start: Point, rotation_start: f64, rotation_end: f64, radius: f64) -> Result<Self> {
        if !start.is_finite() {
            return Err(GeometryError::Degenerate(format!(
                "circular segment starts at non-finite point {start}"
            ))
            .into());
        }

        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius).into());
        }

        let sweep = (rotation_end - rotation_start).to_radians();
        if !sweep.is_finite() || arc_length(radius, sweep) <= TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "circular segment from {rotation_start}° to {rotation_end}° has no sweep"
            ))
            .into());
        }

        let center = center_through(start, radius, rotation_start.to_radians());
        let end = point_on_circle(center, radius, rotation_end.to_radians());
        if !center.is_finite() || !end.is_finite() {
            return Err(GeometryError::Degenerate(format!(
                "circular segment from {start} has no finite center or end"
            ))
            .into());
        }

        Ok(Self {
            start,
            end,
            center,
            radius,
            rotation_start,
            rotation_end,
        })
    }

    /// Returns the exit endpoint.
    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns the center of the arc's circle.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Angle of the start endpoint, in degrees.
    #[must_use]
    pub fn rotation_start(&self) -> f64 {
        self.rotation_start
    }

    /// Angle of the end endpoint, in degrees.
    #[must_use]
    pub fn rotation_end(&self) -> f64 {
        self.rotation_end
    }

    /// Signed sweep from start to end, in degrees.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation_end - self.rotation_start
    }

    fn sweep(&self) -> f64 {
        self.rotation().to_radians()
    }
}

impl TrackGeometry for Circular {
    fn start(&self) -> Point {
        self.start
    }

    fn length(&self) -> f64 {
        arc_length(self.radius, self.sweep())
    }

    fn point_from(&self, origin: Origin, distance: f64) -> Result<Point> {
        let t = fraction_along(distance, self.length())?;
        let angle = match origin {
            Origin::Start => angle_at(self.rotation_start.to_radians(), self.sweep(), t),
            Origin::End => angle_at(self.rotation_end.to_radians(), -self.sweep(), t),
        };
        Ok(point_on_circle(self.center, self.radius, angle))
    }

    fn connection_points(&self) -> ConnectionPoints {
        ConnectionPoints::from([
            (ConnectionRole::Start, self.start),
            (ConnectionRole::End, self.end),
        ])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TrackError;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    fn quarter() -> Circular {
        Circular::new(Point::new(10.0, 0.0), 0.0, 90.0, 10.0).unwrap()
    }

    #[test]
    fn quarter_circle_center_and_length() {
        let c = quarter();
        assert!(c.center().distance_to(Point::ORIGIN) < TOL, "center={}", c.center());
        assert_relative_eq!(c.length(), 5.0 * PI, epsilon = TOL);
        assert_relative_eq!(c.length(), 15.708, epsilon = 1e-3);
    }

    #[test]
    fn quarter_circle_reaches_end() {
        let c = quarter();
        let p = c.point_at_distance(c.start(), c.length()).unwrap();
        assert!(p.distance_to(Point::new(0.0, 10.0)) < TOL, "p={p}");
        assert!(c.end().distance_to(Point::new(0.0, 10.0)) < TOL);
    }

    #[test]
    fn half_way_is_at_45_degrees() {
        let c = quarter();
        let p = c.point_from(Origin::Start, c.length() / 2.0).unwrap();
        let expected = 10.0 * (PI / 4.0).cos();
        assert_relative_eq!(p.x(), expected, epsilon = TOL);
        assert_relative_eq!(p.y(), expected, epsilon = TOL);
    }

    #[test]
    fn walk_from_end_returns_to_start() {
        let c = quarter();
        let near_end = c.point_at_distance(Point::new(0.0, 10.0), 0.0).unwrap();
        assert!(near_end.distance_to(c.end()) < TOL);
        let back = c.point_at_distance(Point::new(0.0, 10.0), c.length()).unwrap();
        assert!(back.distance_to(c.start()) < TOL, "back={back}");
    }

    #[test]
    fn clockwise_sweep_turns_right() {
        // Heading north at (0, 0) with the center to the east.
        let c = Circular::new(Point::ORIGIN, 180.0, 90.0, 5.0).unwrap();
        assert!(c.center().distance_to(Point::new(5.0, 0.0)) < TOL);
        assert!(c.end().distance_to(Point::new(5.0, 5.0)) < TOL, "end={}", c.end());
        let mid = c.point_from(Origin::Start, c.length() / 2.0).unwrap();
        assert!(mid.y() > 0.0 && mid.x() > 0.0 && mid.x() < 5.0, "mid={mid}");
    }

    #[test]
    fn every_sample_lies_on_circle() {
        let c = Circular::new(Point::new(450.0, 500.0), -30.0, 210.0, 75.0).unwrap();
        let length = c.length();
        for i in 0..=40 {
            let d = length * f64::from(i) / 40.0;
            for origin in [Origin::Start, Origin::End] {
                let p = c.point_from(origin, d).unwrap();
                assert_relative_eq!(p.distance_to(c.center()), c.radius(), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn opposite_walks_meet() {
        let c = quarter();
        let d = 4.0;
        let forward = c.point_from(Origin::Start, d).unwrap();
        let backward = c.point_from(Origin::Start.opposite(), c.length() - d).unwrap();
        assert!(forward.distance_to(backward) < TOL);
    }

    #[test]
    fn sweep_beyond_full_turn_is_not_normalized() {
        let c = Circular::new(Point::new(1.0, 0.0), 0.0, 450.0, 1.0).unwrap();
        assert_relative_eq!(c.length(), 2.5 * PI, epsilon = TOL);
        assert!(c.end().distance_to(Point::new(0.0, 1.0)) < TOL);
    }

    #[test]
    fn zero_sweep_rejected() {
        let err = Circular::new(Point::ORIGIN, 45.0, 45.0, 10.0).unwrap_err();
        assert!(matches!(
            err,
            TrackError::Geometry(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn non_finite_start_rejected() {
        let starts = [
            Point::new(f64::NAN, 0.0),
            Point::new(0.0, f64::INFINITY),
            Point::new(f64::NEG_INFINITY, f64::NAN),
        ];
        for start in starts {
            let err = Circular::new(start, 0.0, 90.0, 10.0).unwrap_err();
            assert!(
                matches!(err, TrackError::Geometry(GeometryError::Degenerate(_))),
                "start={start:?}"
            );
        }
    }

    #[test]
    fn huge_radius_rejected_when_center_overflows() {
        let err = Circular::new(Point::new(f64::MAX, 0.0), 180.0, 90.0, f64::MAX).unwrap_err();
        assert!(matches!(
            err,
            TrackError::Geometry(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn non_positive_radius_rejected() {
        for radius in [0.0, -3.0, f64::NAN] {
            let err = Circular::new(Point::ORIGIN, 0.0, 90.0, radius).unwrap_err();
            assert!(
                matches!(
                    err,
                    TrackError::Geometry(GeometryError::NonPositiveRadius(_))
                ),
                "radius={radius}"
            );
        }
    }
}
