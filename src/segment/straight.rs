use crate::error::{GeometryError, Result};
use crate::math::{Point, TOLERANCE};

use super::{fraction_along, ConnectionPoints, ConnectionRole, Origin, TrackGeometry};

/// A straight piece of track between two endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Straight {
    start: Point,
    end: Point,
    length: f64,
}

impl Straight {
    /// Creates a straight segment from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide.
    pub fn new(start: Point, end: Point) -> Result<Self> {
        let length = start.distance_to(end);
        if !length.is_finite() || length <= TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "straight segment from {start} to {end} has no length"
            ))
            .into());
        }
        Ok(Self { start, end, length })
    }

    /// Returns the exit endpoint.
    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }
}

impl TrackGeometry for Straight {
    fn start(&self) -> Point {
        self.start
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn point_from(&self, origin: Origin, distance: f64) -> Result<Point> {
        let t = fraction_along(distance, self.length)?;
        Ok(match origin {
            Origin::Start => self.start.lerp(self.end, t),
            Origin::End => self.end.lerp(self.start, t),
        })
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

    const TOL: f64 = 1e-10;

    fn horizontal() -> Straight {
        Straight::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)).unwrap()
    }

    #[test]
    fn length_of_horizontal() {
        assert!((horizontal().length() - 10.0).abs() < TOL);
    }

    #[test]
    fn midpoint_from_start() {
        let p = horizontal().point_at_distance(Point::new(0.0, 0.0), 5.0).unwrap();
        assert!(p.distance_to(Point::new(5.0, 0.0)) < TOL, "p={p}");
    }

    #[test]
    fn walk_from_end_runs_backwards() {
        let s = horizontal();
        let p = s.point_at_distance(Point::new(10.0, 0.0), 2.0).unwrap();
        assert!(p.distance_to(Point::new(8.0, 0.0)) < TOL, "p={p}");
    }

    #[test]
    fn endpoints_at_zero_and_full_length() {
        let s = Straight::new(Point::new(600.0, 500.0), Point::new(710.0, 620.0)).unwrap();
        for origin in [Origin::Start, Origin::End] {
            let (from, to) = match origin {
                Origin::Start => (s.start(), s.end()),
                Origin::End => (s.end(), s.start()),
            };
            assert!(s.point_at_distance(from, 0.0).unwrap().distance_to(from) < TOL);
            let far = s.point_at_distance(from, s.length()).unwrap();
            assert!(far.distance_to(to) < 1e-9, "far={far}");
        }
    }

    #[test]
    fn start_matched_within_connection_tolerance() {
        let s = horizontal();
        let p = s.point_at_distance(Point::new(0.4, -0.3), 3.0).unwrap();
        assert!(p.distance_to(Point::new(3.0, 0.0)) < TOL, "p={p}");
    }

    #[test]
    fn coincident_endpoints_rejected() {
        let err = Straight::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            TrackError::Geometry(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn distance_out_of_range_rejected() {
        let s = horizontal();
        for d in [-0.5, 10.5, f64::NAN] {
            let err = s.point_from(Origin::Start, d).unwrap_err();
            assert!(
                matches!(
                    err,
                    TrackError::Geometry(GeometryError::DistanceOutOfRange { .. })
                ),
                "d={d}"
            );
        }
    }

    #[test]
    fn connection_points_are_start_and_end() {
        let points = horizontal().connection_points();
        let roles: Vec<_> = points.keys().map(|r| r.name()).collect();
        assert_eq!(roles, ["start", "end"]);
        assert_eq!(points[&ConnectionRole::End], Point::new(10.0, 0.0));
    }
}
