use crate::error::{NetworkError, Result};
use crate::network::TrackNetwork;
use crate::segment::{IdGenerator, Origin, SegmentId, TrackGeometry};

use super::{Polyline, TessellationParams};

/// Samples a segment of a network into a polyline, walking from its start.
///
/// Samples are evenly spaced along the segment, so a renderer can stroke
/// curves without knowing their shape. Switches are sampled along their live
/// branch.
pub struct TessellateSegment {
    id: SegmentId,
    params: TessellationParams,
}

impl TessellateSegment {
    /// Creates a new `TessellateSegment` operation.
    #[must_use]
    pub fn new(id: SegmentId, params: TessellationParams) -> Self {
        Self { id, params }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the segment is not
    /// part of `network`.
    pub fn execute<G: IdGenerator>(&self, network: &TrackNetwork<G>) -> Result<Polyline> {
        self.params.validate()?;
        let segment = network
            .find(&self.id)
            .ok_or_else(|| NetworkError::SegmentNotFound(self.id.clone()))?;
        sample(segment, &self.params)
    }
}

/// Samples `geometry` at `segment_count(length) + 1` evenly spaced distances.
fn sample(geometry: &impl TrackGeometry, params: &TessellationParams) -> Result<Polyline> {
    let length = geometry.length();
    let n = segment_count(length, params);
    let points = (0..=n)
        .map(|i| geometry.point_from(Origin::Start, length * f64::from(i) / f64::from(n)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Polyline { points })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn segment_count(length: f64, params: &TessellationParams) -> u32 {
    let wanted = (length / params.spacing).ceil();
    if wanted >= f64::from(params.max_segments) {
        params.max_segments
    } else {
        (wanted as u32).max(params.min_segments)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TrackError;
    use crate::math::Point;
    use crate::segment::{Circular, SequentialIds, Straight, Switch};
    use approx::assert_relative_eq;

    fn network() -> TrackNetwork<SequentialIds> {
        let mut network = TrackNetwork::with_id_generator(SequentialIds::new("t"));
        network.insert(Straight::new(Point::ORIGIN, Point::new(10.0, 0.0)).unwrap());
        network.insert(Circular::new(Point::new(10.0, 0.0), 0.0, 90.0, 10.0).unwrap());
        network.insert(
            Switch::new(Point::ORIGIN, Point::new(10.0, 0.0), Point::new(10.0, 5.0)).unwrap(),
        );
        network
    }

    #[test]
    fn straight_sampled_at_spacing() {
        let params = TessellationParams {
            spacing: 2.5,
            ..Default::default()
        };
        let line = TessellateSegment::new(SegmentId::new("t-0"), params)
            .execute(&network())
            .unwrap();
        assert_eq!(line.points.len(), 5);
        assert!(line.points[1].distance_to(Point::new(2.5, 0.0)) < 1e-12);
        assert!(line.points[4].distance_to(Point::new(10.0, 0.0)) < 1e-12);
    }

    #[test]
    fn arc_samples_stay_on_circle() {
        let params = TessellationParams {
            spacing: 0.5,
            ..Default::default()
        };
        let line = TessellateSegment::new(SegmentId::new("t-1"), params)
            .execute(&network())
            .unwrap();
        for p in &line.points {
            assert_relative_eq!(p.distance_to(Point::ORIGIN), 10.0, epsilon = 1e-9);
        }
        let arc = network().find(&SegmentId::new("t-1")).unwrap().length();
        assert!(line.length() < arc);
        assert_relative_eq!(line.length(), arc, max_relative = 1e-3);
    }

    #[test]
    fn switch_follows_live_branch() {
        let mut network = network();
        network.toggle_all_switches();
        let line = TessellateSegment::new(SegmentId::new("t-2"), TessellationParams::default())
            .execute(&network)
            .unwrap();
        let last = line.points.last().unwrap();
        assert!(last.distance_to(Point::new(10.0, 5.0)) < 1e-12, "last={last}");
    }

    #[test]
    fn segment_count_is_bounded() {
        let params = TessellationParams {
            spacing: 1.0,
            min_segments: 4,
            max_segments: 16,
        };
        assert_eq!(segment_count(0.5, &params), 4);
        assert_eq!(segment_count(10.0, &params), 10);
        assert_eq!(segment_count(1000.0, &params), 16);
    }

    #[test]
    fn unknown_segment_is_not_found() {
        let err = TessellateSegment::new(SegmentId::new("zz"), TessellationParams::default())
            .execute(&network())
            .unwrap_err();
        assert!(matches!(
            err,
            TrackError::Network(NetworkError::SegmentNotFound(_))
        ));
    }
}
