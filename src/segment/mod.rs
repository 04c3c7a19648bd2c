mod circular;
mod connection;
mod id;
mod straight;
mod switch;

pub use circular::Circular;
pub use connection::{ConnectionPoints, ConnectionRole, Origin};
pub use id::{IdGenerator, RandomIds, SegmentId, SequentialIds};
pub use straight::Straight;
pub use switch::{Branch, Switch};

use crate::error::{GeometryError, Result};
use crate::math::{Point, TOLERANCE};
use crate::style::{Color, SWITCH_COLOR, TRACK_COLOR, TRACK_HIGHLIGHT_COLOR};

/// Geometry shared by every kind of track segment.
pub trait TrackGeometry {
    /// Returns the canonical start endpoint.
    fn start(&self) -> Point;

    /// Returns the current length of the segment.
    fn length(&self) -> f64;

    /// Returns the point reached after travelling `distance` from `origin`.
    ///
    /// # Errors
    ///
    /// Returns an error if `distance` lies outside `[0, length]`.
    fn point_from(&self, origin: Origin, distance: f64) -> Result<Point>;

    /// Returns the named endpoints of the segment.
    fn connection_points(&self) -> ConnectionPoints;

    /// Returns the point reached after travelling `distance` from the endpoint
    /// at `start_point`.
    ///
    /// `start_point` counts as the start endpoint when it lies within
    /// [`CONNECTION_TOLERANCE`](crate::math::CONNECTION_TOLERANCE) of it;
    /// any other point is taken to be the opposite end.
    ///
    /// # Errors
    ///
    /// Returns an error if `distance` lies outside `[0, length]`.
    fn point_at_distance(&self, start_point: Point, distance: f64) -> Result<Point> {
        self.point_from(Origin::nearest(start_point, self.start()), distance)
    }
}

/// Converts `distance` along a segment of `length` into a fraction in `[0, 1]`.
///
/// Distances overshooting either bound by at most [`TOLERANCE`] are clamped.
/// The slack grows with `length` once it exceeds one layout unit, so long
/// segments tolerate the rounding of their own length.
pub(crate) fn fraction_along(distance: f64, length: f64) -> Result<f64> {
    let slack = TOLERANCE * length.max(1.0);
    if !distance.is_finite() || distance < -slack || distance > length + slack {
        return Err(GeometryError::DistanceOutOfRange { distance, length }.into());
    }
    Ok((distance / length).clamp(0.0, 1.0))
}

/// The shape of a segment.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentShape {
    Straight(Straight),
    Circular(Circular),
    Switch(Switch),
}

/// Draw description of a segment, enough for a renderer to stroke it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    Line {
        start: Point,
        end: Point,
    },
    /// Angles in degrees, swept from `start_angle` to `end_angle`.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Switch {
        start: Point,
        main_end: Point,
        alt_end: Point,
        active: bool,
    },
}

impl SegmentShape {
    /// Returns the draw description of this shape.
    #[must_use]
    pub fn outline(&self) -> Outline {
        match self {
            Self::Straight(s) => Outline::Line {
                start: s.start(),
                end: s.end(),
            },
            Self::Circular(c) => Outline::Arc {
                center: c.center(),
                radius: c.radius(),
                start_angle: c.rotation_start(),
                end_angle: c.rotation_end(),
            },
            Self::Switch(s) => Outline::Switch {
                start: s.start(),
                main_end: s.main_end(),
                alt_end: s.alt_end(),
                active: s.is_active(),
            },
        }
    }

    fn geometry(&self) -> &dyn TrackGeometry {
        match self {
            Self::Straight(s) => s,
            Self::Circular(c) => c,
            Self::Switch(s) => s,
        }
    }
}

impl TrackGeometry for SegmentShape {
    fn start(&self) -> Point {
        self.geometry().start()
    }

    fn length(&self) -> f64 {
        self.geometry().length()
    }

    fn point_from(&self, origin: Origin, distance: f64) -> Result<Point> {
        self.geometry().point_from(origin, distance)
    }

    fn connection_points(&self) -> ConnectionPoints {
        self.geometry().connection_points()
    }
}

impl From<Straight> for SegmentShape {
    fn from(s: Straight) -> Self {
        Self::Straight(s)
    }
}

impl From<Circular> for SegmentShape {
    fn from(c: Circular) -> Self {
        Self::Circular(c)
    }
}

impl From<Switch> for SegmentShape {
    fn from(s: Switch) -> Self {
        Self::Switch(s)
    }
}

/// A piece of track in a layout: a shape plus identity and display state.
#[derive(Debug, Clone)]
pub struct TrackSegment {
    id: SegmentId,
    highlighted: bool,
    shape: SegmentShape,
}

impl TrackSegment {
    /// Creates a segment with an explicit id.
    #[must_use]
    pub fn new(id: impl Into<SegmentId>, shape: impl Into<SegmentShape>) -> Self {
        Self {
            id: id.into(),
            highlighted: false,
            shape: shape.into(),
        }
    }

    /// Creates a segment whose id is drawn from `ids`.
    #[must_use]
    pub fn generated(shape: impl Into<SegmentShape>, ids: &mut impl IdGenerator) -> Self {
        Self::new(ids.next_id(), shape)
    }

    /// Creates a segment with a fresh random id.
    #[must_use]
    pub fn with_random_id(shape: impl Into<SegmentShape>) -> Self {
        Self::generated(shape, &mut RandomIds::new())
    }

    /// Returns the segment's identifier.
    #[must_use]
    pub fn id(&self) -> &SegmentId {
        &self.id
    }

    /// Returns the segment's shape.
    #[must_use]
    pub fn shape(&self) -> &SegmentShape {
        &self.shape
    }

    /// Returns the switch, if this segment is one.
    #[must_use]
    pub fn as_switch(&self) -> Option<&Switch> {
        match &self.shape {
            SegmentShape::Switch(s) => Some(s),
            SegmentShape::Straight(_) | SegmentShape::Circular(_) => None,
        }
    }

    /// Returns the switch mutably, if this segment is one.
    #[must_use]
    pub fn as_switch_mut(&mut self) -> Option<&mut Switch> {
        match &mut self.shape {
            SegmentShape::Switch(s) => Some(s),
            SegmentShape::Straight(_) | SegmentShape::Circular(_) => None,
        }
    }

    /// Returns whether the segment is highlighted.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Marks the segment as highlighted. Geometry is unaffected.
    pub fn highlight(&mut self) {
        self.highlighted = true;
    }

    /// Clears the highlight.
    pub fn remove_highlight(&mut self) {
        self.highlighted = false;
    }

    /// Stroke color of the segment body.
    #[must_use]
    pub fn color(&self) -> Color {
        match (&self.shape, self.highlighted) {
            (_, true) => TRACK_HIGHLIGHT_COLOR,
            (SegmentShape::Switch(_), false) => SWITCH_COLOR,
            (SegmentShape::Straight(_) | SegmentShape::Circular(_), false) => TRACK_COLOR,
        }
    }

    /// Returns the draw description of the segment's shape.
    #[must_use]
    pub fn outline(&self) -> Outline {
        self.shape.outline()
    }
}

impl TrackGeometry for TrackSegment {
    fn start(&self) -> Point {
        self.shape.start()
    }

    fn length(&self) -> f64 {
        self.shape.length()
    }

    fn point_from(&self, origin: Origin, distance: f64) -> Result<Point> {
        self.shape.point_from(origin, distance)
    }

    fn connection_points(&self) -> ConnectionPoints {
        self.shape.connection_points()
    }
}
