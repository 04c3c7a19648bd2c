use std::collections::BTreeMap;
use std::fmt;

use crate::math::{Point, CONNECTION_TOLERANCE};

/// Named endpoint of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConnectionRole {
    /// Entry endpoint shared by every segment kind.
    Start,
    /// Exit endpoint of straight and circular segments.
    End,
    /// Exit of a switch's main branch.
    MainEnd,
    /// Exit of a switch's alternative branch.
    AltEnd,
}

impl ConnectionRole {
    /// Stable lowercase name of the role.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::MainEnd => "main_end",
            Self::AltEnd => "alt_end",
        }
    }
}

impl fmt::Display for ConnectionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Endpoints of a segment keyed by role, iterated in role order.
pub type ConnectionPoints = BTreeMap<ConnectionRole, Point>;

/// Endpoint a walk along a segment starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Walk from the segment's start towards its (live) end.
    Start,
    /// Walk from the segment's (live) end back towards its start.
    End,
}

impl Origin {
    /// Classifies `point` as the start endpoint when it lies within
    /// [`CONNECTION_TOLERANCE`] of `start`, otherwise as the opposite end.
    #[must_use]
    pub fn nearest(point: Point, start: Point) -> Self {
        if point.distance_to(start) < CONNECTION_TOLERANCE {
            Self::Start
        } else {
            Self::End
        }
    }

    /// Returns the other endpoint.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}
