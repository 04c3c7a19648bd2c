use crate::error::{GeometryError, Result};
use crate::math::{Point, TOLERANCE};
use crate::style::{Color, SWITCH_ACTIVE_COLOR, SWITCH_COLOR};

use super::{fraction_along, ConnectionPoints, ConnectionRole, Origin, TrackGeometry};

/// One of the two exits of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Live while the switch is inactive.
    Main,
    /// Live while the switch is active.
    Alt,
}

/// A set of points with a main and an alternative branch.
///
/// `active == false` routes traffic onto the main branch, `active == true`
/// onto the alternative one. Length and walks are always derived from the
/// current state, so a toggle takes effect on the next query.
#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    start: Point,
    main_end: Point,
    alt_end: Point,
    active: bool,
}

impl Switch {
    /// Creates a switch set to its main branch.
    ///
    /// # Errors
    ///
    /// Returns an error if either branch has no length or both branches end
    /// at the same point.
    pub fn new(start: Point, main_end: Point, alt_end: Point) -> Result<Self> {
        for (name, end) in [("main", main_end), ("alternative", alt_end)] {
            let length = start.distance_to(end);
            if !length.is_finite() || length <= TOLERANCE {
                return Err(GeometryError::Degenerate(format!(
                    "{name} branch of switch at {start} has no length"
                ))
                .into());
            }
        }
        if main_end.distance_to(alt_end) <= TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "switch branches both end at {main_end}"
            ))
            .into());
        }
        Ok(Self {
            start,
            main_end,
            alt_end,
            active: false,
        })
    }

    /// Returns the exit of the main branch.
    #[must_use]
    pub fn main_end(&self) -> Point {
        self.main_end
    }

    /// Returns the exit of the alternative branch.
    #[must_use]
    pub fn alt_end(&self) -> Point {
        self.alt_end
    }

    /// Returns whether the alternative branch is live.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Selects the alternative branch when `active`, else the main one.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Flips between the main and the alternative branch.
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    /// The branch currently carrying traffic.
    #[must_use]
    pub fn live_branch(&self) -> Branch {
        if self.active {
            Branch::Alt
        } else {
            Branch::Main
        }
    }

    /// Returns the exit endpoint of `branch`.
    #[must_use]
    pub fn branch_end(&self, branch: Branch) -> Point {
        match branch {
            Branch::Main => self.main_end,
            Branch::Alt => self.alt_end,
        }
    }

    /// Exit endpoint of the live branch.
    #[must_use]
    pub fn live_end(&self) -> Point {
        self.branch_end(self.live_branch())
    }

    /// Display color of `branch`; the live branch is emphasized.
    #[must_use]
    pub fn branch_color(&self, branch: Branch) -> Color {
        if branch == self.live_branch() {
            SWITCH_ACTIVE_COLOR
        } else {
            SWITCH_COLOR
        }
    }
}

impl TrackGeometry for Switch {
    fn start(&self) -> Point {
        self.start
    }

    fn length(&self) -> f64 {
        self.start.distance_to(self.live_end())
    }

    fn point_from(&self, origin: Origin, distance: f64) -> Result<Point> {
        let end = self.live_end();
        let t = fraction_along(distance, self.length())?;
        Ok(match origin {
            Origin::Start => self.start.lerp(end, t),
            Origin::End => end.lerp(self.start, t),
        })
    }

    fn connection_points(&self) -> ConnectionPoints {
        ConnectionPoints::from([
            (ConnectionRole::Start, self.start),
            (ConnectionRole::MainEnd, self.main_end),
            (ConnectionRole::AltEnd, self.alt_end),
        ])
    }
}
