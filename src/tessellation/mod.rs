mod tessellate_segment;

pub use tessellate_segment::TessellateSegment;

use crate::error::{Result, TessellationError};
use crate::math::Point;

/// Parameters controlling how densely segments are sampled.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Target distance between consecutive samples, in layout units.
    pub spacing: f64,
    /// Minimum number of polyline segments per track segment.
    pub min_segments: u32,
    /// Maximum number of polyline segments per track segment.
    pub max_segments: u32,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            spacing: 2.0,
            min_segments: 1,
            max_segments: 256,
        }
    }
}

impl TessellationParams {
    /// Checks that the parameters describe a usable sampling.
    ///
    /// # Errors
    ///
    /// Returns an error if `spacing` is not a positive finite number, or the
    /// segment bounds are empty or inverted.
    pub fn validate(&self) -> Result<()> {
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(TessellationError::InvalidParameters(format!(
                "spacing must be positive, got {}",
                self.spacing
            ))
            .into());
        }
        if self.min_segments == 0 || self.min_segments > self.max_segments {
            return Err(TessellationError::InvalidParameters(format!(
                "segment bounds [{}, {}] are empty",
                self.min_segments, self.max_segments
            ))
            .into());
        }
        Ok(())
    }
}

/// A polyline approximation of a track segment.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point>,
}

impl Polyline {
    /// Sum of the chord lengths between consecutive points.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .sum()
    }
}
