use thiserror::Error;

use crate::segment::SegmentId;

/// Top-level error type for track layouts.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to segment geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("distance {distance} is out of range [0, {length}]")]
    DistanceOutOfRange { distance: f64, length: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),
}

/// Errors related to the segment collection of a layout.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("segment not found: {0}")]
    SegmentNotFound(SegmentId),

    #[error("duplicate segment id: {0}")]
    DuplicateId(SegmentId),
}

/// Errors related to sampling segments into polylines.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`TrackError`].
pub type Result<T> = std::result::Result<T, TrackError>;
