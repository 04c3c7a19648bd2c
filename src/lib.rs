pub mod error;
pub mod math;
pub mod network;
pub mod segment;
pub mod style;
pub mod tessellation;

pub use error::{Result, TrackError};
pub use math::{Point, CONNECTION_TOLERANCE};
pub use network::{SegmentKey, TrackNetwork};
pub use segment::{Circular, SegmentId, SegmentShape, Straight, Switch, TrackGeometry, TrackSegment};
