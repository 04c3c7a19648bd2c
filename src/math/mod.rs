pub mod arc;
mod point;

pub use point::Point;

/// 2D point type used for vector arithmetic.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Maximum distance between a query point and a segment's start endpoint for
/// the query to be treated as starting there.
///
/// This is an absolute threshold in layout units, so it misclassifies on
/// layouts drawn at very small scales. Callers that know which end they start
/// from should use an explicit [`Origin`](crate::segment::Origin) instead.
pub const CONNECTION_TOLERANCE: f64 = 1.0;
