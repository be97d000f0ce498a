//! 3D polyline geometry used by extraction and relaxation.
//!
//! Purpose
//! - `PolygonalCurve`: closed polyline with wrapped indexing (the last vertex
//!   connects back to the first).
//! - `Segment`: line segment with a clamped closest-point query, used by the
//!   relaxation collision guard.
//! - `Bounds3`: axis-aligned bounds for framing a curve.
//!
//! Code cross-refs: `extract::extract`, `relax::RelaxationEngine`.

mod curve;
mod segment;

pub use curve::{Bounds3, PolygonalCurve};
pub use segment::Segment;

/// Point/vector type used throughout the crate.
pub type Vec3 = nalgebra::Vector3<f64>;

/// Relative tolerance for the degenerate and parallel tests in
/// `Segment::closest_params`.
pub(crate) const SMALL_NUM: f64 = 1e-12;
