//! Recoverable argument errors at the API boundary.
//!
//! Geometric edge cases (parallel segments, empty rects, zero vectors) are
//! defined values and never reach this type. Programming errors (vertex index
//! out of range, inverting a singular transform) panic instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    #[error("Unknown fill rule code {0} (expected 0 = non-zero or 1 = even-odd)")]
    InvalidFillRule(i32),
    #[error("Unknown flip code {0} (expected 0..=3)")]
    InvalidFlip(i32),
    #[error("Odd number of polygon coordinates: {0}")]
    OddCoordinateCount(usize),
    #[error("A polygon needs at least one vertex")]
    EmptyPolygon,
}
