//! Curated flat API for embedding callers (frame callbacks, renderers,
//! collision layers).
//!
//! Everything here is re-exported from `geom2`; the scalar fast paths are
//! renamed so they can sit side by side.

pub use crate::geom2::{
    distance_to_point, squared_distance_to_point, AffineTransform, Arc, FillRule, Flip, GeomCfg,
    GeomError, Intersections, LineSegment, Point, Polygon, Rect, Size, Vector2D,
};
pub use crate::geom2::rect::{
    fast_intersection as rect_fast_intersection, fast_union as rect_fast_union,
};
pub use crate::geom2::segment::fast_intersection as segment_fast_intersection;

/// Decodes a fill-rule code from an external renderer.
///
/// `None` selects the default even-odd rule; unknown codes are rejected.
pub fn fill_rule_from_code(code: Option<i32>) -> Result<FillRule, GeomError> {
    code.map_or(Ok(FillRule::default()), FillRule::try_from)
}
