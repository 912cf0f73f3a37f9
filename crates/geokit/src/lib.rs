//! Planar geometry for per-frame game logic.
//!
//! Points, vectors, sizes, line segments, rects, polygons, arcs and affine
//! transforms, with the intersection and containment tests that operate
//! across them. Everything is a pure computation over caller-owned values.
//!
//! API Policy
//! - `geom2` is the full surface; `api` and `prelude` are curated re-exports.
//! - Integer encodings (fill rule, flip) exist only at the boundary via
//!   `TryFrom<i32>`; internally they are enums.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{AffineTransform, GeomCfg, GeomError};
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_polygon_radial, draw_star_polygon, sample_points, RadialCfg, ReplayToken,
        VertexCount,
    };
    pub use crate::geom2::{
        distance_to_point, squared_distance_to_point, AffineTransform, Arc, FillRule, Flip,
        GeomCfg, GeomError, Intersections, LineSegment, Point, Polygon, Rect, Size, Vector2D,
    };
}
