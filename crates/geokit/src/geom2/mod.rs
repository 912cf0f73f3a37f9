//! 2D geometry core: value types, shapes, affine transforms and the shared
//! intersection/containment engine.
//!
//! Purpose
//! - Small, copyable value types (`Point`, `Vector2D`, `Size`, `LineSegment`,
//!   `Rect`, `Arc`, `AffineTransform`) plus the owned `Polygon`.
//! - Deterministic, allocation-light predicates meant to be called from a
//!   per-frame update loop.
//!
//! API shape
//! - Mutating/value pairs: `offset`/`offset_by`, `normalize`/`normalized`,
//!   `transform_point`/`transformed_point`, and so on.
//! - Scalar fast paths (`segment::fast_intersection`, `rect::fast_intersection`,
//!   `rect::fast_union`, `AffineTransform::transform_xy`) compute exactly what
//!   the value forms compute, on raw `f64`s.
//! - Angles are degrees; 0° is up and positive is clockwise (y grows downward).
//!
//! Code cross-refs: `predicates` (engine), `GeomCfg` (tolerances), `GeomError`

pub mod affine;
pub mod arc;
mod error;
pub mod polygon;
pub mod predicates;
pub mod rand;
pub mod rect;
pub mod segment;
mod types;

pub use affine::AffineTransform;
pub use arc::Arc;
pub use error::GeomError;
pub use polygon::Polygon;
pub use predicates::{FillRule, Intersections};
pub use rect::{Flip, Rect};
pub use segment::LineSegment;
pub use types::{distance_to_point, squared_distance_to_point, GeomCfg, Point, Size, Vector2D};
