//! JSON query files: one geometry question per entry, one answer per entry.
//!
//! Input is a JSON array of objects tagged by `op`, e.g.
//! `{"op": "polygon_contains", "coords": [0,0, 10,0, 10,10], "point": {"x": 2, "y": 1}}`.
//! Polygons are given as flat coordinate lists; fill rule and flip use the
//! integer codes a renderer would send.

use anyhow::{bail, Context, Result};
use geokit::api::{fill_rule_from_code, GeomCfg};
use geokit::geom2::{
    AffineTransform, Arc, Flip, Intersections, LineSegment, Point, Polygon, Rect,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Query {
    SegmentIntersection {
        a: LineSegment,
        b: LineSegment,
    },
    SegmentRect {
        segment: LineSegment,
        rect: Rect,
    },
    RectIntersection {
        a: Rect,
        b: Rect,
    },
    RectUnion {
        a: Rect,
        b: Rect,
    },
    RectFlip {
        rect: Rect,
        reference: Rect,
        flip: i32,
    },
    PolygonContains {
        coords: Vec<f64>,
        point: Point,
        #[serde(default)]
        fill_rule: Option<i32>,
    },
    PolygonIntersections {
        a: Vec<f64>,
        b: Vec<f64>,
        #[serde(default)]
        close: bool,
    },
    PointOnPolygon {
        coords: Vec<f64>,
        distance: f64,
        #[serde(default)]
        close: bool,
    },
    ArcPoint {
        arc: ArcSpec,
        distance: f64,
    },
    Transform {
        ops: Vec<TransformOp>,
        #[serde(default)]
        points: Vec<Point>,
        #[serde(default)]
        rect: Option<Rect>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArcSpec {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    #[serde(default)]
    pub clockwise: Option<bool>,
}

/// Incremental transform steps, applied in list order.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformOp {
    Translate { dx: f64, dy: f64 },
    Scale { sx: f64, sy: Option<f64> },
    Rotate { angle: f64, pivot: Option<Point> },
    Skew { sx: f64, sy: f64 },
    Concat { coefficients: [f64; 6] },
    Invert,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Hit { intersects: bool, point: Option<Point> },
    Hits { intersects: bool, points: Vec<Point> },
    Rect { rect: Rect },
    Contains { contains: bool },
    Point { point: Point },
    Transformed {
        coefficients: [f64; 6],
        points: Vec<Point>,
        aabb: Option<Rect>,
    },
}

impl From<Intersections> for Answer {
    fn from(hits: Intersections) -> Self {
        Answer::Hits {
            intersects: hits.intersects(),
            points: hits.points,
        }
    }
}

impl Query {
    pub fn kind(&self) -> &'static str {
        match self {
            Query::SegmentIntersection { .. } => "segment_intersection",
            Query::SegmentRect { .. } => "segment_rect",
            Query::RectIntersection { .. } => "rect_intersection",
            Query::RectUnion { .. } => "rect_union",
            Query::RectFlip { .. } => "rect_flip",
            Query::PolygonContains { .. } => "polygon_contains",
            Query::PolygonIntersections { .. } => "polygon_intersections",
            Query::PointOnPolygon { .. } => "point_on_polygon",
            Query::ArcPoint { .. } => "arc_point",
            Query::Transform { .. } => "transform",
        }
    }
}

fn polygon(coords: &[f64], close: bool) -> Result<Polygon> {
    let mut p = Polygon::from_xy(coords)?;
    if close {
        p.close();
    }
    Ok(p)
}

fn apply_ops(ops: &[TransformOp]) -> Result<AffineTransform> {
    let mut t = AffineTransform::identity();
    for op in ops {
        match *op {
            TransformOp::Translate { dx, dy } => t.translate(dx, dy),
            TransformOp::Scale { sx, sy } => t.scale(sx, sy.unwrap_or(sx)),
            TransformOp::Rotate { angle, pivot } => match pivot {
                Some(p) => t.rotate_about(angle, p),
                None => t.rotate(angle),
            },
            TransformOp::Skew { sx, sy } => t.skew(sx, sy),
            TransformOp::Concat { coefficients: [a, b, c, d, tx, ty] } => {
                t.concat(&AffineTransform::new(a, b, c, d, tx, ty))
            }
            TransformOp::Invert => match t.try_inverse() {
                Some(inv) => t = inv,
                None => bail!("cannot invert singular transform {:?}", t.coefficients()),
            },
            TransformOp::Reset => t.reset(),
        }
    }
    Ok(t)
}

/// Evaluates one query.
pub fn answer(query: &Query, cfg: &GeomCfg) -> Result<Answer> {
    let out = match query {
        Query::SegmentIntersection { a, b } => {
            let point = a.intersects_line_segment(b);
            Answer::Hit {
                intersects: point.is_some(),
                point,
            }
        }
        Query::SegmentRect { segment, rect } => segment.intersects_rect_cfg(rect, cfg).into(),
        Query::RectIntersection { a, b } => Answer::Rect {
            rect: a.intersection(b),
        },
        Query::RectUnion { a, b } => Answer::Rect { rect: a.union(b) },
        Query::RectFlip {
            rect,
            reference,
            flip,
        } => Answer::Rect {
            rect: rect.flipped_relative_to_rect(reference, Flip::try_from(*flip)?),
        },
        Query::PolygonContains {
            coords,
            point,
            fill_rule,
        } => {
            let rule = fill_rule_from_code(*fill_rule)?;
            Answer::Contains {
                contains: polygon(coords, false)?.contains_point_with_rule(*point, rule),
            }
        }
        Query::PolygonIntersections { a, b, close } => polygon(a, *close)?
            .intersects_polygon_cfg(&polygon(b, *close)?, cfg)
            .into(),
        Query::PointOnPolygon {
            coords,
            distance,
            close,
        } => Answer::Point {
            point: polygon(coords, *close)?.point_on_polygon(*distance),
        },
        Query::ArcPoint { arc, distance } => {
            let arc = Arc::new(
                arc.x,
                arc.y,
                arc.radius,
                arc.start_angle,
                arc.end_angle,
                arc.clockwise,
            );
            Answer::Point {
                point: arc.point_on_arc(*distance),
            }
        }
        Query::Transform { ops, points, rect } => {
            let t = apply_ops(ops)?;
            Answer::Transformed {
                coefficients: t.coefficients(),
                points: points.iter().map(|p| t.transformed_point(*p)).collect(),
                aabb: rect.map(|r| t.transformed_aabb(r)),
            }
        }
    };
    Ok(out)
}

pub fn parse(text: &str) -> Result<Vec<Query>> {
    serde_json::from_str(text).context("parsing query list")
}

/// Reads a query file and answers every entry in order.
pub fn run_file(path: &Path, cfg: &GeomCfg) -> Result<Vec<Answer>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let queries = parse(&text)?;
    tracing::info!(count = queries.len(), path = %path.display(), "queries loaded");
    queries
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let a = answer(q, cfg).with_context(|| format!("query #{i} ({})", q.kind()))?;
            tracing::debug!(index = i, kind = q.kind(), answer = ?a, "answered");
            Ok(a)
        })
        .collect()
}
