//! Seeded random polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic shape sources for property tests, benchmarks and the demo
//!   frame loop. Every draw is reproducible from a `ReplayToken`.
//!
//! Model
//! - `draw_polygon_radial`: `n` angles equally spaced around the circle, each
//!   jittered by less than half the spacing, radii jittered around
//!   `base_radius`. Angles stay strictly increasing, so the closed ring is a
//!   simple star-shaped polygon around its center.
//! - `draw_star_polygon`: the same vertices visited with a stride `k > 1`
//!   coprime to `n`, which makes the ring self-intersecting.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::arc::point_at_angle;
use super::polygon::Polygon;
use super::rect::Rect;
use super::types::Point;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing 360°/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Vector2<f64>,
    /// Random global phase in [0°, 360°)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 100.0,
            center: Vector2::zeros(),
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn radial_vertices(cfg: &RadialCfg, rng: &mut StdRng) -> Vec<Point> {
    let n = cfg.vertex_count.sample(rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 360.0 / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 360.0
    } else {
        0.0
    };
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let angle = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            point_at_angle(cfg.center.x, cfg.center.y, r, angle)
        })
        .collect()
}

/// Draw a simple, closed, star-shaped polygon around `cfg.center`.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    Polygon::new(radial_vertices(&cfg, &mut rng)).closed()
}

/// Draw a closed, self-intersecting polygon by visiting radial vertices with
/// stride `step`.
///
/// Returns `None` unless `1 < step < n - 1` and `gcd(n, step) == 1`.
pub fn draw_star_polygon(cfg: RadialCfg, step: usize, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let ring = radial_vertices(&cfg, &mut rng);
    let n = ring.len();
    if step <= 1 || step + 1 >= n || gcd(n, step) != 1 {
        return None;
    }
    let verts = (0..n).map(|k| ring[(k * step) % n]).collect();
    Some(Polygon::new(verts).closed())
}

/// `count` points uniformly inside `bounds` (canonicalized).
pub fn sample_points(bounds: Rect, count: usize, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let b = bounds.standardized();
    (0..count)
        .map(|_| {
            Point::new(
                b.x + rng.gen::<f64>() * b.width,
                b.y + rng.gen::<f64>() * b.height,
            )
        })
        .collect()
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
