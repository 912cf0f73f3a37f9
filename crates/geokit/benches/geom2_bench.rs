//! Criterion benchmarks for polygon containment and edge intersection.
//! Focus sizes: n in {8, 32, 128} vertices.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geokit::geom2::rand::{draw_polygon_radial, sample_points, RadialCfg, ReplayToken, VertexCount};
use geokit::geom2::{AffineTransform, FillRule};

fn cfg(n: usize) -> RadialCfg {
    RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    }
}

fn bench_polygons(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[8usize, 32, 128] {
        let poly = draw_polygon_radial(cfg(n), ReplayToken::new(43, n as u64));
        let probes = sample_points(poly.bounds_rect(), 256, ReplayToken::new(44, n as u64));

        for rule in [FillRule::EvenOdd, FillRule::NonZero] {
            group.bench_with_input(
                BenchmarkId::new(format!("contains_{rule:?}"), n),
                &n,
                |b, _| {
                    b.iter(|| {
                        probes
                            .iter()
                            .filter(|p| poly.contains_point_with_rule(**p, rule))
                            .count()
                    })
                },
            );
        }

        let other = AffineTransform::rotation_about(17.0, poly.point_at(0)).transformed_polygon(&poly);
        group.bench_with_input(BenchmarkId::new("intersects_polygon", n), &n, |b, _| {
            b.iter(|| poly.intersects_polygon(&other).len())
        });
        group.bench_with_input(BenchmarkId::new("intersects_bool", n), &n, |b, _| {
            b.iter(|| poly.intersects(&other))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polygons);
criterion_main!(benches);
