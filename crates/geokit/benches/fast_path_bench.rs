//! Scalar fast paths against their value-returning counterparts.
//!
//! Both forms compute the same numbers; this tracks the cost of building the
//! intermediate values in tight loops.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geokit::geom2::{rect, segment, AffineTransform, LineSegment, Point, Rect};

fn bench_rects(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect");
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    group.bench_function("intersection_value", |bch| {
        bch.iter(|| black_box(a).intersection(&black_box(b)))
    });
    group.bench_function("intersection_fast", |bch| {
        bch.iter(|| {
            rect::fast_intersection(
                black_box(0.0),
                0.0,
                10.0,
                10.0,
                black_box(5.0),
                5.0,
                10.0,
                10.0,
            )
        })
    });
    group.bench_function("union_value", |bch| {
        bch.iter(|| black_box(a).union(&black_box(b)))
    });
    group.bench_function("union_fast", |bch| {
        bch.iter(|| {
            rect::fast_union(black_box(0.0), 0.0, 10.0, 10.0, black_box(5.0), 5.0, 10.0, 10.0)
        })
    });
    group.finish();
}

fn bench_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");
    let s = LineSegment::new(0.0, 0.0, 10.0, 10.0);
    let t = LineSegment::new(0.0, 10.0, 10.0, 0.0);
    group.bench_function("intersection_value", |bch| {
        bch.iter(|| black_box(s).intersects_line_segment(&black_box(t)))
    });
    group.bench_function("intersection_fast", |bch| {
        bch.iter(|| {
            segment::fast_intersection(
                black_box(0.0),
                0.0,
                10.0,
                10.0,
                black_box(0.0),
                10.0,
                10.0,
                0.0,
            )
        })
    });
    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("affine");
    let t = AffineTransform::identity()
        .rotated_by(30.0)
        .scaled_by(2.0, 2.0)
        .translated_by(5.0, 5.0);
    group.bench_function("transformed_point", |bch| {
        bch.iter(|| t.transformed_point(black_box(Point::new(3.0, 4.0))))
    });
    group.bench_function("transform_xy", |bch| {
        bch.iter(|| t.transform_xy(black_box(3.0), black_box(4.0)))
    });
    group.finish();
}

criterion_group!(benches, bench_rects, bench_segments, bench_transform);
criterion_main!(benches);
