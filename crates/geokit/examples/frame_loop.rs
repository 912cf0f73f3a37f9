//! Simulated per-frame loop: a spinning paddle polygon sweeps an arena of
//! rect blocks while a ball walks along an arc.
//!
//! Usage:
//!   cargo run -p geokit --example frame_loop -- [frames]
//!
//! Prints one line per frame with the blocks hit and the ball position.

use geokit::prelude::*;

fn main() {
    let frames: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(12);

    let paddle = Rect::new(-40.0, -5.0, 80.0, 10.0).to_polygon();
    let arena_center = Point::new(200.0, 120.0);
    let blocks: Vec<Rect> = (0..8)
        .map(|k| {
            let angle = k as f64 * 45.0;
            let arc = Arc::new(arena_center.x, arena_center.y, 60.0, angle, angle, Some(true));
            let c = arc.point_on_arc(0.0);
            Rect::new(c.x - 6.0, c.y - 6.0, 12.0, 12.0)
        })
        .collect();
    let orbit = Arc::new(arena_center.x, arena_center.y, 90.0, 0.0, 360.0, None);

    for frame in 0..frames {
        let spin = AffineTransform::identity()
            .rotated_by(frame as f64 * 15.0)
            .translated_by(arena_center.x, arena_center.y);
        let moved = spin.transformed_polygon(&paddle);

        let hit: Vec<usize> = blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| {
                moved.intersects_rect(b).intersects() || moved.contains_point(b.center_point())
            })
            .map(|(i, _)| i)
            .collect();

        let ball = orbit.point_on_arc(orbit.length() * frame as f64 / frames as f64);
        println!(
            "frame {frame:>3}: paddle aabb {:?} hits {:?} ball ({:.1}, {:.1})",
            moved.bounds(),
            hit,
            ball.x,
            ball.y
        );
    }
}
