//! Organic shape generation - the blobby territory outlines around nodes.

use map_graph::Point;

use super::rng::seeded_unit;

/// Seed stride separating per-vertex angle draws.
pub const ANGLE_SEED_STRIDE: u64 = 100;

/// Seed stride separating per-vertex radius draws.
pub const RADIUS_SEED_STRIDE: u64 = 200;

/// Generate the vertices of an organic polygon around `center`.
///
/// Walks `sides` equal angle steps around the circle and perturbs each
/// vertex twice: the angle by a centered draw scaled by `randomness`
/// (radians), and the radius multiplicatively by an independent centered
/// draw. The two streams use different seed strides so angle and radius
/// wobble do not correlate.
///
/// Always returns exactly `sides` points. `randomness = 0` yields a perfect
/// regular polygon. Degenerate parameters (`sides < 3`, negative radius) are
/// not rejected; the output is degenerate but well-defined.
pub fn organic_shape(
    center: Point,
    base_radius: f32,
    sides: u32,
    randomness: f32,
    seed: u64,
) -> Vec<Point> {
    let mut points = Vec::with_capacity(sides as usize);
    if sides == 0 {
        return points;
    }

    let step = std::f32::consts::TAU / sides as f32;
    for i in 0..sides as u64 {
        let angle_draw = seeded_unit(seed.wrapping_add(i.wrapping_mul(ANGLE_SEED_STRIDE)));
        let radius_draw = seeded_unit(seed.wrapping_add(i.wrapping_mul(RADIUS_SEED_STRIDE)));

        let angle = i as f32 * step + (angle_draw - 0.5) * randomness;
        let radius = base_radius * (1.0 + (radius_draw - 0.5) * randomness);

        points.push(Point::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        ));
    }
    points
}
