use crate::coords::Point;

/// Fewest samples an arc can have: its two endpoints.
pub const MIN_ARC_POINTS: usize = 2;

/// Samples a circular arc into `n_points` points, both endpoints included.
///
/// Angles are in radians, measured counter-clockwise from +X in the y-up path
/// frame. Traversal follows the sign of `end_angle - start_angle`. A zero radius
/// yields `n_points` copies of `center`. `n_points` below two is raised to two.
pub fn sample_arc(center: Point, radius: f64, start_angle: f64, end_angle: f64, n_points: usize) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_points.max(MIN_ARC_POINTS));
    extend_arc(&mut out, center, radius, start_angle, end_angle, n_points);
    out
}

/// Appends the samples of [`sample_arc`] to `out`.
pub fn extend_arc(
    out: &mut Vec<Point>,
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    n_points: usize,
) {
    let n = n_points.max(MIN_ARC_POINTS);
    let step = (end_angle - start_angle) / (n - 1) as f64;

    out.reserve(n);
    out.extend((0..n).map(|i| {
        // Pin the last sample to `end_angle` exactly rather than accumulating steps.
        let theta = if i == n - 1 { end_angle } else { start_angle + step * i as f64 };
        let (sin, cos) = theta.sin_cos();
        center + Point::new(cos, sin) * radius
    }));
}
