use core::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::coords::{Corner, CornerRadii, Point, Rect};

use super::arc::extend_arc;
use super::path::{FillRule, Path};

/// One row of the corner table.
///
/// `inset` signs point from the rectangle corner towards the arc center:
/// `+x` means the corner sits on the left edge, `+y` means it sits on the bottom edge.
struct CornerArc {
    corner: Corner,
    start_angle: f64,
    end_angle: f64,
    inset: Point,
}

/// Corners in emission order. Angles increase monotonically around the loop, so
/// consecutive arcs meet through the left, bottom and right edges, and the top
/// edge closes the loop.
const CORNER_ARCS: [CornerArc; 4] = [
    CornerArc { corner: Corner::TopLeft, start_angle: FRAC_PI_2, end_angle: PI, inset: Point::new(1.0, -1.0) },
    CornerArc { corner: Corner::BottomLeft, start_angle: PI, end_angle: PI + FRAC_PI_2, inset: Point::new(1.0, 1.0) },
    CornerArc { corner: Corner::BottomRight, start_angle: PI + FRAC_PI_2, end_angle: TAU, inset: Point::new(-1.0, 1.0) },
    CornerArc { corner: Corner::TopRight, start_angle: 0.0, end_angle: FRAC_PI_2, inset: Point::new(-1.0, -1.0) },
];

impl CornerArc {
    #[inline]
    fn corner_point(&self, rect: Rect) -> Point {
        let x = if self.inset.x > 0.0 { rect.left() } else { rect.right() };
        let y = if self.inset.y > 0.0 { rect.bottom() } else { rect.top() };
        Point::new(x, y)
    }

    #[inline]
    fn center(&self, rect: Rect, r: f64) -> Point {
        self.corner_point(rect) + self.inset * r
    }
}

/// Number of vertices [`build_path`] emits for `radii`.
///
/// A rounded corner contributes `arc_points` samples, a sharp one a single vertex.
pub fn vertex_count(radii: CornerRadii, arc_points: usize) -> usize {
    let n = arc_points.max(super::arc::MIN_ARC_POINTS);
    radii.to_array().iter().map(|&r| if r > 0.0 { n } else { 1 }).sum()
}

/// Builds the closed outline of `rect` with the given corner radii.
///
/// `radii` must already be feasible for `rect` (see [`super::correct`]). The loop
/// starts where the top edge meets the top-left arc and walks top-left, bottom-left,
/// bottom-right, top-right. Straight edges are the implicit segments between
/// consecutive arcs; the top edge is the closing segment.
pub fn build_path(rect: Rect, radii: CornerRadii, arc_points: usize) -> Path {
    let mut vertices = Vec::with_capacity(vertex_count(radii, arc_points));

    for arc in &CORNER_ARCS {
        let r = radii.get(arc.corner);
        if r > 0.0 {
            extend_arc(&mut vertices, arc.center(rect, r), r, arc.start_angle, arc.end_angle, arc_points);
        } else {
            vertices.push(arc.corner_point(rect));
        }
    }

    Path::new(vertices, FillRule::EvenOdd)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::geometry::correct::correct;

    const EPS: f64 = 1e-9;

    // ── vertex layout ─────────────────────────────────────────────────────

    #[test]
    fn all_rounded_corners_emit_four_arcs() {
        let path = build_path(Rect::new(0.0, 0.0, 2.0, 1.0), CornerRadii::all(0.3), 8);
        assert_eq!(path.len(), 32);
        assert_eq!(path.fill_rule(), FillRule::EvenOdd);
    }

    #[test]
    fn sharp_corners_reduce_to_plain_rectangle() {
        let path = build_path(Rect::new(1.0, 2.0, 3.0, 4.0), CornerRadii::zero(), 16);
        assert_eq!(
            path.vertices(),
            &[
                Point::new(1.0, 6.0),
                Point::new(1.0, 2.0),
                Point::new(4.0, 2.0),
                Point::new(4.0, 6.0),
            ]
        );
    }

    #[test]
    fn mixed_corners_count_one_vertex_per_sharp_corner() {
        let radii = CornerRadii::new(0.2, 0.0, 0.2, 0.0);
        let path = build_path(Rect::new(0.0, 0.0, 1.0, 1.0), radii, 5);
        assert_eq!(path.len(), 12);
        assert_eq!(vertex_count(radii, 5), 12);
        // Top-right corner is sharp and therefore the last vertex.
        assert_eq!(*path.vertices().last().unwrap(), Point::new(1.0, 1.0));
    }

    #[test]
    fn loop_starts_and_ends_on_the_top_edge() {
        let rect = Rect::new(0.0, 0.0, 4.0, 2.0);
        let radii = CornerRadii::new(0.5, 0.25, 0.75, 1.0);
        let path = build_path(rect, radii, 6);
        let first = path.vertices()[0];
        let last = *path.vertices().last().unwrap();

        assert_abs_diff_eq!(first.x, 0.5, epsilon = EPS);
        assert_abs_diff_eq!(first.y, 2.0, epsilon = EPS);
        assert_abs_diff_eq!(last.x, 3.75, epsilon = EPS);
        assert_abs_diff_eq!(last.y, 2.0, epsilon = EPS);
        // The closing edge is the straight part of the top side.
        assert_abs_diff_eq!(path.closing_gap(), 4.0 - 0.5 - 0.25, epsilon = EPS);
    }

    #[test]
    fn consecutive_arcs_meet_along_straight_edges() {
        let rect = Rect::new(-1.0, -1.0, 2.0, 2.0);
        let n = 4;
        let path = build_path(rect, CornerRadii::all(0.5), n);
        let v = path.vertices();
        // End of top-left arc and start of bottom-left arc share the left edge.
        assert_abs_diff_eq!(v[n - 1].x, -1.0, epsilon = EPS);
        assert_abs_diff_eq!(v[n].x, -1.0, epsilon = EPS);
        // Bottom-left to bottom-right runs along the bottom edge.
        assert_abs_diff_eq!(v[2 * n - 1].y, -1.0, epsilon = EPS);
        assert_abs_diff_eq!(v[2 * n].y, -1.0, epsilon = EPS);
        // Bottom-right to top-right runs along the right edge.
        assert_abs_diff_eq!(v[3 * n - 1].x, 1.0, epsilon = EPS);
        assert_abs_diff_eq!(v[3 * n].x, 1.0, epsilon = EPS);
    }

    #[test]
    fn arc_centers_sit_radius_inside_each_corner() {
        let rect = Rect::new(0.0, 0.0, 4.0, 2.0);
        let centers: Vec<_> = CORNER_ARCS.iter().map(|arc| arc.center(rect, 0.5)).collect();
        assert_eq!(
            centers,
            [Point::new(0.5, 1.5), Point::new(0.5, 0.5), Point::new(3.5, 0.5), Point::new(3.5, 1.5)]
        );
    }

    // ── shape ─────────────────────────────────────────────────────────────

    #[test]
    fn loop_is_counter_clockwise_in_path_space() {
        let path = build_path(Rect::new(0.0, 0.0, 3.0, 1.0), CornerRadii::all(0.4), 12);
        assert!(path.signed_area() > 0.0);
    }

    #[test]
    fn area_approaches_closed_form() {
        let (w, h, r) = (3.0, 2.0, 0.5);
        let path = build_path(Rect::new(0.0, 0.0, w, h), CornerRadii::all(r), 256);
        let exact = w * h - (4.0 - PI) * r * r;
        assert_abs_diff_eq!(path.signed_area(), exact, epsilon = 1e-4);
    }

    #[test]
    fn fully_rounded_square_is_a_circle() {
        let path = build_path(Rect::new(0.0, 0.0, 2.0, 2.0), CornerRadii::all(1.0), 9);
        let center = Point::new(1.0, 1.0);
        for p in path.vertices() {
            assert_abs_diff_eq!(p.distance(center), 1.0, epsilon = EPS);
        }
    }

    // ── properties ────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn corrected_paths_stay_inside_and_touch_every_edge(
            x in -10.0f64..10.0,
            y in -10.0f64..10.0,
            w in 0.1f64..20.0,
            h in 0.1f64..20.0,
            r in (0.0f64..15.0, 0.0f64..15.0, 0.0f64..15.0, 0.0f64..15.0),
            n in 2usize..24,
        ) {
            let rect = Rect::new(x, y, w, h);
            let radii = correct(w, h, CornerRadii::new(r.0, r.1, r.2, r.3));
            let path = build_path(rect, radii, n);

            prop_assert_eq!(path.len(), vertex_count(radii, n));
            let b = path.bounds().unwrap();
            prop_assert!((b.left() - rect.left()).abs() < EPS);
            prop_assert!((b.right() - rect.right()).abs() < EPS);
            prop_assert!((b.bottom() - rect.bottom()).abs() < EPS);
            prop_assert!((b.top() - rect.top()).abs() < EPS);
        }
    }
}
