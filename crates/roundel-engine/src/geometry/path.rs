use crate::coords::{Point, Rect};

/// Fill rule handed to the paint step alongside a path.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FillRule {
    #[default]
    EvenOdd,
    NonZero,
}

/// Closed vertex loop in path space.
///
/// The edge from the last vertex back to the first is implicit; the first vertex
/// is not repeated at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    vertices: Vec<Point>,
    fill_rule: FillRule,
}

impl Path {
    #[inline]
    pub fn new(vertices: Vec<Point>, fill_rule: FillRule) -> Self {
        Self { vertices, fill_rule }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// Vertices as `[x0, y0, x1, y1, ..]`.
    #[inline]
    pub fn as_flat(&self) -> &[f64] {
        bytemuck::cast_slice(&self.vertices)
    }

    #[inline]
    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Length of the implicit closing edge (last vertex to first).
    pub fn closing_gap(&self) -> f64 {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(&first), Some(&last)) => last.distance(first),
            _ => 0.0,
        }
    }

    /// Every edge of the loop, the closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace area. Positive for counter-clockwise loops in the y-up frame.
    pub fn signed_area(&self) -> f64 {
        0.5 * self.edges().map(|(a, b)| a.x * b.y - b.x * a.y).sum::<f64>()
    }

    /// Axis-aligned bounds, or `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        let first = *self.vertices.first()?;
        let (min, max) = self.vertices.iter().fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Some(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }
}
