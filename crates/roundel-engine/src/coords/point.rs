use core::ops::{Add, Mul, Sub};

use bytemuck::{Pod, Zeroable};

/// 2D point in path space.
///
/// `#[repr(C)]` so a vertex loop can be viewed as a flat `[x0, y0, x1, y1, ..]`
/// slice through `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let d = self - other;
        d.x.hypot(d.y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn offsets_compose_with_add_and_scale() {
        let corner = Point::new(1.0, 4.0);
        let center = corner + Point::new(1.0, -1.0) * 0.5;
        assert_eq!(center, Point::new(1.5, 3.5));
        assert_eq!(center - corner, Point::new(0.5, -0.5));
    }

    #[test]
    fn vertex_slice_casts_to_flat_coordinates() {
        let pts = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        let flat: &[f64] = bytemuck::cast_slice(&pts);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0]);
    }
}
