use super::{Anchor, Point, Size};

/// Axis-aligned rectangle in path space (bottom-left origin, +Y up).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    /// Bottom-left corner.
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    /// Resolves the rectangle whose `anchor` point sits at `position`.
    #[inline]
    pub fn from_anchor(position: Point, size: Size, anchor: Anchor) -> Self {
        let (fx, fy) = anchor.fractions();
        let origin = Point::new(position.x - fx * size.width, position.y - fy * size.height);
        Self { origin, size }
    }

    #[inline]
    pub fn left(self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn right(self) -> f64 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn bottom(self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn top(self) -> f64 {
        self.origin.y + self.size.height
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.size.width
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.size.height
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new(
            self.origin.x + self.size.width * 0.5,
            self.origin.y + self.size.height * 0.5,
        )
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.width;
        let mut h = self.size.height;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }
}
