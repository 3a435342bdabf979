use crate::error::{Error, Result};

/// One of the four rectangle corners, clockwise from top-left.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// Per-corner radii for a rounded rectangle (path units).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// Negative values are treated as zero by the radius corrector.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f64) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub const fn get(self, corner: Corner) -> f64 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    /// `[top_left, top_right, bottom_right, bottom_left]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }

    /// Multiplies every radius by `s`.
    #[inline]
    pub fn scaled(self, s: f64) -> Self {
        Self::new(
            self.top_left * s,
            self.top_right * s,
            self.bottom_right * s,
            self.bottom_left * s,
        )
    }

    /// Replaces negative (and NaN) radii with zero.
    #[inline]
    pub fn non_negative(self) -> Self {
        let clamp = |r: f64| if r > 0.0 { r } else { 0.0 };
        Self::new(
            clamp(self.top_left),
            clamp(self.top_right),
            clamp(self.bottom_right),
            clamp(self.bottom_left),
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|r| r.is_finite())
    }
}

impl From<[f64; 4]> for CornerRadii {
    #[inline]
    fn from([tl, tr, br, bl]: [f64; 4]) -> Self {
        Self::new(tl, tr, br, bl)
    }
}

impl From<f64> for CornerRadii {
    #[inline]
    fn from(r: f64) -> Self {
        Self::all(r)
    }
}

impl TryFrom<&[f64]> for CornerRadii {
    type Error = Error;

    /// Requires exactly four finite numbers, clockwise from top-left.
    fn try_from(values: &[f64]) -> Result<Self> {
        let [tl, tr, br, bl] = <[f64; 4]>::try_from(values).map_err(|_| {
            Error::invalid(
                "corners",
                "exactly 4 radii (top-left, top-right, bottom-right, bottom-left)",
                format!("{} values", values.len()),
            )
        })?;
        let radii = Self::new(tl, tr, br, bl);
        if !radii.is_finite() {
            return Err(Error::invalid("corners", "finite radii", format!("{values:?}")));
        }
        Ok(radii)
    }
}
