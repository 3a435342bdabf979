use super::Point;

/// Unit system of path coordinates.
///
/// This is a configuration choice made once per surface; the geometry core is
/// unit-agnostic and never branches on it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum UnitSystem {
    /// `0..1` spans the drawing surface on each axis.
    #[default]
    Normalized,
    /// Path units are device pixels.
    Absolute,
}

/// Drawing surface extent in device pixels, plus the unit system of incoming paths.
///
/// Device space has its origin top-left with +Y down, so mapping flips Y.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub units: UnitSystem,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32, units: UnitSystem) -> Self {
        Self { width, height, units }
    }

    /// Path-to-device mapping as `[sx, sy, tx, ty]`, where
    /// `device = (sx * x + tx, sy * y + ty)`.
    ///
    /// Backends that take a transform (gradient shaders) build it from this, so
    /// they agree with [`Viewport::to_device`].
    #[inline]
    pub fn scale_translate(self) -> [f64; 4] {
        let h = self.height as f64;
        match self.units {
            UnitSystem::Normalized => [self.width as f64, -h, 0.0, h],
            UnitSystem::Absolute => [1.0, -1.0, 0.0, h],
        }
    }

    /// Maps a path-space point to device pixels.
    #[inline]
    pub fn to_device(self, p: Point) -> (f32, f32) {
        let [sx, sy, tx, ty] = self.scale_translate();
        ((sx * p.x + tx) as f32, (sy * p.y + ty) as f32)
    }
}
