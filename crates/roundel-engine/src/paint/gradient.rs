use core::str::FromStr;

use crate::coords::Point;
use crate::error::Error;

use super::Color;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    #[default]
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// Gradient geometry requested by name, e.g. from a chart style sheet.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

impl FromStr for GradientKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(GradientKind::Linear),
            "radial" => Ok(GradientKind::Radial),
            _ => Err(Error::unsupported("gradient kind", s)),
        }
    }
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly enforced.
/// Renderers may clamp/sort stops at build time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Stops at `0, 1/(n-1), .., 1` for the given colors. A single color sits at `0`.
pub fn evenly_spaced_stops(colors: &[Color]) -> Vec<ColorStop> {
    let last = colors.len().saturating_sub(1).max(1) as f32;
    colors
        .iter()
        .enumerate()
        .map(|(i, &c)| ColorStop::new(i as f32 / last, c))
        .collect()
}

/// Linear gradient definition in path space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops define premultiplied linear colors.
/// - `spread` defines out-of-range behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Point, end: Point, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self {
            start,
            end,
            stops,
            spread,
        }
    }

    /// Returns true when the gradient definition is structurally usable.
    ///
    /// Renderers may still impose additional constraints (sorting, etc.).
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && stops_are_valid(&self.stops)
            && self.start != self.end
    }
}

/// Radial gradient centered at `center`, reaching the last stop at `radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Point,
    pub radius: f64,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl RadialGradient {
    pub fn new(center: Point, radius: f64, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self { center, radius, stops, spread }
    }

    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && stops_are_valid(&self.stops)
    }
}

fn stops_are_valid(stops: &[ColorStop]) -> bool {
    stops.len() >= 2 && stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Linear".parse::<GradientKind>().unwrap(), GradientKind::Linear);
        assert_eq!(" radial ".parse::<GradientKind>().unwrap(), GradientKind::Radial);
    }

    #[test]
    fn unknown_kind_is_unsupported() {
        let err = "conic".parse::<GradientKind>().unwrap_err();
        assert_eq!(err, Error::unsupported("gradient kind", "conic"));
    }

    #[test]
    fn stops_are_spread_over_unit_interval() {
        let stops = evenly_spaced_stops(&[Color::black(), Color::white(), Color::black()]);
        let ts: Vec<f32> = stops.iter().map(|s| s.t).collect();
        assert_eq!(ts, vec![0.0, 0.5, 1.0]);
        assert_eq!(evenly_spaced_stops(&[Color::white()])[0].t, 0.0);
    }

    #[test]
    fn degenerate_gradients_are_invalid() {
        let stops = evenly_spaced_stops(&[Color::black(), Color::white()]);
        let p = Point::new(1.0, 1.0);
        assert!(!LinearGradient::new(p, p, stops.clone(), SpreadMode::Pad).is_valid());
        assert!(!RadialGradient::new(p, 0.0, stops.clone(), SpreadMode::Pad).is_valid());
        assert!(RadialGradient::new(p, 0.5, stops, SpreadMode::Pad).is_valid());
    }
}
