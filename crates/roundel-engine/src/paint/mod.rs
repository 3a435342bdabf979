//! Paint model forwarded from callers to paint steps.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, gradients)
//! - the style record attached to each drawn path
//!
//! Geometry types remain in `coords` and `geometry`; nothing here affects path shape.

pub mod color;
pub mod gradient;
pub mod style;

pub use color::Color;
pub use gradient::{ColorStop, GradientKind, LinearGradient, RadialGradient, SpreadMode};
pub use style::{StrokeCap, StrokeStyle, Style};

use crate::coords::Point;
use crate::error::{Error, Result};

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Builds a paint from a color list.
    ///
    /// One color gives a solid paint. Two or more build a `kind` gradient running
    /// from `start` to `end` (radial: centered at `start`, reaching `end`). `stops`
    /// default to evenly spaced positions and must match `colors` in length.
    pub fn from_colors(
        kind: GradientKind,
        colors: &[Color],
        stops: Option<&[f32]>,
        start: Point,
        end: Point,
    ) -> Result<Self> {
        match colors {
            [] => return Err(Error::invalid("fill", "at least one color", "no colors")),
            [only] => return Ok(Paint::Solid(*only)),
            _ => {}
        }

        let stops = match stops {
            None => gradient::evenly_spaced_stops(colors),
            Some(ts) if ts.len() == colors.len() => ts
                .iter()
                .zip(colors)
                .map(|(&t, &c)| ColorStop::new(t, c))
                .collect(),
            Some(ts) => {
                return Err(Error::invalid(
                    "stops",
                    "one stop position per color",
                    format!("{} stops for {} colors", ts.len(), colors.len()),
                ));
            }
        };

        Ok(match kind {
            GradientKind::Linear => {
                Paint::LinearGradient(LinearGradient::new(start, end, stops, SpreadMode::Pad))
            }
            GradientKind::Radial => Paint::RadialGradient(RadialGradient::new(
                start,
                start.distance(end),
                stops,
                SpreadMode::Pad,
            )),
        })
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a >= 1.0 && c.r <= 1.0 && c.g <= 1.0 && c.b <= 1.0,
            Paint::LinearGradient(g) => g.stops.iter().all(|s| s.color.a >= 1.0),
            Paint::RadialGradient(g) => g.stops.iter().all(|s| s.color.a >= 1.0),
        }
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Point = Point::new(0.0, 0.0);
    const B: Point = Point::new(0.0, 1.0);

    #[test]
    fn single_color_is_solid() {
        let paint = Paint::from_colors(GradientKind::Radial, &[Color::white()], None, A, B).unwrap();
        assert_eq!(paint, Paint::Solid(Color::white()));
    }

    #[test]
    fn two_colors_make_a_linear_gradient_with_default_stops() {
        let paint = Paint::from_colors(GradientKind::Linear, &[Color::black(), Color::white()], None, A, B).unwrap();
        let Paint::LinearGradient(g) = paint else { panic!("expected linear gradient") };
        assert_eq!(g.stops.iter().map(|s| s.t).collect::<Vec<_>>(), vec![0.0, 1.0]);
        assert!(g.is_valid());
    }

    #[test]
    fn radial_radius_is_start_to_end_distance() {
        let paint = Paint::from_colors(
            GradientKind::Radial,
            &[Color::black(), Color::white()],
            Some(&[0.2, 0.9]),
            A,
            Point::new(3.0, 4.0),
        )
        .unwrap();
        let Paint::RadialGradient(g) = paint else { panic!("expected radial gradient") };
        assert_eq!(g.radius, 5.0);
        assert_eq!(g.stops[0].t, 0.2);
    }

    #[test]
    fn mismatched_stops_are_rejected() {
        let err = Paint::from_colors(GradientKind::Linear, &[Color::black(), Color::white()], Some(&[0.5]), A, B)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { param: "stops", .. }));
    }

    #[test]
    fn no_colors_is_rejected() {
        assert!(Paint::from_colors(GradientKind::Linear, &[], None, A, B).is_err());
    }

    #[test]
    fn opacity_of_gradients() {
        let translucent = Color::white().with_opacity(0.5);
        let paint = Paint::from_colors(GradientKind::Linear, &[Color::black(), translucent], None, A, B).unwrap();
        assert!(!paint.is_opaque());
        assert!(Paint::from(Color::black()).is_opaque());
    }
}
