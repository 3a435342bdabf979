use core::str::FromStr;

use crate::error::Error;

use super::{Color, Paint};

/// Dash style of a stroke.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl StrokeStyle {
    /// On/off dash lengths in device pixels for a stroke of `width`, or `None` for solid.
    ///
    /// Lengths scale with the stroke width so thick dashed lines keep their rhythm.
    pub fn dash_pattern(self, width: f32) -> Option<Vec<f32>> {
        let unit: &[f32] = match self {
            StrokeStyle::Solid => return None,
            StrokeStyle::Dashed => &[3.7, 1.6],
            StrokeStyle::Dotted => &[1.0, 1.65],
            StrokeStyle::DashDot => &[6.4, 1.6, 1.0, 1.6],
        };
        let w = width.max(1.0);
        Some(unit.iter().map(|d| d * w).collect())
    }
}

impl FromStr for StrokeStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "-" | "solid" => Ok(StrokeStyle::Solid),
            "--" | "dashed" => Ok(StrokeStyle::Dashed),
            ":" | "dotted" => Ok(StrokeStyle::Dotted),
            "-." | "dashdot" | "dash-dot" => Ok(StrokeStyle::DashDot),
            _ => Err(Error::unsupported("stroke style", s)),
        }
    }
}

/// Shape of stroke endpoints (and dash ends).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl FromStr for StrokeCap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "butt" => Ok(StrokeCap::Butt),
            "round" => Ok(StrokeCap::Round),
            "square" | "projecting" => Ok(StrokeCap::Square),
            _ => Err(Error::unsupported("stroke cap", s)),
        }
    }
}

/// Paint attributes forwarded untouched from the caller to the paint step.
///
/// The geometry core never reads these; only [`crate::draw::Surface`] implementations do.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Interior paint. `None` leaves the interior unpainted.
    pub fill: Option<Paint>,
    /// Outline color. `None` disables the stroke.
    pub stroke_color: Option<Color>,
    /// Stroke width in device pixels.
    pub stroke_width: f32,
    pub stroke_style: StrokeStyle,
    pub stroke_cap: StrokeCap,
    /// Applied on top of fill and stroke alpha, `0..=1`.
    pub opacity: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: None,
            stroke_color: None,
            stroke_width: 1.0,
            stroke_style: StrokeStyle::Solid,
            stroke_cap: StrokeCap::Butt,
            opacity: 1.0,
        }
    }
}

impl Style {
    /// Fill only.
    #[inline]
    pub fn filled(paint: impl Into<Paint>) -> Self {
        Self { fill: Some(paint.into()), ..Self::default() }
    }

    /// Stroke only.
    #[inline]
    pub fn stroked(color: Color, width: f32) -> Self {
        Self { stroke_color: Some(color), stroke_width: width, ..Self::default() }
    }

    #[inline]
    pub fn with_stroke(mut self, color: Color, width: f32) -> Self {
        self.stroke_color = Some(color);
        self.stroke_width = width;
        self
    }

    #[inline]
    pub fn with_stroke_style(mut self, style: StrokeStyle) -> Self {
        self.stroke_style = style;
        self
    }

    #[inline]
    pub fn with_stroke_cap(mut self, cap: StrokeCap) -> Self {
        self.stroke_cap = cap;
        self
    }

    #[inline]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// True when neither fill nor a positive-width stroke would paint anything.
    pub fn is_invisible(&self) -> bool {
        let stroke = self.stroke_color.is_some() && self.stroke_width > 0.0;
        self.opacity <= 0.0 || (self.fill.is_none() && !stroke)
    }
}
