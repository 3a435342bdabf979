//! Bar-chart adapter: one rounded rectangle per category.

use crate::config::PathConfig;
use crate::coords::{Anchor, CornerRadii, Point, Size};
use crate::draw::Surface;
use crate::error::{Error, Result};
use crate::geometry::RoundedRect;
use crate::paint::{Color, GradientKind, Paint, Style};

/// Fraction of the category pitch a bar covers when no explicit width is given.
pub const DEFAULT_WIDTH_FRACTION: f64 = 0.8;

/// Bar layout parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BarChartConfig {
    /// Explicit bar width. Wins over `width_fraction`.
    pub bar_width: Option<f64>,
    /// Share of the smallest gap between categories used as bar width.
    pub width_fraction: f64,
    /// Requested radii for an upward bar; mirrored vertically for downward bars.
    pub radii: CornerRadii,
    /// Y value bars grow from.
    pub baseline: f64,
    pub path: PathConfig,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            bar_width: None,
            width_fraction: DEFAULT_WIDTH_FRACTION,
            radii: CornerRadii::zero(),
            baseline: 0.0,
            path: PathConfig::default(),
        }
    }
}

/// Smallest distance between distinct positions, or `1.0` with fewer than two.
fn category_pitch(positions: &[f64]) -> f64 {
    let mut sorted = positions.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(None, |acc: Option<f64>, gap| Some(acc.map_or(gap, |a| a.min(gap))))
        .unwrap_or(1.0)
}

/// Resolves the bar width for `positions` under `config`.
pub fn resolve_bar_width(positions: &[f64], config: &BarChartConfig) -> Result<f64> {
    match config.bar_width {
        Some(w) if w.is_finite() && w >= 0.0 => Ok(w),
        Some(w) => Err(Error::invalid("bar_width", "a finite non-negative width", w.to_string())),
        None if config.width_fraction.is_finite() && config.width_fraction > 0.0 => {
            Ok(config.width_fraction * category_pitch(positions))
        }
        None => Err(Error::invalid(
            "width_fraction",
            "a finite positive fraction",
            config.width_fraction.to_string(),
        )),
    }
}

/// Lays out one rounded bar per `(position, height)` pair.
///
/// Bars are centered on their position. Positive heights grow up from the baseline,
/// negative heights grow down with their radii mirrored so the free end stays round.
pub fn bar_rects(positions: &[f64], heights: &[f64], config: &BarChartConfig) -> Result<Vec<RoundedRect>> {
    if positions.len() != heights.len() {
        return Err(Error::invalid(
            "heights",
            "one height per position",
            format!("{} heights for {} positions", heights.len(), positions.len()),
        ));
    }
    if let Some(bad) = positions.iter().chain(heights).find(|v| !v.is_finite()) {
        return Err(Error::invalid("bars", "finite positions and heights", bad.to_string()));
    }

    let width = resolve_bar_width(positions, config)?;
    let r = config.radii;
    let flipped = CornerRadii::new(r.bottom_left, r.bottom_right, r.top_right, r.top_left);

    Ok(positions
        .iter()
        .zip(heights)
        .map(|(&x, &h)| {
            let (anchor, radii) = if h >= 0.0 { (Anchor::Bottom, r) } else { (Anchor::Top, flipped) };
            RoundedRect::anchored(
                Point::new(x, config.baseline),
                Size::new(width, h.abs()),
                anchor,
                radii,
                config.path.strategy,
            )
        })
        .collect())
}

/// Gradient (or solid, for a single color) spanning `bar`.
///
/// Linear gradients run from the bar's bottom edge to its top edge; radial ones
/// start at the bar center and reach its corners.
pub fn bar_paint(bar: &RoundedRect, kind: GradientKind, colors: &[Color], stops: Option<&[f32]>) -> Result<Paint> {
    let rect = bar.rect();
    let (start, end) = match kind {
        GradientKind::Linear => {
            let cx = rect.center().x;
            (Point::new(cx, rect.bottom()), Point::new(cx, rect.top()))
        }
        GradientKind::Radial => (rect.center(), Point::new(rect.right(), rect.top())),
    };
    Paint::from_colors(kind, colors, stops, start, end)
}

/// Paints every bar on `surface`, cycling through `styles` and naming bars `bar-{i}`.
pub fn draw_bars(
    surface: &mut dyn Surface,
    positions: &[f64],
    heights: &[f64],
    config: &BarChartConfig,
    styles: &[Style],
) -> Result<Vec<RoundedRect>> {
    if styles.is_empty() {
        return Err(Error::invalid("styles", "at least one style", "none"));
    }
    let bars = bar_rects(positions, heights, config)?;
    for (i, (bar, style)) in bars.iter().zip(styles.iter().cycle()).enumerate() {
        let path = bar.to_path(config.path.arc_points);
        let name = format!("bar-{i}");
        surface.fill_path(&path, style, Some(name.as_str()));
    }
    log::debug!("painted {} bars of width {:.4}", bars.len(), bars.first().map_or(0.0, |b| b.rect().width()));
    Ok(bars)
}
