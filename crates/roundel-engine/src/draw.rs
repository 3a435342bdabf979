//! Validated entry point from loosely-typed caller input to a painted path.

use crate::config::PathConfig;
use crate::coords::{Anchor, CornerRadii, Point, Size};
use crate::error::{Error, Result};
use crate::geometry::{Path, RoundedRect};
use crate::paint::Style;

/// Paint step that receives finished outlines.
///
/// Implementations own every paint concern (colors, gradients, dashes, opacity);
/// the geometry core only hands over the vertex loop, its fill rule and the style.
pub trait Surface {
    fn fill_path(&mut self, path: &Path, style: &Style, name: Option<&str>);
}

/// Per-call options of [`draw_rounded_rect`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawOptions {
    /// Return the path instead of painting it.
    pub return_path: bool,
    /// Label forwarded to the surface.
    pub name: Option<String>,
    /// Which point of the rectangle `position` refers to.
    pub anchor: Anchor,
    pub config: PathConfig,
}

impl DrawOptions {
    #[inline]
    pub fn returning_path() -> Self {
        Self { return_path: true, ..Self::default() }
    }

    #[inline]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }

    #[inline]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[inline]
    pub fn with_config(mut self, config: PathConfig) -> Self {
        self.config = config;
        self
    }
}

fn pair(values: &[f64], param: &'static str, expected: &'static str) -> Result<(f64, f64)> {
    match *values {
        [a, b] if a.is_finite() && b.is_finite() => Ok((a, b)),
        [_, _] => Err(Error::invalid(param, expected, format!("{values:?}"))),
        _ => Err(Error::invalid(param, expected, format!("{} values", values.len()))),
    }
}

/// Validates caller input and resolves it into a corrected [`RoundedRect`].
///
/// - `position`: exactly 2 finite numbers
/// - `size`: exactly 2 finite, non-negative numbers
/// - `corners`: exactly 4 finite numbers, clockwise from top-left
pub fn resolve_rounded_rect(
    position: &[f64],
    size: &[f64],
    corners: &[f64],
    anchor: Anchor,
    config: &PathConfig,
) -> Result<RoundedRect> {
    let (x, y) = pair(position, "position", "2 finite numbers (x, y)")?;

    const SIZE_EXPECTED: &str = "2 finite non-negative numbers (width, height)";
    let (w, h) = pair(size, "size", SIZE_EXPECTED)?;
    if w < 0.0 || h < 0.0 {
        return Err(Error::invalid("size", SIZE_EXPECTED, format!("{size:?}")));
    }

    let radii = CornerRadii::try_from(corners)?;

    Ok(RoundedRect::anchored(Point::new(x, y), Size::new(w, h), anchor, radii, config.strategy))
}

/// Builds a rounded rectangle outline and paints it on `surface`.
///
/// Returns `Ok(Some(path))` without touching `surface` when `options.return_path` is
/// set, `Ok(None)` after painting otherwise. Invalid input is rejected before any
/// geometry is computed.
pub fn draw_rounded_rect(
    surface: &mut dyn Surface,
    position: &[f64],
    size: &[f64],
    corners: &[f64],
    style: &Style,
    options: &DrawOptions,
) -> Result<Option<Path>> {
    let rr = resolve_rounded_rect(position, size, corners, options.anchor, &options.config)?;
    let path = rr.to_path(options.config.arc_points);

    if options.return_path {
        return Ok(Some(path));
    }

    log::trace!(
        "painting rounded rect {:?} radii {:?} ({} vertices){}",
        rr.rect(),
        rr.radii(),
        path.len(),
        options.name.as_deref().map(|n| format!(" as `{n}`")).unwrap_or_default()
    );
    surface.fill_path(&path, style, options.name.as_deref());
    Ok(None)
}
