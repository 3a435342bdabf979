use std::path::Path as FsPath;

use resvg::tiny_skia::{self, LineCap, Pixmap, Shader, Stroke, StrokeDash, Transform};
use roundel_engine::coords::{UnitSystem, Viewport};
use roundel_engine::draw::Surface;
use roundel_engine::geometry::{FillRule, Path};
use roundel_engine::paint::{Color, ColorStop, Paint, SpreadMode, StrokeCap, Style};

use crate::RasterError;

/// Raster surface parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RasterConfig {
    /// Pixmap width in device pixels.
    pub width: u32,
    /// Pixmap height in device pixels.
    pub height: u32,
    /// Unit system of incoming paths.
    pub units: UnitSystem,
    /// Color the pixmap is cleared to.
    pub background: Color,
    pub anti_alias: bool,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            units: UnitSystem::Normalized,
            background: Color::transparent(),
            anti_alias: true,
        }
    }
}

/// [`Surface`] that rasterizes paths into an owned pixmap.
pub struct RasterSurface {
    pixmap: Pixmap,
    viewport: Viewport,
    anti_alias: bool,

    warned_degenerate_gradient: bool,
}

impl RasterSurface {
    pub fn new(config: &RasterConfig) -> Result<Self, RasterError> {
        let mut pixmap = Pixmap::new(config.width, config.height).ok_or(RasterError::InvalidSize {
            width: config.width,
            height: config.height,
        })?;
        pixmap.fill(sk_color(config.background));

        Ok(Self {
            pixmap,
            viewport: Viewport::new(config.width as f32, config.height as f32, config.units),
            anti_alias: config.anti_alias,
            warned_degenerate_gradient: false,
        })
    }

    /// Straight-alpha RGBA of the pixel at `(x, y)` (device pixels, top-left origin).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Straight-alpha RGBA bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    /// Writes the pixmap as a PNG file.
    pub fn save_png(&self, path: impl AsRef<FsPath>) -> Result<(), RasterError> {
        let (w, h) = (self.pixmap.width(), self.pixmap.height());
        let img = image::RgbaImage::from_raw(w, h, self.to_rgba8())
            .ok_or(RasterError::InvalidSize { width: w, height: h })?;
        img.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
        log::info!("wrote {}x{} png to {}", w, h, path.as_ref().display());
        Ok(())
    }

    // ── private helpers ────────────────────────────────────────────────────

    /// Path space to device pixels, as a tiny-skia transform.
    fn device_transform(&self) -> Transform {
        let [sx, sy, tx, ty] = self.viewport.scale_translate();
        Transform::from_row(sx as f32, 0.0, 0.0, sy as f32, tx as f32, ty as f32)
    }

    fn device_path(&self, path: &Path) -> Option<tiny_skia::Path> {
        let mut points = path.vertices().iter().map(|&p| self.viewport.to_device(p));
        let (x0, y0) = points.next()?;

        let mut pb = tiny_skia::PathBuilder::new();
        pb.move_to(x0, y0);
        for (x, y) in points {
            pb.line_to(x, y);
        }
        pb.close();
        pb.finish()
    }

    fn shader(&mut self, paint: &Paint, opacity: f32) -> Option<Shader<'static>> {
        let shader = match paint {
            Paint::Solid(c) => return Some(Shader::SolidColor(sk_color(c.with_opacity(opacity)))),
            Paint::LinearGradient(g) if g.is_valid() => tiny_skia::LinearGradient::new(
                sk_point(g.start),
                sk_point(g.end),
                sk_stops(&g.stops, opacity),
                sk_spread(g.spread),
                self.device_transform(),
            ),
            Paint::RadialGradient(g) if g.is_valid() => tiny_skia::RadialGradient::new(
                sk_point(g.center),
                sk_point(g.center),
                g.radius as f32,
                sk_stops(&g.stops, opacity),
                sk_spread(g.spread),
                self.device_transform(),
            ),
            _ => None,
        };

        if shader.is_none() && !self.warned_degenerate_gradient {
            log::warn!("skipping degenerate gradient fill: {paint:?}");
            self.warned_degenerate_gradient = true;
        }
        shader
    }
}

impl Surface for RasterSurface {
    fn fill_path(&mut self, path: &Path, style: &Style, name: Option<&str>) {
        if style.is_invisible() {
            return;
        }
        let Some(device_path) = self.device_path(path) else {
            log::trace!("skipping empty path {name:?}");
            return;
        };
        let opacity = style.opacity.clamp(0.0, 1.0);

        if let Some(fill) = &style.fill {
            if let Some(shader) = self.shader(fill, opacity) {
                let paint = tiny_skia::Paint { shader, anti_alias: self.anti_alias, ..Default::default() };
                let rule = match path.fill_rule() {
                    FillRule::EvenOdd => tiny_skia::FillRule::EvenOdd,
                    FillRule::NonZero => tiny_skia::FillRule::Winding,
                };
                self.pixmap.fill_path(&device_path, &paint, rule, Transform::identity(), None);
            }
        }

        if let Some(color) = style.stroke_color.filter(|_| style.stroke_width > 0.0) {
            let mut paint = tiny_skia::Paint::default();
            paint.set_color(sk_color(color.with_opacity(opacity)));
            paint.anti_alias = self.anti_alias;

            let stroke = Stroke {
                width: style.stroke_width,
                line_cap: match style.stroke_cap {
                    StrokeCap::Butt => LineCap::Butt,
                    StrokeCap::Round => LineCap::Round,
                    StrokeCap::Square => LineCap::Square,
                },
                dash: style
                    .stroke_style
                    .dash_pattern(style.stroke_width)
                    .and_then(|pattern| StrokeDash::new(pattern, 0.0)),
                ..Stroke::default()
            };
            self.pixmap.stroke_path(&device_path, &paint, &stroke, Transform::identity(), None);
        }
    }
}

fn sk_color(c: Color) -> tiny_skia::Color {
    let (r, g, b, a) = c.clamped().to_straight();
    tiny_skia::Color::from_rgba(r.min(1.0), g.min(1.0), b.min(1.0), a).unwrap_or(tiny_skia::Color::TRANSPARENT)
}

fn sk_point(p: roundel_engine::coords::Point) -> tiny_skia::Point {
    tiny_skia::Point::from_xy(p.x as f32, p.y as f32)
}

fn sk_stops(stops: &[ColorStop], opacity: f32) -> Vec<tiny_skia::GradientStop> {
    stops
        .iter()
        .map(|s| tiny_skia::GradientStop::new(s.t, sk_color(s.color.with_opacity(opacity))))
        .collect()
}

fn sk_spread(spread: SpreadMode) -> tiny_skia::SpreadMode {
    match spread {
        SpreadMode::Pad => tiny_skia::SpreadMode::Pad,
        SpreadMode::Repeat => tiny_skia::SpreadMode::Repeat,
        SpreadMode::Reflect => tiny_skia::SpreadMode::Reflect,
    }
}
