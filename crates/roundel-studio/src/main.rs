use std::path::PathBuf;

use anyhow::{Context, Result};
use roundel_engine::chart::{self, BarChartConfig};
use roundel_engine::config::PathConfig;
use roundel_engine::coords::{CornerRadii, UnitSystem};
use roundel_engine::draw::{DrawOptions, draw_rounded_rect};
use roundel_engine::geometry::CorrectionStrategy;
use roundel_engine::logging::{LoggingConfig, init_logging};
use roundel_engine::paint::{Color, GradientKind, StrokeCap, StrokeStyle, Style};
use roundel_raster::{RasterConfig, RasterSurface};

/// One tile of the gallery: position, size and requested corners in normalized units.
struct Tile {
    name: &'static str,
    position: [f64; 2],
    size: [f64; 2],
    corners: [f64; 4],
    style: Style,
}

fn gallery_tiles() -> Result<Vec<Tile>> {
    let teal = Color::from_hex("#1b9e77")?;
    let orange = Color::from_hex("#d95f02")?;
    let purple = Color::from_hex("#7570b3")?;
    let ink = Color::from_hex("#222222")?;

    Ok(vec![
        Tile {
            name: "uniform",
            position: [0.25, 0.75],
            size: [0.4, 0.3],
            corners: [0.05; 4],
            style: Style::filled(teal),
        },
        Tile {
            name: "mixed",
            position: [0.75, 0.75],
            size: [0.4, 0.3],
            corners: [0.12, 0.0, 0.12, 0.0],
            style: Style::filled(orange).with_stroke(ink, 3.0),
        },
        Tile {
            // Asks for far more rounding than fits; corrected down to a capsule.
            name: "oversized",
            position: [0.25, 0.25],
            size: [0.4, 0.2],
            corners: [0.6; 4],
            style: Style::filled(purple).with_opacity(0.8),
        },
        Tile {
            name: "outline",
            position: [0.75, 0.25],
            size: [0.4, 0.3],
            corners: [0.02, 0.08, 0.02, 0.08],
            style: Style::stroked(ink, 4.0)
                .with_stroke_style(StrokeStyle::Dashed)
                .with_stroke_cap(StrokeCap::Round),
        },
    ])
}

fn render_gallery(out: &std::path::Path) -> Result<()> {
    let mut surface = RasterSurface::new(&RasterConfig {
        width: 640,
        height: 640,
        units: UnitSystem::Normalized,
        background: Color::white(),
        anti_alias: true,
    })?;

    for tile in gallery_tiles()? {
        let returned = DrawOptions::returning_path();
        let path = draw_rounded_rect(&mut surface, &tile.position, &tile.size, &tile.corners, &tile.style, &returned)?
            .context("path requested but not returned")?;
        log::info!("{:>9}: {} vertices, bounds {:?}", tile.name, path.len(), path.bounds());

        let opts = DrawOptions::named(tile.name);
        draw_rounded_rect(&mut surface, &tile.position, &tile.size, &tile.corners, &tile.style, &opts)
            .with_context(|| format!("drawing tile `{}`", tile.name))?;
    }

    surface.save_png(out)?;
    Ok(())
}

fn render_bars(out: &std::path::Path) -> Result<()> {
    let mut surface = RasterSurface::new(&RasterConfig {
        width: 800,
        height: 480,
        units: UnitSystem::Absolute,
        background: Color::white(),
        anti_alias: true,
    })?;

    let positions: Vec<f64> = (0..8).map(|i| 80.0 + 90.0 * i as f64).collect();
    let heights = [220.0, 340.0, 120.0, 400.0, 60.0, 280.0, 310.0, 180.0];
    let config = BarChartConfig {
        baseline: 40.0,
        radii: CornerRadii::new(24.0, 24.0, 0.0, 0.0),
        path: PathConfig { arc_points: 24, strategy: CorrectionStrategy::GlobalRatio },
        ..BarChartConfig::default()
    };

    let bars = chart::bar_rects(&positions, &heights, &config)?;
    let colors = [Color::from_hex("#08306b")?, Color::from_hex("#6baed6")?];
    let styles = bars
        .iter()
        .map(|bar| Ok(Style::filled(chart::bar_paint(bar, GradientKind::Linear, &colors, None)?)))
        .collect::<roundel_engine::Result<Vec<_>>>()?;

    // One style per bar, so the cycle in `draw_bars` lines up with the bars.
    let drawn = chart::draw_bars(&mut surface, &positions, &heights, &config, &styles)?;
    for (i, bar) in drawn.iter().enumerate() {
        log::debug!("bar-{i}: radii {:?}", bar.radii());
    }

    surface.save_png(out)?;
    Ok(())
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let out_dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    render_gallery(&out_dir.join("gallery.png")).context("rendering gallery")?;
    render_bars(&out_dir.join("bars.png")).context("rendering bar chart")?;
    Ok(())
}
