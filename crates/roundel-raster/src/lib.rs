//! CPU raster surface for roundel paths.
//!
//! Paints onto an RGBA pixmap with tiny-skia (re-exported by `resvg`) and saves PNGs
//! through `image`.

mod error;
mod surface;

pub use error::RasterError;
pub use surface::{RasterConfig, RasterSurface};
