use thiserror::Error;

/// Failures of the raster backend. Painting itself never fails; only allocation
/// and encoding do.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("cannot allocate a {width}x{height} pixmap")]
    InvalidSize { width: u32, height: u32 },

    #[error("failed to encode png: {0}")]
    Encode(#[from] image::ImageError),
}
