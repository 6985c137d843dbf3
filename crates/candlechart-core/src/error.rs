// File: crates/candlechart-core/src/error.rs
// Summary: Typed error returned by every fallible operation of the core.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Axis or optimizer range is unusable (min >= max, non-finite, or fewer than two labels wanted).
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Series cannot be laid out (no samples, or a sample breaks the OHLC invariant).
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    /// Render configuration is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Raster backend could not allocate or encode the image.
    #[error("encoding failed: {0}")]
    EncodingFailure(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;

impl RenderError {
    pub(crate) fn range(min: f64, max: f64) -> Self {
        Self::InvalidRange(format!("[{min}, {max}]"))
    }
}
