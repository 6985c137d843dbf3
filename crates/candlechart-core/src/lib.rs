// File: crates/candlechart-core/src/lib.rs
// Summary: Core library entry point; exports the candlestick chart model, label optimizer and renderer.

pub mod error;
pub mod series;
pub mod labelling;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod surface;
pub mod theme;
pub mod text;
pub mod raster;
pub mod axis;
pub mod ticker;
pub mod plotter;
pub mod grid;
pub mod candles;
pub mod volume;
pub mod config;
pub mod chart;

pub use axis::{Axis, Tick, Ticker};
pub use chart::{build_chart, draw_series, render, Chart, Panel};
pub use config::{RenderConfig, TimeAxisConfig};
pub use error::{RenderError, Result};
pub use labelling::{optimal_labels, Containment, LabelParams, Labelling, Weights};
pub use raster::{ImageFormat, RasterCanvas};
pub use series::{Direction, Extent, Sample, Series};
pub use surface::Surface;
pub use text::TextShaper;
pub use theme::Theme;
pub use ticker::{TimeLabels, TimeTicker, ValueTicker};
pub use types::{Insets, Padding, Rgba};
