// File: crates/candlechart-core/src/plotter.rs
// Summary: Draw-layer trait shared by the candle, volume and grid layers.

use crate::axis::Tick;
use crate::geometry::Rect;
use crate::scale::LinearScale;
use crate::series::Extent;
use crate::surface::Surface;

/// Everything a layer needs to draw inside one panel.
#[derive(Clone, Copy, Debug)]
pub struct PlotArea<'a> {
    pub rect: Rect,
    pub x: LinearScale,
    pub y: LinearScale,
    pub x_ticks: &'a [Tick],
    pub y_ticks: &'a [Tick],
}

impl<'a> PlotArea<'a> {
    pub fn new(rect: Rect, x_range: (f64, f64), y_range: (f64, f64), x_ticks: &'a [Tick], y_ticks: &'a [Tick]) -> Self {
        Self {
            rect,
            x: LinearScale::new(x_range.0, x_range.1, rect.left, rect.right),
            y: LinearScale::new(y_range.0, y_range.1, rect.bottom, rect.top),
            x_ticks,
            y_ticks,
        }
    }
}

pub trait Plotter {
    fn plot(&self, surface: &mut dyn Surface, area: &PlotArea<'_>);

    /// Extent this layer needs visible, already padded. `None` if it has no opinion.
    fn data_range(&self) -> Option<Extent> {
        None
    }
}
