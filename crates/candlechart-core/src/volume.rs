// File: crates/candlechart-core/src/volume.rs
// Summary: Volume layer: one vertical bar per sample from zero up to its volume.

use crate::geometry::Point;
use crate::plotter::{PlotArea, Plotter};
use crate::series::{Extent, Sample};
use crate::surface::{LineStyle, Surface};
use crate::theme::CandleColors;

pub struct VolumePlotter<'a> {
    pub samples: &'a [Sample],
    pub colors: CandleColors,
}

impl<'a> VolumePlotter<'a> {
    pub fn new(samples: &'a [Sample], colors: CandleColors) -> Self {
        Self { samples, colors }
    }
}

impl Plotter for VolumePlotter<'_> {
    fn plot(&self, surface: &mut dyn Surface, area: &PlotArea<'_>) {
        let width = (area.rect.width() / self.samples.len().max(1) as f32 * 0.5).max(1.0);
        let base = area.y.to_px(0.0);
        for s in self.samples {
            let x = area.x.to_px(s.timestamp as f64);
            let style = LineStyle::solid(self.colors.for_direction(s.direction()), width);
            surface.stroke_line(&style, Point::new(x, base), Point::new(x, area.y.to_px(s.volume)));
        }
    }

    fn data_range(&self) -> Option<Extent> {
        Extent::of_volumes(self.samples)
    }
}
