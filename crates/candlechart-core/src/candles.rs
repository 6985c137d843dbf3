// File: crates/candlechart-core/src/candles.rs
// Summary: Candlestick layer: open/close bodies and low/high wicks.

use crate::geometry::{Point, Rect};
use crate::plotter::{PlotArea, Plotter};
use crate::series::{Extent, Sample};
use crate::surface::{LineStyle, Path, Surface};
use crate::theme::CandleColors;
use crate::types::Padding;

const WICK_WIDTH: f32 = 1.0;

pub struct CandlestickPlotter<'a> {
    pub samples: &'a [Sample],
    pub colors: CandleColors,
    pub x_padding: Padding,
    pub y_padding: Padding,
}

impl<'a> CandlestickPlotter<'a> {
    pub fn new(samples: &'a [Sample], colors: CandleColors) -> Self {
        Self { samples, colors, x_padding: Padding::default(), y_padding: Padding::default() }
    }

    pub fn with_padding(mut self, x: Padding, y: Padding) -> Self {
        self.x_padding = x;
        self.y_padding = y;
        self
    }

    /// Body width: the panel split evenly between samples.
    pub fn body_width(&self, plot_width: f32) -> f32 {
        plot_width / self.samples.len().max(1) as f32
    }
}

impl Plotter for CandlestickPlotter<'_> {
    fn plot(&self, surface: &mut dyn Surface, area: &PlotArea<'_>) {
        let half = self.body_width(area.rect.width()) * 0.5;
        for s in self.samples {
            let x = area.x.to_px(s.timestamp as f64);
            let y_o = area.y.to_px(s.open);
            let y_c = area.y.to_px(s.close);
            let y_h = area.y.to_px(s.high);
            let y_l = area.y.to_px(s.low);

            let color = self.colors.for_direction(s.direction());
            surface.set_color(color);

            // Flat candles still get a one pixel body.
            let top = y_o.min(y_c);
            let bot = y_o.max(y_c).max(top + 1.0);
            surface.fill(&Path::rect(Rect::from_ltrb(x - half, top, x + half, bot)));

            surface.stroke_line(&LineStyle::solid(color, WICK_WIDTH), Point::new(x, y_l), Point::new(x, y_h));
        }
    }

    fn data_range(&self) -> Option<Extent> {
        Extent::of_prices(self.samples).map(|e| e.padded(self.x_padding, self.y_padding))
    }
}
