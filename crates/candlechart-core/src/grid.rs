// File: crates/candlechart-core/src/grid.rs
// Summary: Gridlines at major tick positions, plus simple spacing helpers.

use crate::geometry::Point;
use crate::plotter::{PlotArea, Plotter};
use crate::surface::{LineStyle, Surface};

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Full-span lines across the plot at every major tick.
/// An axis whose style is `None` gets no lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    pub vertical: Option<LineStyle>,
    pub horizontal: Option<LineStyle>,
}

impl Plotter for Grid {
    fn plot(&self, surface: &mut dyn Surface, area: &PlotArea<'_>) {
        let r = area.rect;
        if let Some(style) = &self.vertical {
            for tk in area.x_ticks.iter().filter(|t| !t.is_minor()) {
                let x = area.x.to_px(tk.value);
                if !r.contains_x(x) {
                    continue;
                }
                surface.stroke_line(style, Point::new(x, r.top), Point::new(x, r.bottom));
            }
        }
        if let Some(style) = &self.horizontal {
            for tk in area.y_ticks.iter().filter(|t| !t.is_minor()) {
                let y = area.y.to_px(tk.value);
                if !r.contains_y(y) {
                    continue;
                }
                surface.stroke_line(style, Point::new(r.left, y), Point::new(r.right, y));
            }
        }
    }
}
