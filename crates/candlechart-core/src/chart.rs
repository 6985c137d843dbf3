// File: crates/candlechart-core/src/chart.rs
// Summary: Chart assembly (axes, panels, layers) and the headless render-to-bytes pipeline.

use log::debug;

use crate::axis::{Axis, Tick};
use crate::candles::CandlestickPlotter;
use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::geometry::{Point, Rect};
use crate::grid::Grid;
use crate::plotter::{PlotArea, Plotter};
use crate::raster::RasterCanvas;
use crate::series::{Extent, Series};
use crate::surface::{LineStyle, Surface, TextAlign, TextStyle};
use crate::theme::Theme;
use crate::ticker::{TimeLabels, TimeTicker, ValueTicker};
use crate::volume::VolumePlotter;

const PANEL_GAP: f32 = 10.0;
const MAJOR_TICK: f32 = 6.0;
const MINOR_TICK: f32 = 3.0;
const TITLE_SIZE: f32 = 14.0;
const AXIS_LABEL_SIZE: f32 = 12.0;
const TICK_LABEL_SIZE: f32 = 10.0;

/// A horizontal band of the chart with its own value axis and layers.
pub struct Panel<'a> {
    pub y_axis: Axis,
    /// Share of the plot height relative to the other panels.
    pub weight: f32,
    plotters: Vec<Box<dyn Plotter + 'a>>,
}

impl<'a> Panel<'a> {
    pub fn new(y_axis: Axis, weight: f32) -> Self {
        Self { y_axis, weight, plotters: Vec::new() }
    }

    /// Layers draw in the order they are added.
    pub fn add(&mut self, plotter: impl Plotter + 'a) {
        self.plotters.push(Box::new(plotter));
    }

    fn extent(&self) -> Option<Extent> {
        self.plotters.iter().filter_map(|p| p.data_range()).reduce(Extent::union)
    }
}

/// Panels stacked top to bottom sharing one time axis.
pub struct Chart<'a> {
    pub title: String,
    pub x_axis: Axis,
    pub panels: Vec<Panel<'a>>,
}

impl<'a> Chart<'a> {
    pub fn new(title: impl Into<String>, x_axis: Axis) -> Self {
        Self { title: title.into(), x_axis, panels: Vec::new() }
    }

    pub fn add_panel(&mut self, panel: Panel<'a>) {
        self.panels.push(panel);
    }

    /// Fit every axis to the union of its layers' data ranges.
    pub fn autoscale_axes(&mut self) -> Result<()> {
        let mut x: Option<(f64, f64)> = None;
        for panel in &mut self.panels {
            let Some(e) = panel.extent() else { continue };
            panel.y_axis.fit(e.y_min, e.y_max);
            x = Some(match x {
                None => (e.x_min, e.x_max),
                Some((lo, hi)) => (lo.min(e.x_min), hi.max(e.x_max)),
            });
        }
        let (lo, hi) = x.ok_or_else(|| RenderError::InvalidSeries("no layer has data to lay out".into()))?;
        self.x_axis.fit(lo, hi);
        Ok(())
    }

    /// Draw title, panels, layers and axes onto `surface`.
    pub fn draw(&self, surface: &mut dyn Surface, config: &RenderConfig) -> Result<()> {
        let theme = &config.theme;
        let insets = config.insets;
        let frame = Rect::from_ltrb(
            insets.left as f32,
            insets.top as f32,
            config.width as f32 - insets.right as f32,
            config.height as f32 - insets.bottom as f32,
        );

        let x_ticks = self.x_axis.ticks()?;
        debug!("x axis [{}, {}]: {} ticks", self.x_axis.min, self.x_axis.max, x_ticks.len());

        if config.draw_labels && !self.title.is_empty() {
            surface.set_color(theme.text);
            let at = Point::new(config.width as f32 * 0.5, (frame.top - 12.0).max(TITLE_SIZE));
            surface.fill_text(&self.title, at, &TextStyle::new(TITLE_SIZE, TextAlign::Center));
        }

        let weights: Vec<f32> = self.panels.iter().map(|p| p.weight).collect();
        let rows = frame.split_rows(&weights, PANEL_GAP);
        let last = rows.len().saturating_sub(1);

        for (i, (panel, rect)) in self.panels.iter().zip(rows).enumerate() {
            let y_ticks = panel.y_axis.ticks()?;
            debug!(
                "panel {i} '{}' [{}, {}]: {} ticks",
                panel.y_axis.label, panel.y_axis.min, panel.y_axis.max, y_ticks.len()
            );
            let area = PlotArea::new(
                rect,
                (self.x_axis.min, self.x_axis.max),
                (panel.y_axis.min, panel.y_axis.max),
                &x_ticks,
                &y_ticks,
            );

            surface.push_clip(rect);
            for plotter in &panel.plotters {
                plotter.plot(surface, &area);
            }
            surface.pop_clip();

            draw_y_axis(surface, &area, &panel.y_axis.label, theme, config.draw_labels);
            draw_x_axis(surface, &area, theme, config.draw_labels && i == last);
        }
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn tick_len(t: &Tick) -> f32 {
    if t.is_minor() { MINOR_TICK } else { MAJOR_TICK }
}

fn draw_x_axis(surface: &mut dyn Surface, area: &PlotArea<'_>, theme: &Theme, labels: bool) {
    let r = area.rect;
    let axis = LineStyle::solid(theme.axis_line, 1.0);
    surface.stroke_line(&axis, Point::new(r.left, r.bottom), Point::new(r.right, r.bottom));

    for t in area.x_ticks {
        let x = area.x.to_px(t.value);
        if !r.contains_x(x) {
            continue;
        }
        surface.stroke_line(&axis, Point::new(x, r.bottom), Point::new(x, r.bottom + tick_len(t)));
        if let (true, Some(label)) = (labels, &t.label) {
            surface.set_color(theme.text);
            let at = Point::new(x, r.bottom + MAJOR_TICK + TICK_LABEL_SIZE + 2.0);
            surface.fill_text(label, at, &TextStyle::new(TICK_LABEL_SIZE, TextAlign::Center));
        }
    }
}

fn draw_y_axis(surface: &mut dyn Surface, area: &PlotArea<'_>, title: &str, theme: &Theme, labels: bool) {
    let r = area.rect;
    let axis = LineStyle::solid(theme.axis_line, 1.0);
    surface.stroke_line(&axis, Point::new(r.left, r.top), Point::new(r.left, r.bottom));

    for t in area.y_ticks {
        let y = area.y.to_px(t.value);
        if !r.contains_y(y) {
            continue;
        }
        surface.stroke_line(&axis, Point::new(r.left - tick_len(t), y), Point::new(r.left, y));
        if let (true, Some(label)) = (labels, &t.label) {
            surface.set_color(theme.text);
            let at = Point::new(r.left - MAJOR_TICK - 2.0, y + TICK_LABEL_SIZE * 0.35);
            surface.fill_text(label, at, &TextStyle::new(TICK_LABEL_SIZE, TextAlign::Right));
        }
    }

    if labels && !title.is_empty() {
        surface.set_color(theme.text);
        let at = Point::new(AXIS_LABEL_SIZE + 2.0, (r.top + r.bottom) * 0.5);
        surface.fill_text(title, at, &TextStyle::new(AXIS_LABEL_SIZE, TextAlign::Center).vertical());
    }
}

fn grid_for(config: &RenderConfig) -> Grid {
    let style = config.theme.grid_style();
    Grid {
        vertical: config.vertical_grid.then(|| style.clone()),
        horizontal: config.horizontal_grid.then_some(style),
    }
}

/// Assemble the candlestick chart for `series`: time axis on X, price panel
/// with candles and grid, and an optional volume panel underneath.
pub fn build_chart<'a>(series: &'a Series, config: &RenderConfig) -> Result<Chart<'a>> {
    let time = &config.time;
    let time_ticker = TimeTicker { delta: time.delta, between: time.between };
    let x_axis = Axis::new("", TimeLabels::new(time_ticker, time.utc_offset_secs, time.format.clone())?);
    let mut chart = Chart::new(series.title(), x_axis);

    let value_ticker = |want: usize| ValueTicker {
        boundary_tolerance: config.boundary_tolerance,
        ..ValueTicker::new(want).with_params(config.label_params.clone())
    };
    let colors = config.theme.candles;

    let volume_share = config.volume_panel.unwrap_or(0.0);
    let mut price = Panel::new(Axis::new(series.currency.clone(), value_ticker(config.value_labels)), 1.0 - volume_share);
    price.add(CandlestickPlotter::new(&series.samples, colors).with_padding(config.x_padding, config.y_padding));
    price.add(grid_for(config));
    chart.add_panel(price);

    if config.volume_panel.is_some() {
        let mut volume = Panel::new(Axis::new("Volume", value_ticker(config.volume_labels)), volume_share);
        volume.add(VolumePlotter::new(&series.samples, colors));
        volume.add(grid_for(config));
        chart.add_panel(volume);
    }
    Ok(chart)
}

/// Lay out and draw `series` onto any surface.
pub fn draw_series(series: &Series, config: &RenderConfig, surface: &mut dyn Surface) -> Result<()> {
    config.validate()?;
    if series.samples.is_empty() {
        return Err(RenderError::InvalidSeries(format!("{}: no samples", series.ticker)));
    }
    let mut chart = build_chart(series, config)?;
    chart.autoscale_axes()?;
    chart.draw(surface, config)
}

/// Render `series` to an encoded image.
pub fn render(series: &Series, config: &RenderConfig) -> Result<Vec<u8>> {
    debug!(
        "render {} ({} samples) at {}x{} as {:?}",
        series.ticker,
        series.samples.len(),
        config.width,
        config.height,
        config.format
    );
    config.validate()?;
    let mut canvas = RasterCanvas::new(config.width, config.height, config.theme.background)?;
    draw_series(series, config, &mut canvas)?;
    let bytes = canvas.encode(config.format)?;
    debug!("encoded {} bytes", bytes.len());
    Ok(bytes)
}
