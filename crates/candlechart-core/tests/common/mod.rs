// File: crates/candlechart-core/tests/common/mod.rs
// Purpose: Shared fixtures and a `Surface` that records draw calls instead of rasterizing.

#![allow(dead_code)]

use candlechart_core::geometry::{Point, Rect};
use candlechart_core::surface::{LineStyle, Path, Surface, TextStyle};
use candlechart_core::{Rgba, Sample, Series};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Fill { color: Rgba, bounds: Option<Rect> },
    Stroke { style: LineStyle, bounds: Option<Rect> },
    Text { color: Rgba, text: String, at: Point, vertical: bool },
}

pub struct Recorder {
    pub ops: Vec<Op>,
    color: Rgba,
    style: Option<LineStyle>,
    pub clip_depth: usize,
    pub max_clip_depth: usize,
}

impl Default for Recorder {
    fn default() -> Self {
        Self { ops: Vec::new(), color: Rgba::BLACK, style: None, clip_depth: 0, max_clip_depth: 0 }
    }
}

impl Recorder {
    pub fn fills(&self) -> Vec<(Rgba, Rect)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill { color, bounds: Some(b) } => Some((*color, *b)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn strokes(&self) -> Vec<(&LineStyle, Rect)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Stroke { style, bounds: Some(b) } => Some((style, *b)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn set_line_style(&mut self, style: &LineStyle) {
        self.color = style.color;
        self.style = Some(style.clone());
    }

    fn fill(&mut self, path: &Path) {
        self.ops.push(Op::Fill { color: self.color, bounds: path.bounds() });
    }

    fn stroke(&mut self, path: &Path) {
        let style = self.style.clone().unwrap_or_else(|| LineStyle::solid(self.color, 1.0));
        self.ops.push(Op::Stroke { style, bounds: path.bounds() });
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.ops.push(Op::Text { color: self.color, text: text.to_string(), at, vertical: style.vertical });
    }

    fn push_clip(&mut self, _rect: Rect) {
        self.clip_depth += 1;
        self.max_clip_depth = self.max_clip_depth.max(self.clip_depth);
    }

    fn pop_clip(&mut self) {
        self.clip_depth -= 1;
    }
}

pub fn sample(t: i64, o: f64, h: f64, l: f64, c: f64, v: f64) -> Sample {
    Sample::try_new(t, o, h, l, c, v).expect("valid sample")
}

/// Three bars: rising, falling, flat.
pub fn three_bars() -> Series {
    Series::new(
        "SBER",
        "Sberbank",
        "RUB",
        "1h",
        vec![
            sample(1_600_000_000, 10.0, 12.0, 9.0, 11.0, 100.0),
            sample(1_600_003_600, 11.0, 11.5, 7.0, 8.0, 250.0),
            sample(1_600_007_200, 8.0, 9.0, 7.5, 8.0, 50.0),
        ],
    )
}

/// A deterministic random-walk day of minute bars.
pub fn walk(n: usize) -> Series {
    let mut samples = Vec::with_capacity(n);
    let mut price = 250.0;
    for i in 0..n {
        let drift = ((i as f64) * 0.37).sin() * 0.8 + ((i as f64) * 0.011).cos() * 0.3;
        let open = price;
        let close = (price + drift).max(1.0);
        let high = open.max(close) + 0.4;
        let low = (open.min(close) - 0.4).max(0.5);
        samples.push(sample(1_600_000_000 + i as i64 * 60, open, high, low, close, 1000.0 + (i % 17) as f64 * 40.0));
        price = close;
    }
    Series::new("GAZP", "Gazprom", "RUB", "1m", samples)
}
