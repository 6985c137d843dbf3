// File: crates/candlechart-core/src/axis.rs
// Summary: Axis model with labels, ranges and a pluggable tick source.

use crate::error::Result;

/// A tick mark. Ticks without a label are minor reference marks.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: Option<String>,
}

impl Tick {
    pub fn major(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: Some(label.into()) }
    }

    pub fn minor(value: f64) -> Self {
        Self { value, label: None }
    }

    #[inline]
    pub fn is_minor(&self) -> bool {
        self.label.is_none()
    }
}

/// Produces the ticks for a data range `[min, max]`.
pub trait Ticker {
    fn ticks(&self, min: f64, max: f64) -> Result<Vec<Tick>>;
}

pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticker: Box<dyn Ticker>,
}

impl Axis {
    pub fn new(label: impl Into<String>, ticker: impl Ticker + 'static) -> Self {
        Self { label: label.into(), min: 0.0, max: 1.0, ticker: Box::new(ticker) }
    }

    /// Set the range, widening a degenerate span to one unit.
    pub fn fit(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = if (max - min).abs() < 1e-9 { min + 1.0 } else { max };
    }

    pub fn ticks(&self) -> Result<Vec<Tick>> {
        self.ticker.ticks(self.min, self.max)
    }
}

impl std::fmt::Debug for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Axis")
            .field("label", &self.label)
            .field("min", &self.min)
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}
