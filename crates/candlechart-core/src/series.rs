// File: crates/candlechart-core/src/series.rs
// Summary: Candlestick sample and series model consumed by the render pipeline.
// Notes:
// - Fields are public so data collaborators can build samples directly;
//   `Sample::try_new` is the checked path that enforces OHLC invariants.
// - Samples must already be sorted by timestamp. The renderer never re-sorts.

use crate::error::{RenderError, Result};
use crate::types::Padding;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Unix timestamp, seconds.
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Which way a sample moved between open and close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Rising,
    Falling,
    Unchanged,
}

impl Sample {
    /// Construct a sample enforcing
    /// low <= min(open,close), high >= max(open,close) and volume >= 0.
    pub fn try_new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Result<Self> {
        if ![open, high, low, close, volume].iter().all(|v| v.is_finite()) {
            return Err(RenderError::InvalidSeries(format!("non-finite value at t={timestamp}")));
        }
        if low > open.min(close) {
            return Err(RenderError::InvalidSeries(format!("low above min(open,close) at t={timestamp}")));
        }
        if high < open.max(close) {
            return Err(RenderError::InvalidSeries(format!("high below max(open,close) at t={timestamp}")));
        }
        if volume < 0.0 {
            return Err(RenderError::InvalidSeries(format!("negative volume at t={timestamp}")));
        }
        Ok(Self { timestamp, open, high, low, close, volume })
    }

    pub fn direction(&self) -> Direction {
        if self.close > self.open {
            Direction::Rising
        } else if self.close < self.open {
            Direction::Falling
        } else {
            Direction::Unchanged
        }
    }
}

/// Data extent of a set of samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extent {
    /// `[first ts, last ts] x [min low, max high]`; `None` for no samples.
    pub fn of_prices(samples: &[Sample]) -> Option<Self> {
        let first = samples.first()?;
        let last = samples.last()?;
        let (y_min, y_max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| (lo.min(s.low), hi.max(s.high)));
        Some(Self { x_min: first.timestamp as f64, x_max: last.timestamp as f64, y_min, y_max })
    }

    /// `[first ts, last ts] x [0, max volume]`; `None` for no samples.
    pub fn of_volumes(samples: &[Sample]) -> Option<Self> {
        let first = samples.first()?;
        let last = samples.last()?;
        let y_max = samples.iter().map(|s| s.volume).fold(0.0, f64::max);
        Some(Self { x_min: first.timestamp as f64, x_max: last.timestamp as f64, y_min: 0.0, y_max })
    }

    pub fn padded(self, x: Padding, y: Padding) -> Self {
        let (x_min, x_max) = x.apply(self.x_min, self.x_max);
        let (y_min, y_max) = y.apply(self.y_min, self.y_max);
        Self { x_min, x_max, y_min, y_max }
    }

    /// Smallest extent covering both.
    pub fn union(self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Series {
    pub ticker: String,
    pub name: String,
    pub currency: String,
    pub interval: String,
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new(
        ticker: impl Into<String>,
        name: impl Into<String>,
        currency: impl Into<String>,
        interval: impl Into<String>,
        samples: Vec<Sample>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
            currency: currency.into(),
            interval: interval.into(),
            samples,
        }
    }

    /// Chart title in the form `name (ticker : interval)`.
    pub fn title(&self) -> String {
        format!("{} ({} : {})", self.name, self.ticker, self.interval)
    }

    pub fn price_extent(&self) -> Option<Extent> {
        Extent::of_prices(&self.samples)
    }

    pub fn volume_extent(&self) -> Option<Extent> {
        Extent::of_volumes(&self.samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_broken_invariants() {
        assert!(Sample::try_new(0, 10.0, 12.0, 9.0, 11.0, 5.0).is_ok());
        assert!(Sample::try_new(0, 10.0, 10.5, 9.0, 11.0, 5.0).is_err());
        assert!(Sample::try_new(0, 10.0, 12.0, 10.5, 11.0, 5.0).is_err());
        assert!(Sample::try_new(0, 10.0, 12.0, 9.0, 11.0, -1.0).is_err());
        assert!(Sample::try_new(0, f64::NAN, 12.0, 9.0, 11.0, 1.0).is_err());
    }

    #[test]
    fn direction_follows_open_close() {
        let s = |o, c| Sample { timestamp: 0, open: o, high: 20.0, low: 0.0, close: c, volume: 0.0 };
        assert_eq!(s(1.0, 2.0).direction(), Direction::Rising);
        assert_eq!(s(2.0, 1.0).direction(), Direction::Falling);
        assert_eq!(s(2.0, 2.0).direction(), Direction::Unchanged);
    }

    #[test]
    fn extents_span_samples() {
        let series = Series::new("SBER", "Sberbank", "RUB", "1m", vec![
            Sample { timestamp: 60, open: 10.0, high: 12.0, low: 9.0, close: 11.0, volume: 3.0 },
            Sample { timestamp: 120, open: 11.0, high: 13.0, low: 8.5, close: 12.0, volume: 7.0 },
        ]);
        let p = series.price_extent().expect("non-empty");
        assert_eq!((p.x_min, p.x_max, p.y_min, p.y_max), (60.0, 120.0, 8.5, 13.0));
        let v = series.volume_extent().expect("non-empty");
        assert_eq!((v.y_min, v.y_max), (0.0, 7.0));
        assert_eq!(series.title(), "Sberbank (SBER : 1m)");
        assert!(Series::default().price_extent().is_none());
    }
}
