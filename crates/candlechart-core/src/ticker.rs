// File: crates/candlechart-core/src/ticker.rs
// Summary: Tick sources for price (optimized labels) and time (fixed interval) axes.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset};
use log::trace;

use crate::axis::{Tick, Ticker};
use crate::error::{RenderError, Result};
use crate::labelling::{optimal_labels, Containment, LabelParams};

/// Data extremes further than this from the nearest label get their own tick.
pub const BOUNDARY_TOLERANCE: f64 = 1e-6;

/// Default target label count for price axes.
pub const DEFAULT_VALUE_LABELS: usize = 15;

fn check_range(min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Err(RenderError::range(min, max));
    }
    Ok(())
}

#[inline]
fn fixed2(v: f64) -> String {
    format!("{v:.2}")
}

/// Price axis ticks: optimized major labels, boundary ticks at the data
/// extremes and unlabeled minor ticks between.
#[derive(Clone, Debug)]
pub struct ValueTicker {
    pub want: usize,
    pub boundary_tolerance: f64,
    pub params: LabelParams,
}

impl Default for ValueTicker {
    fn default() -> Self {
        Self::new(DEFAULT_VALUE_LABELS)
    }
}

impl ValueTicker {
    pub fn new(want: usize) -> Self {
        Self { want, boundary_tolerance: BOUNDARY_TOLERANCE, params: LabelParams::default() }
    }

    pub fn with_params(mut self, params: LabelParams) -> Self {
        self.params = params;
        self
    }

    /// Minor spacing for a raw step `skip * q`; `None` when too small to draw.
    fn minor_spacing(&self, raw_step: f64, major: f64) -> Option<f64> {
        if raw_step == 1.0 || raw_step == 2.5 {
            Some(major / 5.0)
        } else if [2.0, 3.0, 4.0, 5.0].contains(&raw_step) {
            Some(major / raw_step)
        } else {
            let half = major / 2.0;
            (half >= self.params.epsilon).then_some(half)
        }
    }
}

impl Ticker for ValueTicker {
    fn ticks(&self, min: f64, max: f64) -> Result<Vec<Tick>> {
        check_range(min, max)?;
        let labelling = optimal_labels(min, max, self.want, Containment::Free, &self.params)?;
        let (Some(&first), Some(&last)) = (labelling.values.first(), labelling.values.last()) else {
            return Err(RenderError::InvalidRange(format!("no labels for [{min}, {max}]")));
        };
        if labelling.values.iter().any(|v| !v.is_finite()) {
            return Err(RenderError::InvalidRange(format!("labels for [{min}, {max}] are not finite")));
        }

        let mut ticks = Vec::with_capacity(labelling.values.len() * 4 + 2);
        if (min - first).abs() > self.boundary_tolerance {
            ticks.push(Tick::major(min, fixed2(min)));
        }
        ticks.extend(labelling.values.iter().map(|&v| Tick::major(v, fixed2(v))));
        if (max - last).abs() > self.boundary_tolerance {
            ticks.push(Tick::major(max, fixed2(max)));
        }

        let Some(minor) = self.minor_spacing(labelling.step, labelling.major_step()) else {
            return Ok(ticks);
        };
        // The walk only terminates on a finite, positive grid.
        if !first.is_finite() || !(minor.is_finite() && minor > 0.0) {
            return Ok(ticks);
        }

        // Walk from the first minor position at or below `min`.
        let mut i = 0.0;
        while first + i * minor > min {
            i -= 1.0;
        }
        loop {
            let v = first + i * minor;
            if v > max {
                break;
            }
            if !ticks.iter().any(|t| (t.value - v).abs() < minor / 2.0) {
                ticks.push(Tick::minor(v));
            }
            i += 1.0;
        }
        trace!("value ticks for [{min}, {max}]: {} ({} labels)", ticks.len(), labelling.values.len());
        Ok(ticks)
    }
}

/// Time axis ticks every `delta` seconds, aligned to multiples of `delta`,
/// with `between` unlabeled ticks splitting each interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeTicker {
    pub delta: i64,
    pub between: usize,
}

impl Default for TimeTicker {
    fn default() -> Self {
        Self { delta: 3600, between: 3 }
    }
}

impl Ticker for TimeTicker {
    fn ticks(&self, min: f64, max: f64) -> Result<Vec<Tick>> {
        if self.delta <= 0 {
            return Err(RenderError::InvalidConfig(format!("time tick interval must be positive, got {}", self.delta)));
        }
        check_range(min, max)?;

        let min_ts = min.floor() as i64;
        let max_ts = max.floor() as i64;
        let minor_step = self.delta as f64 / (self.between + 1) as f64;

        let mut ticks = Vec::new();
        let mut t = min_ts - min_ts.rem_euclid(self.delta);
        while t <= max_ts {
            ticks.push(Tick::major(t as f64, t.to_string()));
            for j in 1..=self.between {
                let v = t as f64 + j as f64 * minor_step;
                if v > max {
                    break;
                }
                ticks.push(Tick::minor(v));
            }
            t = match t.checked_add(self.delta) {
                Some(next) => next,
                None => break,
            };
        }
        Ok(ticks)
    }
}

/// Check a strftime pattern up front so formatting never fails mid-render.
pub fn check_time_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(RenderError::InvalidConfig(format!("bad time format '{format}'")));
    }
    Ok(())
}

/// Relabels the labeled ticks of a time ticker as wall-clock text in a fixed UTC offset.
#[derive(Clone, Debug)]
pub struct TimeLabels<T> {
    pub inner: T,
    pub offset: FixedOffset,
    pub format: String,
}

impl<T: Ticker> TimeLabels<T> {
    pub fn new(inner: T, utc_offset_secs: i32, format: impl Into<String>) -> Result<Self> {
        let offset = FixedOffset::east_opt(utc_offset_secs)
            .ok_or_else(|| RenderError::InvalidConfig(format!("UTC offset {utc_offset_secs}s out of range")))?;
        let format = format.into();
        check_time_format(&format)?;
        Ok(Self { inner, offset, format })
    }

    pub fn format_timestamp(&self, ts: f64) -> Result<String> {
        let dt = DateTime::from_timestamp(ts.floor() as i64, 0)
            .ok_or_else(|| RenderError::InvalidRange(format!("timestamp {ts} out of range")))?;
        let mut out = String::new();
        write!(out, "{}", dt.with_timezone(&self.offset).format(&self.format))
            .map_err(|_| RenderError::InvalidConfig(format!("bad time format '{}'", self.format)))?;
        Ok(out)
    }
}

impl<T: Ticker> Ticker for TimeLabels<T> {
    fn ticks(&self, min: f64, max: f64) -> Result<Vec<Tick>> {
        let mut ticks = self.inner.ticks(min, max)?;
        for tick in ticks.iter_mut().filter(|t| !t.is_minor()) {
            tick.label = Some(self.format_timestamp(tick.value)?);
        }
        Ok(ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minor_spacing_follows_raw_step() {
        let t = ValueTicker::default();
        assert_eq!(t.minor_spacing(1.0, 10.0), Some(2.0));
        assert_eq!(t.minor_spacing(2.5, 25.0), Some(5.0));
        assert_eq!(t.minor_spacing(4.0, 40.0), Some(10.0));
        assert_eq!(t.minor_spacing(6.0, 60.0), Some(30.0));
        assert_eq!(t.minor_spacing(6.0, 1e-20), None);
    }

    #[test]
    fn time_labels_use_fixed_offset() {
        let labels = TimeLabels::new(TimeTicker::default(), 3 * 3600, "%H:%M").expect("valid");
        assert_eq!(labels.format_timestamp(0.0).expect("in range"), "03:00");
        assert!(TimeLabels::new(TimeTicker::default(), 0, "%Q").is_err());
        assert!(TimeLabels::new(TimeTicker::default(), 100 * 3600, "%H").is_err());
    }
}
