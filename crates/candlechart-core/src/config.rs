// File: crates/candlechart-core/src/config.rs
// Summary: Caller-supplied render configuration with defaults and validation.

use crate::error::{RenderError, Result};
use crate::labelling::LabelParams;
use crate::raster::ImageFormat;
use crate::theme::Theme;
use crate::ticker::{check_time_format, BOUNDARY_TOLERANCE, DEFAULT_VALUE_LABELS};
use crate::types::{Insets, Padding, HEIGHT, WIDTH};

/// Time axis layout and label formatting.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeAxisConfig {
    /// Seconds between labeled ticks.
    pub delta: i64,
    /// Unlabeled ticks inside each interval.
    pub between: usize,
    /// Fixed offset applied to labels, seconds east of UTC.
    pub utc_offset_secs: i32,
    /// strftime pattern for labels.
    pub format: String,
}

impl Default for TimeAxisConfig {
    fn default() -> Self {
        // Moscow time, no daylight saving.
        Self { delta: 3600, between: 3, utc_offset_secs: 3 * 3600, format: "%H:%M".into() }
    }
}

/// Immutable render settings; safe to share between concurrent renders.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub x_padding: Padding,
    pub y_padding: Padding,
    /// Target label count for the price axis.
    pub value_labels: usize,
    /// Target label count for the volume axis.
    pub volume_labels: usize,
    pub boundary_tolerance: f64,
    pub label_params: LabelParams,
    pub time: TimeAxisConfig,
    pub format: ImageFormat,
    /// Title, axis label and tick label text.
    pub draw_labels: bool,
    pub vertical_grid: bool,
    pub horizontal_grid: bool,
    /// Fraction of the plot height given to a volume panel; `None` disables it.
    pub volume_panel: Option<f32>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            x_padding: Padding::new(0.0, 900.0),
            y_padding: Padding::new(0.0, 0.0),
            value_labels: DEFAULT_VALUE_LABELS,
            volume_labels: 4,
            boundary_tolerance: BOUNDARY_TOLERANCE,
            label_params: LabelParams::default(),
            time: TimeAxisConfig::default(),
            format: ImageFormat::Png,
            draw_labels: true,
            vertical_grid: true,
            horizontal_grid: true,
            volume_panel: None,
        }
    }
}

impl RenderConfig {
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_padding(mut self, x: Padding, y: Padding) -> Self {
        self.x_padding = x;
        self.y_padding = y;
        self
    }

    pub fn with_volume_panel(mut self, fraction: f32) -> Self {
        self.volume_panel = Some(fraction);
        self
    }

    pub fn without_labels(mut self) -> Self {
        self.draw_labels = false;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(RenderError::InvalidConfig(format!("canvas {}x{} is empty", self.width, self.height)));
        }
        if self.insets.hsum() >= self.width as u64 || self.insets.vsum() >= self.height as u64 {
            return Err(RenderError::InvalidConfig("insets leave no room for the plot".into()));
        }
        if self.value_labels < 2 || self.volume_labels < 2 {
            return Err(RenderError::InvalidRange("axes need at least 2 labels".into()));
        }
        if self.time.delta <= 0 {
            return Err(RenderError::InvalidConfig(format!("time tick interval must be positive, got {}", self.time.delta)));
        }
        if let Some(f) = self.volume_panel {
            if !(f > 0.0 && f < 1.0) {
                return Err(RenderError::InvalidConfig(format!("volume panel fraction {f} not in (0, 1)")));
            }
        }
        let paddings = [self.x_padding.from_min, self.x_padding.from_max, self.y_padding.from_min, self.y_padding.from_max];
        if paddings.iter().any(|p| !p.is_finite()) {
            return Err(RenderError::InvalidConfig("padding must be finite".into()));
        }
        check_time_format(&self.time.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_unusable_settings() {
        assert!(RenderConfig::default().with_size(0, 480).validate().is_err());
        assert!(RenderConfig::default().with_volume_panel(1.5).validate().is_err());
        let mut c = RenderConfig::default();
        c.value_labels = 1;
        assert!(matches!(c.validate(), Err(RenderError::InvalidRange(_))));
        let mut c = RenderConfig::default();
        c.time.delta = 0;
        assert!(matches!(c.validate(), Err(RenderError::InvalidConfig(_))));
    }

    #[test]
    fn oversized_insets_are_rejected_without_overflow() {
        let mut c = RenderConfig::default();
        c.insets = Insets::new(u32::MAX, u32::MAX, 0, 0);
        assert!(matches!(c.validate(), Err(RenderError::InvalidConfig(_))));
        c.insets = Insets::new(0, 0, u32::MAX, 1);
        assert!(matches!(c.validate(), Err(RenderError::InvalidConfig(_))));
        assert_eq!(Insets::new(u32::MAX, u32::MAX, 0, 0).hsum(), 2 * u32::MAX as u64);
    }
}
