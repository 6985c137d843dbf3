// File: crates/candlechart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::series::Direction;
use crate::surface::LineStyle;
use crate::types::Rgba;

/// Color per candle direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandleColors {
    pub rising: Rgba,
    pub falling: Rgba,
    pub unchanged: Rgba,
}

impl CandleColors {
    #[inline]
    pub fn for_direction(&self, d: Direction) -> Rgba {
        match d {
            Direction::Rising => self.rising,
            Direction::Falling => self.falling,
            Direction::Unchanged => self.unchanged,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub text: Rgba,
    pub axis_line: Rgba,
    pub grid: Rgba,
    pub grid_width: f32,
    pub candles: CandleColors,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::WHITE,
            text: Rgba::BLACK,
            axis_line: Rgba::BLACK,
            grid: Rgba::gray(128),
            grid_width: 0.7,
            candles: CandleColors {
                rising: Rgba::rgb(0, 198, 107),
                falling: Rgba::rgb(255, 98, 103),
                unchanged: Rgba::BLACK,
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            text: Rgba::rgb(235, 235, 245),
            axis_line: Rgba::rgb(180, 180, 190),
            grid: Rgba::gray(128),
            grid_width: 0.7,
            candles: CandleColors {
                rising: Rgba::rgb(40, 200, 120),
                falling: Rgba::rgb(220, 80, 80),
                unchanged: Rgba::rgb(200, 200, 210),
            },
        }
    }

    /// Dashed gridline style: dash 2, offset 4.
    pub fn grid_style(&self) -> LineStyle {
        LineStyle::dashed(self.grid, self.grid_width, vec![2.0], 4.0)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
