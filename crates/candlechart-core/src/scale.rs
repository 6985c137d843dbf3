// File: crates/candlechart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the time (X) and value (Y) axes.

/// Maps `[d_min, d_max]` onto `[px_min, px_max]`. For a vertical axis pass
/// the bottom pixel as `px_min` so larger values land higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d_min: f64,
    pub d_max: f64,
    pub px_min: f32,
    pub px_max: f32,
}

impl LinearScale {
    pub fn new(d_min: f64, d_max: f64, px_min: f32, px_max: f32) -> Self {
        Self { d_min, d_max, px_min, px_max }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.d_max - self.d_min).max(1e-12);
        self.px_min + ((v - self.d_min) / span) as f32 * (self.px_max - self.px_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_scale_is_inverted() {
        let s = LinearScale::new(0.0, 100.0, 400.0, 0.0);
        assert_eq!(s.to_px(0.0), 400.0);
        assert_eq!(s.to_px(100.0), 0.0);
        assert_eq!(s.to_px(25.0), 300.0);
    }
}
