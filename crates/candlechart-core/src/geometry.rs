// File: crates/candlechart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle, y growing downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.left && x <= self.right
    }
    #[inline]
    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.top && y <= self.bottom
    }

    /// Split vertically into stacked rows proportional to `weights`,
    /// separated by `gap` pixels.
    pub fn split_rows(&self, weights: &[f32], gap: f32) -> Vec<Rect> {
        let total: f32 = weights.iter().sum();
        if weights.is_empty() || total <= 0.0 {
            return Vec::new();
        }
        let gaps = gap * (weights.len() - 1) as f32;
        let avail = (self.height() - gaps).max(0.0);
        let mut top = self.top;
        weights
            .iter()
            .map(|w| {
                let h = avail * w / total;
                let r = Rect::from_ltrb(self.left, top, self.right, top + h);
                top += h + gap;
                r
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_rows_keeps_gap_and_proportions() {
        let r = Rect::from_ltrb(0.0, 0.0, 100.0, 108.0);
        let rows = r.split_rows(&[3.0, 1.0], 8.0);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].height(), 75.0);
        assert_eq!(rows[1].top, 83.0);
        assert_eq!(rows[1].bottom, 108.0);
    }
}
