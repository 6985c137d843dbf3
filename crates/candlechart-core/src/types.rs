// File: crates/candlechart-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, paddings).

/// Default surface width in pixels.
pub const WIDTH: i32 = 720;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 480;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u64 { self.left as u64 + self.right as u64 }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u64 { self.top as u64 + self.bottom as u64 }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(76, 20, 36, 36)
    }
}

/// Backend-neutral 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }
}

/// Asymmetric padding added to a data extent before tick generation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub from_min: f64,
    pub from_max: f64,
}

impl Padding {
    pub const fn new(from_min: f64, from_max: f64) -> Self {
        Self { from_min, from_max }
    }
    #[inline]
    pub fn apply(&self, min: f64, max: f64) -> (f64, f64) {
        (min - self.from_min, max + self.from_max)
    }
}
