// File: crates/candlechart-core/src/surface.rs
// Summary: Minimal drawing-surface interface the plotters render through.
// Notes:
// - Plotters only build `Path`s and pick colors/styles; the raster backend
//   lives in `raster.rs`. Tests swap in a recording surface.

use crate::geometry::{Point, Rect};
use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Backend-neutral vector path in pixel coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    ops: Vec<PathOp>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: impl Into<Point>) -> &mut Self {
        self.ops.push(PathOp::MoveTo(p.into()));
        self
    }

    pub fn line_to(&mut self, p: impl Into<Point>) -> &mut Self {
        self.ops.push(PathOp::LineTo(p.into()));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.ops.push(PathOp::Close);
        self
    }

    /// Closed rectangle outline.
    pub fn rect(r: Rect) -> Self {
        let mut p = Self::new();
        p.move_to((r.left, r.top))
            .line_to((r.right, r.top))
            .line_to((r.right, r.bottom))
            .line_to((r.left, r.bottom))
            .close();
        p
    }

    /// Single straight segment.
    pub fn segment(a: impl Into<Point>, b: impl Into<Point>) -> Self {
        let mut p = Self::new();
        p.move_to(a).line_to(b);
        p
    }

    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    /// Bounding box of all points, `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        let mut pts = self.ops.iter().filter_map(|op| match op {
            PathOp::MoveTo(p) | PathOp::LineTo(p) => Some(*p),
            PathOp::Close => None,
        });
        let first = pts.next()?;
        Some(pts.fold(Rect::from_ltrb(first.x, first.y, first.x, first.y), |r, p| {
            Rect::from_ltrb(r.left.min(p.x), r.top.min(p.y), r.right.max(p.x), r.bottom.max(p.y))
        }))
    }
}

/// Stroke appearance. An empty `dashes` means a solid line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Rgba,
    pub width: f32,
    pub dashes: Vec<f32>,
    pub dash_offset: f32,
}

impl LineStyle {
    pub fn solid(color: Rgba, width: f32) -> Self {
        Self { color, width, dashes: Vec::new(), dash_offset: 0.0 }
    }

    pub fn dashed(color: Rgba, width: f32, dashes: Vec<f32>, dash_offset: f32) -> Self {
        Self { color, width, dashes, dash_offset }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub align: TextAlign,
    /// Rotate 90 degrees counter-clockwise around the anchor.
    pub vertical: bool,
}

impl TextStyle {
    pub const fn new(size: f32, align: TextAlign) -> Self {
        Self { size, align, vertical: false }
    }
    pub const fn vertical(mut self) -> Self {
        self.vertical = true;
        self
    }
}

pub trait Surface {
    /// Set the color used by subsequent fills, strokes and text.
    fn set_color(&mut self, color: Rgba);
    /// Set stroke width, dashes and color.
    fn set_line_style(&mut self, style: &LineStyle);
    fn fill(&mut self, path: &Path);
    fn stroke(&mut self, path: &Path);
    /// Draw `text` with its baseline anchored at `at`.
    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle);
    /// Restrict drawing to `rect` until the matching `pop_clip`.
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);

    fn stroke_line(&mut self, style: &LineStyle, a: Point, b: Point) {
        self.set_line_style(style);
        self.stroke(&Path::segment(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_path_bounds_roundtrip() {
        let r = Rect::from_ltrb(1.0, 2.0, 5.0, 9.0);
        assert_eq!(Path::rect(r).bounds(), Some(r));
        assert_eq!(Path::new().bounds(), None);
        assert_eq!(Path::rect(r).ops().last(), Some(&PathOp::Close));
    }
}
