// File: crates/candlechart-core/src/raster.rs
// Summary: Skia CPU raster implementation of `Surface` plus PNG/JPEG encoding.

use skia_safe as skia;

use crate::error::{RenderError, Result};
use crate::geometry::{Point, Rect};
use crate::surface::{LineStyle, Path, PathOp, Surface, TextStyle};
use crate::text::TextShaper;
use crate::types::Rgba;

/// Compressed output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageFormat {
    #[default]
    Png,
    /// Quality in `0..=100`.
    Jpeg { quality: u32 },
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg { .. } => "jpg",
        }
    }
}

#[inline]
fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for op in path.ops() {
        match *op {
            PathOp::MoveTo(p) => {
                out.move_to((p.x, p.y));
            }
            PathOp::LineTo(p) => {
                out.line_to((p.x, p.y));
            }
            PathOp::Close => {
                out.close();
            }
        }
    }
    out
}

/// Owns a private CPU raster surface for a single render.
pub struct RasterCanvas {
    surface: skia::Surface,
    fill: skia::Paint,
    stroke: skia::Paint,
    color: Rgba,
    text: TextShaper,
}

impl RasterCanvas {
    pub fn new(width: i32, height: i32, background: Rgba) -> Result<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| RenderError::EncodingFailure(format!("failed to create {width}x{height} raster surface")))?;
        surface.canvas().clear(to_skia(background));

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);

        Ok(Self {
            surface,
            fill,
            stroke,
            color: Rgba::BLACK,
            text: TextShaper::new(),
        })
    }

    /// Encode the current pixels.
    pub fn encode(&mut self, format: ImageFormat) -> Result<Vec<u8>> {
        let pixmap = self
            .surface
            .peek_pixels()
            .ok_or_else(|| RenderError::EncodingFailure("raster pixels are not addressable".into()))?;

        let mut out = Vec::new();
        let ok = match format {
            ImageFormat::Png => skia::png_encoder::encode(&pixmap, &mut out, &skia::png_encoder::Options::default()),
            ImageFormat::Jpeg { quality } => {
                let opts = skia::jpeg_encoder::Options { quality: quality.min(100), ..Default::default() };
                skia::jpeg_encoder::encode(&pixmap, &mut out, &opts)
            }
        };
        if !ok || out.is_empty() {
            return Err(RenderError::EncodingFailure(format!("{} encoder rejected the image", format.extension())));
        }
        Ok(out)
    }
}

impl Surface for RasterCanvas {
    fn set_color(&mut self, color: Rgba) {
        self.color = color;
        self.fill.set_color(to_skia(color));
        self.stroke.set_color(to_skia(color));
    }

    fn set_line_style(&mut self, style: &LineStyle) {
        self.color = style.color;
        self.stroke.set_color(to_skia(style.color));
        self.stroke.set_stroke_width(style.width);
        if style.dashes.is_empty() {
            self.stroke.set_path_effect(None::<skia::PathEffect>);
        } else {
            // Skia wants on/off pairs; a single length means equal on and off.
            let mut intervals = style.dashes.clone();
            if intervals.len() % 2 == 1 {
                intervals.extend_from_within(..);
            }
            self.stroke.set_path_effect(skia::PathEffect::dash(&intervals, style.dash_offset));
        }
    }

    fn fill(&mut self, path: &Path) {
        let p = to_skia_path(path);
        self.surface.canvas().draw_path(&p, &self.fill);
    }

    fn stroke(&mut self, path: &Path) {
        let p = to_skia_path(path);
        self.surface.canvas().draw_path(&p, &self.stroke);
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.text.draw(self.surface.canvas(), text, at, style, to_skia(self.color));
    }

    fn push_clip(&mut self, rect: Rect) {
        let canvas = self.surface.canvas();
        canvas.save();
        canvas.clip_rect(skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom), skia::ClipOp::Intersect, true);
    }

    fn pop_clip(&mut self) {
        self.surface.canvas().restore();
    }
}
