// File: crates/candlechart-core/src/text.rs
// Summary: Skia textlayout shaping for titles, axis names and tick labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle};

use crate::geometry::Point;
use crate::surface::{TextAlign, TextStyle};

const FAMILIES: &[&str] = &["DejaVu Sans", "Liberation Sans", "Arial", "Helvetica", "sans-serif"];

/// Ascent approximation used to move from a baseline anchor to the paragraph's top edge.
const ASCENT: f32 = 0.8;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    /// Shape a single line; no wrapping.
    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut ts = skia::textlayout::TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(FAMILIES);

        let mut builder = ParagraphBuilder::new(&ParagraphStyle::new(), &self.fonts);
        builder.push_style(&ts);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` with its baseline at `at`, aligned horizontally per `style`.
    /// Vertical text runs bottom to top, rotated about `at`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, at: Point, style: &TextStyle, color: skia::Color) {
        let p = self.layout(text, style.size, color);
        let dx = match style.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => -p.longest_line() * 0.5,
            TextAlign::Right => -p.longest_line(),
        };
        let top = at.y - style.size * ASCENT;
        if style.vertical {
            canvas.save();
            canvas.rotate(-90.0, Some(skia::Point::new(at.x, at.y)));
            p.paint(canvas, (at.x + dx, top));
            canvas.restore();
        } else {
            p.paint(canvas, (at.x + dx, top));
        }
    }
}
