// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with alignment and rotation helpers.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchor of a text block relative to the given x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Vertical anchor of a text block relative to the given y.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
}

impl TextSpec {
    pub const fn new(size: f32, color: skia::Color) -> Self {
        Self { size, color, bold: false }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(spec: &TextSpec) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(spec.size.max(1.0));
        ts.set_color(spec.color);
        if spec.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    /// Lay out `text`; embedded newlines start new lines.
    pub fn layout(&self, text: &str, spec: &TextSpec) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(spec));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width of the longest line and total height.
    pub fn measure(&self, text: &str, spec: &TextSpec) -> (f32, f32) {
        let p = self.layout(text, spec);
        (p.longest_line(), p.height())
    }

    /// Draw `text` anchored at `(x, y)`.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        spec: &TextSpec,
        align: Align,
        valign: VAlign,
    ) {
        let mut p = self.layout(text, spec);
        let (w, h) = (p.longest_line(), p.height());
        p.paint(canvas, anchored_origin(x, y, w, h, align, valign));
    }

    /// Draw `text` rotated by `degrees` (clockwise) around the anchor `(x, y)`.
    pub fn draw_rotated(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        degrees: f32,
        spec: &TextSpec,
        align: Align,
        valign: VAlign,
    ) {
        let mut p = self.layout(text, spec);
        let (w, h) = (p.longest_line(), p.height());
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(degrees, None);
        p.paint(canvas, anchored_origin(0.0, 0.0, w, h, align, valign));
        canvas.restore();
    }
}

fn anchored_origin(x: f32, y: f32, w: f32, h: f32, align: Align, valign: VAlign) -> (f32, f32) {
    let left = match align {
        Align::Left => x,
        Align::Center => x - w * 0.5,
        Align::Right => x - w,
    };
    let top = match valign {
        VAlign::Top => y,
        VAlign::Middle => y - h * 0.5,
        VAlign::Bottom => y - h,
    };
    (left, top)
}
