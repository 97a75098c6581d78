// File: crates/chart-core/src/overlay.rs
// Summary: Decorations drawn over a chart panel: reference lines, point annotations,
// free text boxes and the legend.

use skia_safe as skia;

use crate::series::YAxisSide;

/// Dashed horizontal guide line spanning the whole X range.
#[derive(Clone, Debug)]
pub struct RefLine {
    pub y: f64,
    pub color: Option<skia::Color>,
    pub label: Option<String>,
    pub y_axis: YAxisSide,
}

impl RefLine {
    pub fn horizontal(y: f64) -> Self {
        Self { y, color: None, label: None, y_axis: YAxisSide::Primary }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Text attached to a data point, shifted by a pixel offset (positive dy is up).
#[derive(Clone, Debug)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub offset_px: (f32, f32),
    pub bold: bool,
    pub y_axis: YAxisSide,
}

impl Annotation {
    pub fn at(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self { x, y, text: text.into(), offset_px: (0.0, 0.0), bold: false, y_axis: YAxisSide::Primary }
    }

    pub fn offset(mut self, dx: f32, dy: f32) -> Self {
        self.offset_px = (dx, dy);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Which corner of the box sits on the anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxAnchor {
    TopLeft,
    BottomLeft,
}

/// Multi-line text on a rounded box, positioned in axes fractions
/// (`(0, 0)` bottom-left of the plot area, `(1, 1)` top-right).
#[derive(Clone, Debug)]
pub struct TextBox {
    pub text: String,
    pub at: (f32, f32),
    pub anchor: BoxAnchor,
    pub font_size: f32,
}

impl TextBox {
    pub fn new(text: impl Into<String>, at: (f32, f32), anchor: BoxAnchor) -> Self {
        Self { text: text.into(), at, anchor, font_size: 13.0 }
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    TopRight,
    BottomRight,
}

/// Legend listing labelled series and reference lines.
#[derive(Clone, Debug)]
pub struct Legend {
    pub title: Option<String>,
    pub position: LegendPosition,
}

impl Legend {
    pub fn new(position: LegendPosition) -> Self {
        Self { title: None, position }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
