// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for panel layout and pixel math.

use crate::types::Insets;

/// Axis-aligned rectangle in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }

    /// Shrink by `insets`, never inverting the rectangle.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as f32;
        let top = self.top + insets.top as f32;
        let right = (self.right - insets.right as f32).max(left + 1.0);
        let bottom = (self.bottom - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    /// Split into `n` equal columns separated by `gap`.
    pub fn split_columns(&self, n: usize, gap: f32) -> Vec<RectF> {
        if n <= 1 { return vec![*self]; }
        let w = ((self.width() - gap * (n - 1) as f32) / n as f32).max(1.0);
        (0..n)
            .map(|i| {
                let l = self.left + i as f32 * (w + gap);
                RectF::from_ltwh(l, self.top, w, self.height())
            })
            .collect()
    }

    /// Split into `n` equal rows separated by `gap`.
    pub fn split_rows(&self, n: usize, gap: f32) -> Vec<RectF> {
        if n <= 1 { return vec![*self]; }
        let h = ((self.height() - gap * (n - 1) as f32) / n as f32).max(1.0);
        (0..n)
            .map(|i| {
                let t = self.top + i as f32 * (h + gap);
                RectF::from_ltwh(self.left, t, self.width(), h)
            })
            .collect()
    }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}
