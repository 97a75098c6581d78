// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure size, panel insets, spacing).

/// Default figure width in logical pixels.
pub const WIDTH: i32 = 1200;
/// Default figure height in logical pixels.
pub const HEIGHT: i32 = 700;
/// Default raster scale (logical px -> device px).
pub const SCALE: f32 = 2.0;
/// Gap between panels of a multi-panel figure, in logical pixels.
pub const PANEL_GAP: f32 = 16.0;

/// Panel margins around the plot area, in logical pixels.
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
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(84, 28, 24, 56)
    }
}
