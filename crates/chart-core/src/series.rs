// File: crates/chart-core/src/series.rs
// Summary: Series model for line and bar data with per-series styling.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Bar, // (x, y) bars from the zero baseline
}

/// Point marker drawn on each vertex of a line series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
    Square,
    Triangle,
    Diamond,
}

/// Which vertical axis a series is scaled against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YAxisSide {
    Primary,
    Secondary,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub label: Option<String>,
    pub data_xy: Vec<(f64, f64)>,
    /// Series color; the theme palette is used when unset.
    pub color: Option<skia::Color>,
    /// Per-point color overrides (bars only); missing entries fall back to `color`.
    pub point_colors: Vec<skia::Color>,
    pub marker: Marker,
    pub stroke_width: f32,
    pub alpha: f32,
    pub y_axis: YAxisSide,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self::with_data(series_type, Vec::new())
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self {
            series_type,
            label: None,
            data_xy: data,
            color: None,
            point_colors: Vec::new(),
            marker: Marker::None,
            stroke_width: 2.0,
            alpha: 1.0,
            y_axis: YAxisSide::Primary,
        }
    }

    /// Values placed at x = 0, 1, 2, ... (one per category).
    pub fn from_values(series_type: SeriesType, values: &[f64]) -> Self {
        let data = values.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect();
        Self::with_data(series_type, data)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_point_colors(mut self, colors: Vec<skia::Color>) -> Self {
        self.point_colors = colors;
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.5);
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn on_secondary_axis(mut self) -> Self {
        self.y_axis = YAxisSide::Secondary;
        self
    }

    /// Color of point `i`, honoring per-point overrides.
    pub fn color_at(&self, i: usize, fallback: skia::Color) -> skia::Color {
        self.point_colors.get(i).copied().or(self.color).unwrap_or(fallback)
    }

    pub fn y_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data_xy.iter().map(|&(_, y)| y)
    }
}
