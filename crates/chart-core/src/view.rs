// File: crates/chart-core/src/view.rs
// Data bounds of a chart, used to autoscale its axes.

use crate::series::{SeriesType, YAxisSide};
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Secondary Y range, present when any series or line uses it.
    pub y2: Option<(f64, f64)>,
}

#[derive(Clone, Copy)]
struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    fn empty() -> Self { Self { min: f64::INFINITY, max: f64::NEG_INFINITY } }
    fn add(&mut self, v: f64) {
        if v.is_finite() {
            self.min = self.min.min(v);
            self.max = self.max.max(v);
        }
    }
    fn is_set(&self) -> bool { self.min.is_finite() && self.max.is_finite() }
    /// Pad by `margin` of the span; degenerate spans widen to 1.
    fn padded(&self, margin: f64) -> (f64, f64) {
        if !self.is_set() { return (0.0, 1.0); }
        let (mut lo, mut hi) = (self.min, self.max);
        if (hi - lo).abs() < 1e-9 { hi = lo + 1.0; }
        let m = (hi - lo) * margin;
        // keep a zero baseline flush with the axis
        if lo != 0.0 { lo -= m; }
        if hi != 0.0 { hi += m; }
        (lo, hi)
    }
}

impl ViewState {
    /// Bounds of all series and overlays, Y padded by `margin` (fraction of span).
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let mut x = Bounds::empty();
        let mut y = Bounds::empty();
        let mut y2 = Bounds::empty();
        for s in &chart.series {
            let target = match s.y_axis {
                YAxisSide::Primary => &mut y,
                YAxisSide::Secondary => &mut y2,
            };
            for &(px, py) in &s.data_xy {
                x.add(px);
                target.add(py);
            }
            if s.series_type == SeriesType::Bar && !s.data_xy.is_empty() {
                target.add(0.0);
            }
        }
        for line in &chart.ref_lines {
            match line.y_axis {
                YAxisSide::Primary => y.add(line.y),
                YAxisSide::Secondary => y2.add(line.y),
            }
        }

        let (x_min, x_max) = match &chart.categories {
            Some(cats) => (-0.5, cats.len().max(1) as f64 - 0.5),
            None if chart.has_bars() => {
                let (lo, hi) = x.padded(0.0);
                (lo - 0.5, hi + 0.5)
            }
            None => {
                let (lo, hi) = x.padded(0.0);
                let m = (hi - lo) * 0.03;
                (lo - m, hi + m)
            }
        };
        let (y_min, y_max) = y.padded(margin);
        let y2 = if y2.is_set() { Some(y2.padded(margin)) } else { None };
        Self { x_min, x_max, y_min, y_max, y2 }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
        if let (Some((lo, hi)), Some(axis)) = (self.y2, chart.y2_axis.as_mut()) {
            axis.min = lo;
            axis.max = hi;
        }
    }
}
