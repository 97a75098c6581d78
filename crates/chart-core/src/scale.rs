// File: crates/chart-core/src/scale.rs
// Summary: Linear value <-> pixel transform used for the X, Y and secondary Y axes.

/// Maps the data interval `[vmin, vmax]` onto the pixel interval `[px_start, px_end]`.
/// For vertical axes pass `px_start = bottom` and `px_end = top`.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_start: f32,
    pub px_end: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(px_start: f32, px_end: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { px_start, px_end, vmin, vmax }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.px_start + t as f32 * (self.px_end - self.px_start)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.px_end - self.px_start;
        if span.abs() < f32::EPSILON { return self.vmin; }
        let t = ((px - self.px_start) / span) as f64;
        self.vmin + t * (self.vmax - self.vmin)
    }

    /// Pixels covered by `dv` data units (always non-negative).
    #[inline]
    pub fn span_px(&self, dv: f64) -> f32 {
        (self.to_px(self.vmin + dv) - self.to_px(self.vmin)).abs()
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.vmin.min(self.vmax) && v <= self.vmin.max(self.vmax)
    }
}
