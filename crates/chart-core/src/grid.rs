// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers (linspace, fixed-step and "nice" 1/2/5 ticks).

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round `raw` up to the nearest 1, 2, 5 or 10 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let exp = raw.log10().floor();
    let base = 10f64.powf(exp);
    let frac = raw / base;
    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Ticks at multiples of a nice step inside `[min, max]`, about `target` of them.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) { return vec![min]; }
    let step = nice_step((max - min) / target.max(1) as f64);
    step_ticks(min, max, step)
}

/// Ticks at every multiple of `step` inside `[min, max]`, anchored at zero.
pub fn step_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    step_ticks_from(min, max, 0.0, step)
}

/// Ticks at `origin + k * step` inside `[min, max]`.
pub fn step_ticks_from(min: f64, max: f64, origin: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(max >= min) { return vec![min]; }
    let eps = 1e-9;
    let mut k = ((min - origin) / step - eps).ceil();
    let mut out = Vec::new();
    loop {
        // recompute from k each time so float drift does not accumulate
        let v = origin + k * step;
        if v > max + step * eps { break; }
        out.push(v);
        k += 1.0;
    }
    out
}
