// File: crates/geothermal-report/src/noise.rs
// Summary: Seedable Gaussian noise for the synthetic efficiency curves.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic generator when `seed` is set, entropy-seeded otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map(StdRng::seed_from_u64).unwrap_or_else(StdRng::from_entropy)
}

/// One draw from N(mean, std_dev^2) via the Box-Muller transform.
pub fn gaussian(rng: &mut impl Rng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-10); // Avoid ln(0)
    let u2: f64 = rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + z * std_dev
}

/// `values[i] + N(0, std_dev^2)`, one independent draw per point.
pub fn with_noise(values: &[f64], std_dev: f64, rng: &mut impl Rng) -> Vec<f64> {
    values.iter().map(|v| v + gaussian(rng, 0.0, std_dev)).collect()
}
