// File: crates/geothermal-report/src/charts/working_fluid.rs
// Summary: Synthetic ORC efficiency curves per working fluid, with Gaussian noise.

use chart_core::{BoxAnchor, Chart, Figure, Legend, LegendPosition, Marker, Series, SeriesType, TextBox};
use rand::Rng;

use super::Y_MARGIN;
use crate::data::{WorkingFluid, EFFICIENCY_NOISE_STD, KEY_FINDINGS, REFERENCE_TEMPERATURE_C};
use crate::noise::with_noise;

const MARKERS: [Marker; 4] = [Marker::Circle, Marker::Square, Marker::Triangle, Marker::Diamond];

#[derive(Clone, Debug, PartialEq)]
pub struct EfficiencyCurve {
    pub fluid: &'static str,
    pub temperatures_c: Vec<f64>,
    pub efficiency_pct: Vec<f64>,
}

/// Noise-free efficiency of `fluid` at each temperature.
pub fn baseline_efficiency(fluid: &WorkingFluid, temperatures_c: &[f64]) -> Vec<f64> {
    temperatures_c
        .iter()
        .map(|t| fluid.base_pct + fluid.slope_pct_per_c * (t - REFERENCE_TEMPERATURE_C))
        .collect()
}

/// One noisy curve per fluid, drawn in order from `rng`.
pub fn curves(fluids: &[WorkingFluid], temperatures_c: &[f64], rng: &mut impl Rng) -> Vec<EfficiencyCurve> {
    fluids
        .iter()
        .map(|fluid| EfficiencyCurve {
            fluid: fluid.name,
            temperatures_c: temperatures_c.to_vec(),
            efficiency_pct: with_noise(&baseline_efficiency(fluid, temperatures_c), EFFICIENCY_NOISE_STD, rng),
        })
        .collect()
}

pub fn figure(curves: &[EfficiencyCurve]) -> Figure {
    let mut chart = Chart::new().with_title("ORC Efficiency with Different Working Fluids");
    for (i, curve) in curves.iter().enumerate() {
        let data = curve.temperatures_c.iter().copied().zip(curve.efficiency_pct.iter().copied()).collect();
        chart.add_series(
            Series::with_data(SeriesType::Line, data)
                .with_label(curve.fluid)
                .with_marker(MARKERS[i % MARKERS.len()]),
        );
    }
    chart.legend = Some(Legend::new(LegendPosition::BottomRight).with_title("Working Fluids"));
    chart.add_text_box(TextBox::new(KEY_FINDINGS, (0.02, 0.97), BoxAnchor::TopLeft).with_font_size(11.0));

    chart.autoscale_axes(Y_MARGIN);
    chart.x_axis.label = "Geothermal Resource Temperature (\u{b0}C)".into();
    chart.y_axis.label = "Thermal Efficiency (%)".into();
    Figure::single(chart)
}
