// File: crates/geothermal-report/src/charts/capacity.rs
// Summary: Installed capacity trend line with growth-rate overlay.

use chart_core::{Annotation, BoxAnchor, Chart, Figure, Marker, Series, SeriesType, TextBox, TickSpec};

use super::{RED, Y_MARGIN};
use crate::data::CapacityPoint;
use crate::error::StatsError;
use crate::stats::cagr;

/// Compound annual growth rate over the whole series.
pub fn growth_rate(points: &[CapacityPoint]) -> Result<f64, StatsError> {
    let values: Vec<f64> = points.iter().map(|p| p.capacity_mw).collect();
    cagr(&values)
}

/// First, middle-low, middle-high and last indices of an `n`-point series.
pub fn annotation_indices(n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let mut idx = vec![0, n / 3, 2 * n / 3, n - 1];
    idx.dedup();
    idx
}

pub fn figure(points: &[CapacityPoint]) -> Result<Figure, StatsError> {
    let rate = growth_rate(points)?;
    log::info!("capacity CAGR {:.2}% over {} years", rate * 100.0, points.len());

    let (first, last) = (points[0], points[points.len() - 1]);
    let mut chart = Chart::new().with_title(format!(
        "Global Installed Geothermal Capacity ({}-{})",
        first.year, last.year
    ));
    let data = points.iter().map(|p| (f64::from(p.year), p.capacity_mw)).collect();
    chart.add_series(
        Series::with_data(SeriesType::Line, data)
            .with_color(RED)
            .with_stroke_width(3.0)
            .with_marker(Marker::Circle),
    );
    for i in annotation_indices(points.len()) {
        let p = points[i];
        chart.add_annotation(
            Annotation::at(f64::from(p.year), p.capacity_mw, format!("{} MW", p.capacity_mw as i64))
                .offset(0.0, 15.0)
                .bold(),
        );
    }
    chart.add_text_box(TextBox::new(format!("CAGR: {:.2}%", rate * 100.0), (0.05, 0.05), BoxAnchor::BottomLeft));

    chart.autoscale_axes(Y_MARGIN);
    chart.x_axis.label = "Year".into();
    chart.x_axis.ticks = TickSpec::StepFrom { origin: f64::from(first.year), step: 2.0 };
    chart.y_axis.label = "Installed Capacity (MW)".into();
    Ok(Figure::single(chart))
}
