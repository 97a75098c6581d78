// File: crates/geothermal-report/src/charts/investment.rs
// Summary: Annual investment bars against net new capacity on a secondary axis.

use chart_core::{Axis, BoxAnchor, Chart, Figure, Marker, Series, SeriesType, TextBox, TickSpec};

use super::{BLUE, RED, Y_MARGIN};
use crate::data::InvestmentRecord;
use crate::error::StatsError;
use crate::stats::{mean, positive_ratios};

/// Million USD per MW added, for years that added capacity.
pub fn investment_per_mw(records: &[InvestmentRecord]) -> Result<Vec<f64>, StatsError> {
    let investment: Vec<f64> = records.iter().map(|r| r.investment_musd).collect();
    let added: Vec<f64> = records.iter().map(|r| r.new_capacity_mw).collect();
    positive_ratios(&investment, &added)
}

pub fn average_investment_per_mw(records: &[InvestmentRecord]) -> Result<f64, StatsError> {
    mean(&investment_per_mw(records)?)
}

pub fn figure(records: &[InvestmentRecord]) -> Result<Figure, StatsError> {
    let avg = average_investment_per_mw(records)?;
    let skipped = records.iter().filter(|r| r.new_capacity_mw <= 0.0).count();
    log::info!("average investment {:.2} MUSD/MW ({} years without net additions skipped)", avg, skipped);

    let (first, last) = (records[0].year, records[records.len() - 1].year);
    let mut chart = Chart::new().with_title(format!(
        "Geothermal Energy Investment and Capacity Addition ({}-{})",
        first, last
    ));
    chart.y2_axis = Some(Axis::new("New Capacity Added (MW)", 0.0, 1.0).with_label_color(BLUE));

    let bars = records.iter().map(|r| (f64::from(r.year), r.investment_musd)).collect();
    chart.add_series(Series::with_data(SeriesType::Bar, bars).with_color(RED).with_alpha(0.7));
    let added = records.iter().map(|r| (f64::from(r.year), r.new_capacity_mw)).collect();
    chart.add_series(
        Series::with_data(SeriesType::Line, added)
            .with_color(BLUE)
            .with_stroke_width(3.0)
            .with_marker(Marker::Circle)
            .on_secondary_axis(),
    );
    chart.add_text_box(TextBox::new(
        format!("Avg. Investment: ${:.1}M per MW", avg),
        (0.05, 0.95),
        BoxAnchor::TopLeft,
    ));

    chart.autoscale_axes(Y_MARGIN);
    chart.x_axis.label = "Year".into();
    chart.x_axis.ticks = TickSpec::Step(1.0);
    chart.y_axis.label = "Annual Investment (Million USD)".into();
    chart.y_axis.label_color = Some(RED);
    Ok(Figure::single(chart))
}
