// File: crates/geothermal-report/src/charts/countries.rs
// Summary: Top countries by generation and by installed capacity, each with its mean line.

use chart_core::{Chart, Color, Figure, Legend, LegendPosition, RefLine, Series, SeriesType};

use super::{bar_panel, AVERAGE_LINE, DARK_GREEN, MAROON, Y_MARGIN};
use crate::data::CountryRecord;
use crate::error::StatsError;
use crate::stats::mean;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountryAverages {
    pub generation_gwh: f64,
    pub installed_mw: f64,
}

pub fn averages(records: &[CountryRecord]) -> Result<CountryAverages, StatsError> {
    let generation: Vec<f64> = records.iter().map(|r| r.generation_gwh).collect();
    let installed: Vec<f64> = records.iter().map(|r| r.installed_mw).collect();
    Ok(CountryAverages { generation_gwh: mean(&generation)?, installed_mw: mean(&installed)? })
}

fn panel(records: &[CountryRecord], title: String, y_label: &str, values: &[f64], color: Color, avg: f64, unit: &str) -> Chart {
    let mut chart = bar_panel(
        &title,
        y_label,
        records.iter().map(|r| r.name),
        Series::from_values(SeriesType::Bar, values).with_color(color),
    );
    chart.add_ref_line(
        RefLine::horizontal(avg)
            .with_label(format!("Average: {:.0} {}", avg, unit))
            .with_color(AVERAGE_LINE),
    );
    chart.legend = Some(Legend::new(LegendPosition::TopRight));
    chart.autoscale_axes(Y_MARGIN);
    chart
}

pub fn figure(records: &[CountryRecord]) -> Result<Figure, StatsError> {
    let avg = averages(records)?;
    log::info!(
        "country averages: {:.1} GWh generation, {:.1} MW installed",
        avg.generation_gwh,
        avg.installed_mw
    );
    let n = records.len();

    let generation: Vec<f64> = records.iter().map(|r| r.generation_gwh).collect();
    let top = panel(
        records,
        format!("Top {} Countries by Geothermal Electricity Generation (2019)", n),
        "Electricity Generation (GWh)",
        &generation,
        MAROON,
        avg.generation_gwh,
        "GWh",
    );

    let installed: Vec<f64> = records.iter().map(|r| r.installed_mw).collect();
    let bottom = panel(
        records,
        format!("Top {} Countries by Installed Geothermal Capacity (2019)", n),
        "Installed Capacity (MW)",
        &installed,
        DARK_GREEN,
        avg.installed_mw,
        "MW",
    );

    Ok(Figure::column(vec![top, bottom]))
}
