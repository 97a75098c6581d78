// File: crates/geothermal-report/src/charts/technology.rs
// Summary: Capacity factor and LCOE bars per technology, geothermal highlighted.

use chart_core::{Color, Figure, Series, SeriesType};

use super::{bar_panel, BLUE, RED, Y_MARGIN};
use crate::data::{TechnologyRecord, HIGHLIGHT_TECHNOLOGY};

/// `true` for the entry whose label is exactly the highlighted technology.
pub fn highlight_flags(records: &[TechnologyRecord]) -> Vec<bool> {
    records.iter().map(|r| r.name == HIGHLIGHT_TECHNOLOGY).collect()
}

fn bar_colors(records: &[TechnologyRecord]) -> Vec<Color> {
    highlight_flags(records).into_iter().map(|hot| if hot { RED } else { BLUE }).collect()
}

pub fn figure(records: &[TechnologyRecord]) -> Figure {
    let names = records.iter().map(|r| r.name);
    let colors = bar_colors(records);

    let factors: Vec<f64> = records.iter().map(|r| r.capacity_factor_pct).collect();
    let mut left = bar_panel(
        "Capacity Factors by Technology (2020)",
        "Capacity Factor (%)",
        names.clone(),
        Series::from_values(SeriesType::Bar, &factors).with_color(BLUE).with_point_colors(colors.clone()),
    );
    left.autoscale_axes(Y_MARGIN);

    let lcoe: Vec<f64> = records.iter().map(|r| r.lcoe_usd_per_mwh).collect();
    let mut right = bar_panel(
        "Levelized Cost of Energy (2020)",
        "LCOE (USD/MWh)",
        names,
        Series::from_values(SeriesType::Bar, &lcoe).with_color(BLUE).with_point_colors(colors),
    );
    right.autoscale_axes(Y_MARGIN);

    Figure::row(vec![left, right])
}
