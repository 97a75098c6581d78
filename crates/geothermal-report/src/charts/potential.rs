// File: crates/geothermal-report/src/charts/potential.rs
// Summary: Regional potential vs installed capacity, and utilization percentages.

use std::cmp::Ordering;

use chart_core::{Annotation, Figure, Legend, LegendPosition, Series, SeriesType};

use super::{bar_panel, BLUE, GREEN, ORANGE, Y_MARGIN};
use crate::data::RegionRecord;
use crate::error::StatsError;
use crate::stats::percent_of;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionUtilization {
    pub name: &'static str,
    pub potential_gw: f64,
    pub installed_gw: f64,
    pub utilization_pct: f64,
}

/// Utilization per region, sorted descending by potential (ties keep input order).
pub fn utilization_table(records: &[RegionRecord]) -> Result<Vec<RegionUtilization>, StatsError> {
    let mut rows = records
        .iter()
        .map(|r| {
            let utilization_pct = percent_of(r.installed_gw, r.potential_gw)
                .ok_or_else(|| StatsError::ZeroPotential { region: r.name.to_string() })?;
            Ok(RegionUtilization {
                name: r.name,
                potential_gw: r.potential_gw,
                installed_gw: r.installed_gw,
                utilization_pct,
            })
        })
        .collect::<Result<Vec<_>, StatsError>>()?;
    rows.sort_by(|a, b| b.potential_gw.partial_cmp(&a.potential_gw).unwrap_or(Ordering::Equal));
    Ok(rows)
}

pub fn figure(records: &[RegionRecord]) -> Result<Figure, StatsError> {
    let rows = utilization_table(records)?;
    if rows.is_empty() {
        return Err(StatsError::EmptySeries);
    }
    let names = || rows.iter().map(|r| r.name);

    let potential: Vec<f64> = rows.iter().map(|r| r.potential_gw).collect();
    let installed: Vec<f64> = rows.iter().map(|r| r.installed_gw).collect();
    let mut top = bar_panel(
        "Geothermal Potential vs. Installed Capacity by Region",
        "Capacity (GW)",
        names(),
        Series::from_values(SeriesType::Bar, &potential).with_label("Potential (GW)").with_color(BLUE),
    );
    top.add_series(Series::from_values(SeriesType::Bar, &installed).with_label("Installed (GW)").with_color(ORANGE));
    top.legend = Some(Legend::new(LegendPosition::TopRight));
    top.autoscale_axes(Y_MARGIN);

    let utilization: Vec<f64> = rows.iter().map(|r| r.utilization_pct).collect();
    let mut bottom = bar_panel(
        "Geothermal Potential Utilization by Region",
        "Utilization (%)",
        names(),
        Series::from_values(SeriesType::Bar, &utilization).with_color(GREEN),
    );
    for (i, pct) in utilization.iter().enumerate() {
        bottom.add_annotation(Annotation::at(i as f64, *pct, format!("{:.1}%", pct)).offset(0.0, 4.0));
    }
    bottom.autoscale_axes(Y_MARGIN);

    if let Some(best) = rows.iter().max_by(|a, b| a.utilization_pct.partial_cmp(&b.utilization_pct).unwrap_or(Ordering::Equal)) {
        log::info!("highest utilization: {} at {:.1}%", best.name, best.utilization_pct);
    }
    Ok(Figure::column(vec![top, bottom]))
}
