// File: crates/geothermal-report/tests/figures.rs
// Purpose: Figure structure for each chart topic (no rendering).

use approx::assert_relative_eq;
use chart_core::{PanelLayout, SeriesType, YAxisSide};
use geothermal_report::charts::{
    capacity, countries, investment, potential, technology, working_fluid, AVERAGE_LINE, BLUE, RED,
};
use geothermal_report::data::{
    resource_temperatures_c, RegionRecord, CAPACITY_TREND, INVESTMENT, REGIONS, TECHNOLOGIES,
    TOP_COUNTRIES, WORKING_FLUIDS,
};
use geothermal_report::noise::make_rng;
use geothermal_report::StatsError;

#[test]
fn only_geothermal_is_highlighted() {
    let flags = technology::highlight_flags(TECHNOLOGIES);
    assert_eq!(flags.iter().filter(|f| **f).count(), 1);
    let idx = flags.iter().position(|f| *f).unwrap();
    assert_eq!(TECHNOLOGIES[idx].name, "Geothermal");

    let fig = technology::figure(TECHNOLOGIES);
    assert_eq!(fig.layout, PanelLayout::Row);
    assert_eq!(fig.panels.len(), 2);
    for panel in &fig.panels {
        let colors = &panel.series[0].point_colors;
        assert_eq!(colors.len(), TECHNOLOGIES.len());
        for (i, color) in colors.iter().enumerate() {
            assert_eq!(*color, if i == idx { RED } else { BLUE });
        }
    }
}

#[test]
fn highlight_requires_exact_label() {
    let mut records = TECHNOLOGIES.to_vec();
    records[4].name = "geothermal";
    assert!(technology::highlight_flags(&records).iter().all(|f| !f));
}

#[test]
fn capacity_annotations_at_quartile_points() {
    assert_eq!(capacity::annotation_indices(CAPACITY_TREND.len()), vec![0, 5, 10, 15]);
    assert_eq!(capacity::annotation_indices(1), vec![0]);
    assert!(capacity::annotation_indices(0).is_empty());

    let fig = capacity::figure(CAPACITY_TREND).expect("figure");
    let chart = &fig.panels[0];
    let texts: Vec<&str> = chart.annotations.iter().map(|a| a.text.as_str()).collect();
    assert_eq!(texts, vec!["8686 MW", "10121 MW", "11846 MW", "15406 MW"]);
    assert_eq!(chart.text_boxes[0].text, "CAGR: 3.89%");
}

#[test]
fn country_panels_carry_mean_reference_lines() {
    let fig = countries::figure(TOP_COUNTRIES).expect("figure");
    assert_eq!(fig.layout, PanelLayout::Column);
    let top = &fig.panels[0];
    assert_eq!(top.ref_lines[0].y, 8633.0);
    assert_eq!(top.ref_lines[0].label.as_deref(), Some("Average: 8633 GWh"));
    assert_eq!(top.ref_lines[0].color, Some(AVERAGE_LINE));
    assert_eq!(fig.panels[1].ref_lines[0].label.as_deref(), Some("Average: 1305 MW"));
    assert_eq!(top.categories.as_ref().map(Vec::len), Some(10));
}

#[test]
fn investment_uses_two_axes() {
    let fig = investment::figure(INVESTMENT).expect("figure");
    let chart = &fig.panels[0];
    assert!(chart.y2_axis.is_some());
    assert_eq!(chart.series[0].series_type, SeriesType::Bar);
    assert_eq!(chart.series[1].y_axis, YAxisSide::Secondary);
    let y2 = chart.y2_axis.as_ref().unwrap();
    assert!(y2.min < -110.0);
    assert_eq!(chart.text_boxes[0].text, "Avg. Investment: $4.6M per MW");
}

#[test]
fn regions_sorted_by_potential() {
    let rows = potential::utilization_table(REGIONS).expect("table");
    assert_eq!(rows.first().map(|r| (r.name, r.potential_gw)), Some(("North America", 35.0)));
    assert_eq!(rows.last().map(|r| (r.name, r.potential_gw)), Some(("Middle East", 2.0)));
    assert!(rows.windows(2).all(|w| w[0].potential_gw >= w[1].potential_gw));
    let europe = rows.iter().find(|r| r.name == "Europe").unwrap();
    assert_relative_eq!(europe.utilization_pct, 3.3 / 18.0 * 100.0, epsilon = 1e-12);

    let fig = potential::figure(REGIONS).expect("figure");
    assert_eq!(fig.panels[0].series.len(), 2);
    assert_eq!(fig.panels[1].annotations[0].text, "9.1%");
}

#[test]
fn zero_potential_is_reported() {
    let records = [RegionRecord { name: "Nowhere", potential_gw: 0.0, installed_gw: 1.0 }];
    assert_eq!(
        potential::utilization_table(&records),
        Err(StatsError::ZeroPotential { region: "Nowhere".into() })
    );
}

#[test]
fn seeded_efficiency_curves_are_reproducible() {
    let temps = resource_temperatures_c();
    assert_eq!(temps.len(), 12);
    assert_eq!((temps[0], temps[11]), (80.0, 190.0));

    let a = working_fluid::curves(WORKING_FLUIDS, &temps, &mut make_rng(Some(7)));
    let b = working_fluid::curves(WORKING_FLUIDS, &temps, &mut make_rng(Some(7)));
    let c = working_fluid::curves(WORKING_FLUIDS, &temps, &mut make_rng(Some(8)));
    assert_eq!(a, b);
    assert_ne!(a, c);

    for (curve, fluid) in a.iter().zip(WORKING_FLUIDS) {
        let base = working_fluid::baseline_efficiency(fluid, &temps);
        // 0.3 std dev noise: 2 units is far beyond six sigma
        assert!(curve.efficiency_pct.iter().zip(&base).all(|(v, b)| (v - b).abs() < 2.0));
    }

    let fig = working_fluid::figure(&a);
    let chart = &fig.panels[0];
    assert_eq!(chart.series.len(), 4);
    assert_eq!(chart.legend.as_ref().and_then(|l| l.title.as_deref()), Some("Working Fluids"));
    assert!(chart.text_boxes[0].text.starts_with("Key Findings:"));
}

#[test]
fn baseline_efficiency_is_linear_in_temperature() {
    let isopentane = WORKING_FLUIDS.iter().find(|f| f.name == "Isopentane").unwrap();
    let v = working_fluid::baseline_efficiency(isopentane, &[80.0, 190.0]);
    assert_relative_eq!(v[0], 5.2, epsilon = 1e-12);
    assert_relative_eq!(v[1], 16.2, epsilon = 1e-12);
}
