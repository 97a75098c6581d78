// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over mixed series types and axes.

use chart_core::{Chart, RefLine, Series, SeriesType, ViewState};

#[test]
fn autoscale_line_pads_y_only() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 10.0), (5.0, 30.0)]));
    chart.autoscale_axes(0.1);

    assert!(chart.x_axis.min <= 0.0 && chart.x_axis.max >= 5.0);
    assert!((chart.y_axis.min - 8.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 32.0).abs() < 1e-9);
}

#[test]
fn bars_keep_zero_baseline() {
    let mut chart = Chart::new().with_categories(["a", "b", "c"]);
    chart.add_series(Series::from_values(SeriesType::Bar, &[40.0, 60.0, 80.0]));
    chart.autoscale_axes(0.1);

    assert_eq!(chart.y_axis.min, 0.0);
    assert!(chart.y_axis.max > 80.0);
    // categorical slots are centered on integers
    assert_eq!(chart.x_axis.min, -0.5);
    assert_eq!(chart.x_axis.max, 2.5);
}

#[test]
fn secondary_axis_scaled_separately() {
    let mut chart = Chart::new();
    chart.y2_axis = Some(chart_core::Axis::new("right", 0.0, 1.0));
    chart.add_series(Series::with_data(SeriesType::Bar, vec![(2010.0, 1600.0), (2011.0, 2900.0)]));
    chart.add_series(
        Series::with_data(SeriesType::Line, vec![(2010.0, 222.0), (2011.0, -110.0)]).on_secondary_axis(),
    );
    chart.autoscale_axes(0.05);

    let y2 = chart.y2_axis.as_ref().expect("secondary axis");
    assert!(y2.min < -110.0 && y2.max > 222.0);
    assert_eq!(chart.y_axis.min, 0.0);
    assert!(chart.y_axis.max >= 2900.0);
    // bars on a numeric axis get half a slot on each side
    assert!(chart.x_axis.min <= 2009.5 && chart.x_axis.max >= 2011.5);
}

#[test]
fn ref_lines_are_included() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 1.0), (1.0, 2.0)]));
    chart.add_ref_line(RefLine::horizontal(10.0));
    let view = ViewState::from_chart(&chart, 0.0);
    assert_eq!(view.y_max, 10.0);
}

#[test]
fn empty_chart_falls_back_to_unit_range() {
    let chart = Chart::new();
    let view = ViewState::from_chart(&chart, 0.1);
    assert_eq!((view.y_min, view.y_max), (0.0, 1.0));
    assert!(view.y2.is_none());
}
