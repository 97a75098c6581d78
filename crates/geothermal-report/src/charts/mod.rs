// File: crates/geothermal-report/src/charts/mod.rs
// Summary: One module per chart topic; each derives its statistics and builds a Figure.

pub mod capacity;
pub mod countries;
pub mod investment;
pub mod potential;
pub mod technology;
pub mod working_fluid;

use chart_core::{hex, Chart, Color, Series};

pub const RED: Color = hex(0xd62728);
pub const BLUE: Color = hex(0x1f77b4);
pub const ORANGE: Color = hex(0xff7f0e);
pub const MAROON: Color = hex(0x800000);
pub const DARK_GREEN: Color = hex(0x006400);
pub const GREEN: Color = hex(0x008000);
/// Black at 70% opacity, for mean reference lines.
pub const AVERAGE_LINE: Color = Color::from_argb(179, 0, 0, 0);

/// Y padding used by every panel.
pub(crate) const Y_MARGIN: f64 = 0.1;

/// Categorical bar panel with rotated labels.
pub(crate) fn bar_panel<'a>(
    title: &str,
    y_label: &str,
    names: impl IntoIterator<Item = &'a str>,
    bars: Series,
) -> Chart {
    let mut chart = Chart::new().with_title(title).with_categories(names);
    chart.y_axis.label = y_label.to_string();
    chart.rotate_x_labels = true;
    chart.add_series(bars);
    chart
}
