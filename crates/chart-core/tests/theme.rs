// File: crates/chart-core/tests/theme.rs
// Purpose: Theme presets, lookup by name, and theme colors reaching the raster.

use chart_core::theme::{find, presets};
use chart_core::{Chart, RenderOptions, Series, SeriesType, Theme};

#[test]
fn lookup_is_case_insensitive_with_light_fallback() {
    let names: Vec<&str> = presets().iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["light", "dark"]);

    assert_eq!(find("DARK").name, "dark");
    assert_eq!(find("Light").name, "light");
    assert_eq!(find("solarized").name, "light");
    assert_eq!(Theme::default().name, "light");
}

#[test]
fn palette_cycles() {
    let theme = Theme::light();
    assert_eq!(theme.palette_color(0), theme.palette_color(10));
    assert_ne!(theme.palette_color(0), theme.palette_color(1));
}

#[test]
fn dark_theme_fills_background_and_plot() {
    let mut chart = Chart::new().with_categories(["a", "b"]);
    chart.add_series(Series::from_values(SeriesType::Bar, &[1.0, 0.5]));
    chart.autoscale_axes(0.1);

    let mut opts = RenderOptions::default();
    opts.width = 400;
    opts.height = 260;
    opts.scale = 1.0;
    opts.draw_labels = false;
    opts.theme = find("dark");

    let bytes = chart.render_to_png_bytes(&opts).expect("render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    // outside the plot area
    assert_eq!(&img.get_pixel(10, 10).0[..3], &[18, 18, 20]);
    // plot area above the shorter bar, between grid lines
    assert_eq!(&img.get_pixel(330, 30).0[..3], &[24, 24, 28]);
}
