// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests writing PNGs.

use chart_core::{Axis, Chart, Figure, RenderOptions, Series, SeriesType};

const PNG_MAGIC: [u8; 4] = [137, 80, 78, 71];

fn small_opts() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 200;
    opts.scale = 1.0;
    opts.draw_labels = false;
    opts
}

#[test]
fn render_smoke_png() {
    // Minimal data: tiny line series
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(
        SeriesType::Line,
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
    ));

    let opts = small_opts();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all("target/test_out").expect("create output dir");
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&PNG_MAGIC), "should be PNG header");
}

#[test]
fn render_into_missing_directory_fails() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 1.0), (1.0, 2.0)]));
    chart.autoscale_axes(0.1);

    let dir = std::path::PathBuf::from("target/test_out/not_created");
    let _ = std::fs::remove_dir_all(&dir);
    let out = dir.join("chart.png");
    assert!(Figure::single(chart).render_to_png(&small_opts(), &out).is_err());
    assert!(!dir.exists(), "rendering must not create directories");
}

#[test]
fn scale_multiplies_device_size() {
    let mut chart = Chart::new().with_categories(["a", "b"]);
    chart.add_series(Series::from_values(SeriesType::Bar, &[1.0, 2.0]));
    chart.autoscale_axes(0.05);

    let mut opts = small_opts();
    opts.scale = 2.0;
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (640, 400));
}

#[test]
fn empty_figure_is_an_error() {
    let figure = Figure::row(Vec::new());
    assert!(figure.render_to_png_bytes(&small_opts()).is_err());
}

#[test]
fn row_figure_with_labels_renders() {
    let mut left = Chart::new().with_title("Left").with_categories(["one", "two", "three"]);
    left.rotate_x_labels = true;
    left.add_series(Series::from_values(SeriesType::Bar, &[3.0, 1.0, 2.0]).with_label("bars"));
    left.autoscale_axes(0.1);

    let mut right = Chart::new().with_title("Right");
    right.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 1.0), (1.0, 4.0)]));
    right.autoscale_axes(0.1);

    let mut opts = small_opts();
    opts.draw_labels = true;
    let bytes = Figure::row(vec![left, right]).render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&PNG_MAGIC));
}
