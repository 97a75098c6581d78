// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic small charts to PNG bytes (labels off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note; each test still checks sampled pixels of the decoded image.
// Plot area at 400x260 with default insets: x 84..372, y 24..204.

use chart_core::{Axis, Chart, Figure, Marker, RefLine, RenderOptions, Series, SeriesType, hex};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

const WHITE: [u8; 3] = [0xff, 0xff, 0xff];
const BLUE: [u8; 3] = [0x1f, 0x77, 0xb4];
const ORANGE: [u8; 3] = [0xff, 0x7f, 0x0e];
const RED: [u8; 3] = [0xd6, 0x27, 0x28];

fn rgb_at(bytes: &[u8], x: u32, y: u32) -> [u8; 3] {
    let img = image::load_from_memory(bytes).expect("decode").to_rgba8();
    let p = img.get_pixel(x, y).0;
    [p[0], p[1], p[2]]
}

fn opts() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.width = 400;
    opts.height = 260;
    opts.scale = 1.0;
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    opts
}

#[test]
fn golden_line_with_markers() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(
        Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.5), (4.0, 1.0)])
            .with_marker(Marker::Circle),
    );
    let bytes = chart.render_to_png_bytes(&opts()).expect("render");

    // markers at (1, 1) and (3, 1.5), first palette color
    assert_eq!(rgb_at(&bytes, 156, 159), BLUE);
    assert_eq!(rgb_at(&bytes, 300, 136), BLUE);
    assert_eq!(rgb_at(&bytes, 10, 10), WHITE);
    write_or_compare("line_markers.png", &bytes);
}

#[test]
fn golden_grouped_bars() {
    let mut chart = Chart::new().with_categories(["a", "b", "c"]);
    chart.add_series(Series::from_values(SeriesType::Bar, &[35.0, 6.0, 12.0]));
    chart.add_series(Series::from_values(SeriesType::Bar, &[3.2, 0.7, 0.9]));
    chart.add_ref_line(RefLine::horizontal(10.0));
    chart.autoscale_axes(0.05);
    let bytes = chart.render_to_png_bytes(&opts()).expect("render");

    // y spans 0..36.75; category "a" holds both bars side by side
    assert_eq!(rgb_at(&bytes, 112, 100), BLUE);
    assert_eq!(rgb_at(&bytes, 150, 196), ORANGE);
    assert_eq!(rgb_at(&bytes, 150, 100), WHITE);

    // dashed reference line at y = 10 (px 155) crosses the blue bar of "c"
    assert_eq!(rgb_at(&bytes, 295, 170), BLUE);
    let crossed = rgb_at(&bytes, 295, 155);
    assert!(crossed.iter().zip(BLUE).all(|(got, bar)| *got < bar), "{crossed:?}");
    write_or_compare("grouped_bars.png", &bytes);
}

#[test]
fn golden_column_figure() {
    let mut top = Chart::new().with_categories(["x", "y"]);
    top.add_series(Series::from_values(SeriesType::Bar, &[2.0, 1.0]).with_point_colors(vec![hex(0xd62728)]));
    top.autoscale_axes(0.1);
    let mut bottom = Chart::new();
    bottom.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 2.0), (1.0, 1.0)]).with_marker(Marker::Diamond));
    bottom.autoscale_axes(0.1);
    let bytes = Figure::column(vec![top, bottom]).render_to_png_bytes(&opts()).expect("render");

    // top panel plot y 24..66: the override colors only the first bar
    assert_eq!(rgb_at(&bytes, 150, 50), RED);
    assert_eq!(rgb_at(&bytes, 300, 55), BLUE);
    // bottom panel plot y 162..204: diamond at the first point
    assert_eq!(rgb_at(&bytes, 92, 165), BLUE);
    // gap between the panels
    assert_eq!(rgb_at(&bytes, 200, 130), WHITE);
    write_or_compare("column_figure.png", &bytes);
}

#[test]
fn highlighted_bar_uses_override_color() {
    let mut chart = Chart::new().with_categories(["plain", "highlight"]);
    chart.grid_dashed = false;
    chart.add_series(
        Series::from_values(SeriesType::Bar, &[1.0, 1.0])
            .with_color(hex(0x1f77b4))
            .with_point_colors(vec![hex(0x1f77b4), hex(0xd62728)]),
    );
    chart.autoscale_axes(0.0);
    let bytes = chart.render_to_png_bytes(&opts()).expect("render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();

    // sample the middle of each bar's slot
    let plot_left = 84.0f32;
    let plot_right = 400.0 - 28.0;
    let slot = (plot_right - plot_left) / 2.0;
    let y = 150;
    let left = img.get_pixel((plot_left + slot * 0.5) as u32, y);
    let right = img.get_pixel((plot_left + slot * 1.5) as u32, y);
    assert_eq!(&left.0[..3], &BLUE);
    assert_eq!(&right.0[..3], &RED);
}
