// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the categorical palette.

use skia_safe as skia;

/// Build an opaque color from a `0xRRGGBB` literal.
pub const fn hex(rgb: u32) -> skia::Color {
    skia::Color::from_argb(255, ((rgb >> 16) & 0xff) as u8, ((rgb >> 8) & 0xff) as u8, (rgb & 0xff) as u8)
}

/// Same color with its alpha replaced.
pub fn with_alpha(color: skia::Color, alpha: f32) -> skia::Color {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, color.r(), color.g(), color.b())
}

/// Matplotlib "tab10" categorical colors.
pub const TAB10: [skia::Color; 10] = [
    hex(0x1f77b4),
    hex(0xff7f0e),
    hex(0x2ca02c),
    hex(0xd62728),
    hex(0x9467bd),
    hex(0x8c564b),
    hex(0xe377c2),
    hex(0x7f7f7f),
    hex(0xbcbd22),
    hex(0x17becf),
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub reference_line: skia::Color,
    pub box_fill: skia::Color,
    pub box_border: skia::Color,
    pub palette: [skia::Color; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 222, 222, 228),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 30, 30, 40),
            tick: skia::Color::from_argb(255, 80, 80, 90),
            title: skia::Color::from_argb(255, 15, 15, 25),
            reference_line: skia::Color::from_argb(180, 0, 0, 0),
            box_fill: skia::Color::from_argb(204, 255, 255, 255),
            box_border: skia::Color::from_argb(255, 170, 170, 180),
            palette: TAB10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 245, 245, 250),
            reference_line: skia::Color::from_argb(200, 255, 230, 70),
            box_fill: skia::Color::from_argb(210, 30, 30, 36),
            box_border: skia::Color::from_argb(255, 90, 90, 100),
            palette: TAB10,
        }
    }

    /// Palette color for the `i`-th series, cycling.
    pub fn palette_color(&self, i: usize) -> skia::Color {
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
