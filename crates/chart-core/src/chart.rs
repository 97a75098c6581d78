// File: crates/chart-core/src/chart.rs
// Summary: Chart panel model and its Skia drawing pipeline (grid, bars, lines, overlays, text).

use anyhow::Result;
use skia_safe as skia;

use crate::figure::{encode_panels, PanelLayout};
use crate::geometry::RectF;
use crate::overlay::{Annotation, BoxAnchor, Legend, LegendPosition, RefLine, TextBox};
use crate::scale::LinearScale;
use crate::series::{Marker, Series, SeriesType, YAxisSide};
use crate::text::{Align, TextShaper, TextSpec, VAlign};
use crate::theme::{with_alpha, Theme};
use crate::types::{Insets, HEIGHT, SCALE, WIDTH};
use crate::view::ViewState;
use crate::Axis;

/// Fraction of a category slot covered by its bar group.
const BAR_GROUP_WIDTH: f64 = 0.8;
const TITLE_HEIGHT: f32 = 34.0;
const ROTATED_LABEL_ROOM: u32 = 64;
const SECONDARY_AXIS_ROOM: u32 = 64;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Device pixels per logical pixel.
    pub scale: f32,
    /// Margins of each panel's plot area.
    pub insets: Insets,
    pub theme: Theme,
    /// When false no text is drawn (deterministic pixels across platforms).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            scale: SCALE,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// One plotting panel.
#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub y2_axis: Option<Axis>,
    /// Categorical X axis: category `i` sits at `x = i`.
    pub categories: Option<Vec<String>>,
    pub rotate_x_labels: bool,
    pub ref_lines: Vec<RefLine>,
    pub annotations: Vec<Annotation>,
    pub text_boxes: Vec<TextBox>,
    pub legend: Option<Legend>,
    pub grid_dashed: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            y2_axis: None,
            categories: None,
            rotate_x_labels: false,
            ref_lines: Vec::new(),
            annotations: Vec::new(),
            text_boxes: Vec::new(),
            legend: None,
            grid_dashed: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_ref_line(&mut self, line: RefLine) {
        self.ref_lines.push(line);
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    pub fn add_text_box(&mut self, text_box: TextBox) {
        self.text_boxes.push(text_box);
    }

    pub fn has_bars(&self) -> bool {
        self.series.iter().any(|s| s.series_type == SeriesType::Bar)
    }

    /// Fit axis ranges to the data; `margin` pads Y by that fraction of its span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Render this chart alone to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        crate::figure::write_png(output_png_path.as_ref(), &bytes)
    }

    /// Render this chart alone to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        encode_panels(&[self], PanelLayout::Single, opts)
    }

    /// Draw the panel into `frame` (logical pixels).
    pub(crate) fn draw(
        &self,
        canvas: &skia::Canvas,
        frame: RectF,
        opts: &RenderOptions,
        shaper: Option<&TextShaper>,
    ) {
        let theme = &opts.theme;
        let plot = self.plot_rect(frame, opts, shaper.is_some());

        let xs = LinearScale::new(plot.left, plot.right, self.x_axis.min, self.x_axis.max);
        let ys = LinearScale::new(plot.bottom, plot.top, self.y_axis.min, self.y_axis.max);
        let ys2 = self
            .y2_axis
            .as_ref()
            .map(|a| LinearScale::new(plot.bottom, plot.top, a.min, a.max));
        let scale_for = |side: YAxisSide| -> LinearScale {
            match side {
                YAxisSide::Primary => ys,
                YAxisSide::Secondary => ys2.unwrap_or(ys),
            }
        };

        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(plot.to_skia(), &bg);

        draw_grid(canvas, plot, self, &xs, &ys, theme);

        // Bars first so lines stay visible on dual-axis charts
        let bar_count = self.series.iter().filter(|s| s.series_type == SeriesType::Bar).count();
        let mut bar_slot = 0usize;
        for (i, s) in self.series.iter().enumerate() {
            if s.series_type == SeriesType::Bar {
                draw_bar_series(canvas, s, bar_slot, bar_count, &xs, &scale_for(s.y_axis), theme.palette_color(i));
                bar_slot += 1;
            }
        }
        for (i, s) in self.series.iter().enumerate() {
            if s.series_type == SeriesType::Line {
                draw_line_series(canvas, s, &xs, &scale_for(s.y_axis), theme.palette_color(i));
            }
        }
        for line in &self.ref_lines {
            draw_ref_line(canvas, plot, line, &scale_for(line.y_axis), theme);
        }

        draw_axes(canvas, plot, self.y2_axis.is_some(), theme);

        if let Some(shaper) = shaper {
            self.draw_text(canvas, frame, plot, &xs, &ys, ys2.as_ref(), theme, shaper);
        }
    }

    fn plot_rect(&self, frame: RectF, opts: &RenderOptions, labels: bool) -> RectF {
        let mut insets = opts.insets;
        if self.rotate_x_labels {
            insets.bottom += ROTATED_LABEL_ROOM;
        }
        if self.y2_axis.is_some() {
            insets.right += SECONDARY_AXIS_ROOM;
        }
        let mut frame = frame;
        if labels && self.title.is_some() {
            frame.top += TITLE_HEIGHT;
        }
        frame.inset(&insets)
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &self,
        canvas: &skia::Canvas,
        frame: RectF,
        plot: RectF,
        xs: &LinearScale,
        ys: &LinearScale,
        ys2: Option<&LinearScale>,
        theme: &Theme,
        shaper: &TextShaper,
    ) {
        let tick_color = |axis: &Axis| axis.label_color.unwrap_or(theme.tick);
        let label_color = |axis: &Axis| axis.label_color.unwrap_or(theme.axis_label);

        // Y ticks
        let spec = TextSpec::new(12.0, tick_color(&self.y_axis));
        for v in self.y_axis.tick_values() {
            let text = self.y_axis.format.format(v);
            shaper.draw(canvas, &text, (plot.left - 6.0, ys.to_px(v)), &spec, Align::Right, VAlign::Middle);
        }
        if let (Some(axis), Some(ys2)) = (&self.y2_axis, ys2) {
            let spec = TextSpec::new(12.0, tick_color(axis));
            for v in axis.tick_values() {
                let text = axis.format.format(v);
                shaper.draw(canvas, &text, (plot.right + 6.0, ys2.to_px(v)), &spec, Align::Left, VAlign::Middle);
            }
        }

        // X ticks
        let spec = TextSpec::new(12.0, tick_color(&self.x_axis));
        match &self.categories {
            Some(cats) => {
                for (i, name) in cats.iter().enumerate() {
                    let x = xs.to_px(i as f64);
                    if self.rotate_x_labels {
                        shaper.draw_rotated(canvas, name, (x, plot.bottom + 6.0), -45.0, &spec, Align::Right, VAlign::Top);
                    } else {
                        shaper.draw(canvas, name, (x, plot.bottom + 6.0), &spec, Align::Center, VAlign::Top);
                    }
                }
            }
            None => {
                for v in self.x_axis.tick_values() {
                    let text = self.x_axis.format.format(v);
                    shaper.draw(canvas, &text, (xs.to_px(v), plot.bottom + 6.0), &spec, Align::Center, VAlign::Top);
                }
            }
        }

        // Axis labels
        if !self.x_axis.label.is_empty() {
            let spec = TextSpec::new(14.0, label_color(&self.x_axis));
            shaper.draw(canvas, &self.x_axis.label, (plot.center_x(), frame.bottom - 6.0), &spec, Align::Center, VAlign::Bottom);
        }
        if !self.y_axis.label.is_empty() {
            let spec = TextSpec::new(14.0, label_color(&self.y_axis));
            shaper.draw_rotated(canvas, &self.y_axis.label, (frame.left + 4.0, plot.center_y()), -90.0, &spec, Align::Center, VAlign::Top);
        }
        if let Some(axis) = self.y2_axis.as_ref().filter(|a| !a.label.is_empty()) {
            let spec = TextSpec::new(14.0, label_color(axis));
            shaper.draw_rotated(canvas, &axis.label, (frame.right - 4.0, plot.center_y()), -90.0, &spec, Align::Center, VAlign::Bottom);
        }

        if let Some(title) = &self.title {
            let spec = TextSpec::new(17.0, theme.title).bold();
            shaper.draw(canvas, title, (plot.center_x(), frame.top + 8.0), &spec, Align::Center, VAlign::Top);
        }

        for a in &self.annotations {
            let ys = match a.y_axis {
                YAxisSide::Secondary => ys2.unwrap_or(ys),
                YAxisSide::Primary => ys,
            };
            let mut spec = TextSpec::new(12.0, theme.axis_label);
            if a.bold {
                spec = spec.bold();
            }
            let anchor = (xs.to_px(a.x) + a.offset_px.0, ys.to_px(a.y) - a.offset_px.1);
            shaper.draw(canvas, &a.text, anchor, &spec, Align::Center, VAlign::Bottom);
        }

        for tb in &self.text_boxes {
            draw_text_box(canvas, plot, tb, theme, shaper);
        }

        if let Some(legend) = &self.legend {
            self.draw_legend(canvas, plot, legend, theme, shaper);
        }
    }

    fn legend_entries(&self, theme: &Theme) -> Vec<(String, skia::Color, LegendKey)> {
        let mut out = Vec::new();
        for (i, s) in self.series.iter().enumerate() {
            if let Some(label) = &s.label {
                let color = with_alpha(s.color.unwrap_or(theme.palette_color(i)), s.alpha);
                let key = match s.series_type {
                    SeriesType::Line => LegendKey::Line(s.marker),
                    SeriesType::Bar => LegendKey::Swatch,
                };
                out.push((label.clone(), color, key));
            }
        }
        for line in &self.ref_lines {
            if let Some(label) = &line.label {
                out.push((label.clone(), line.color.unwrap_or(theme.reference_line), LegendKey::Dashed));
            }
        }
        out
    }

    fn draw_legend(&self, canvas: &skia::Canvas, plot: RectF, legend: &Legend, theme: &Theme, shaper: &TextShaper) {
        let entries = self.legend_entries(theme);
        if entries.is_empty() {
            return;
        }
        let spec = TextSpec::new(12.0, theme.axis_label);
        let title_spec = TextSpec::new(12.0, theme.axis_label).bold();
        let row_h = 18.0;
        let key_w = 26.0;
        let pad = 8.0;

        let mut text_w = entries
            .iter()
            .map(|(label, _, _)| shaper.measure(label, &spec).0)
            .fold(0.0f32, f32::max);
        let title_rows = if let Some(title) = &legend.title {
            text_w = text_w.max(shaper.measure(title, &title_spec).0 - key_w);
            1.0
        } else {
            0.0
        };
        let w = key_w + text_w + pad * 2.0;
        let h = row_h * (entries.len() as f32 + title_rows) + pad * 2.0;
        let (left, top) = match legend.position {
            LegendPosition::TopRight => (plot.right - 8.0 - w, plot.top + 8.0),
            LegendPosition::BottomRight => (plot.right - 8.0 - w, plot.bottom - 8.0 - h),
        };
        let rect = RectF::from_ltwh(left, top, w, h);
        draw_panel_box(canvas, rect, theme);

        let mut y = rect.top + pad;
        if let Some(title) = &legend.title {
            shaper.draw(canvas, title, (rect.center_x(), y), &title_spec, Align::Center, VAlign::Top);
            y += row_h;
        }
        for (label, color, key) in &entries {
            let cy = y + row_h * 0.5;
            draw_legend_key(canvas, *key, (rect.left + pad, cy), key_w - 6.0, *color);
            shaper.draw(canvas, label, (rect.left + pad + key_w, cy), &spec, Align::Left, VAlign::Middle);
            y += row_h;
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum LegendKey {
    Line(Marker),
    Swatch,
    Dashed,
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn dashed(mut paint: skia::Paint, on: f32, off: f32) -> skia::Paint {
    paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
    paint
}

fn draw_grid(canvas: &skia::Canvas, plot: RectF, chart: &Chart, xs: &LinearScale, ys: &LinearScale, theme: &Theme) {
    let mut paint = stroke_paint(theme.grid, 1.0);
    if chart.grid_dashed {
        paint = dashed(paint, 5.0, 3.0);
    }

    // horizontals
    for v in chart.y_axis.tick_values() {
        let y = ys.to_px(v);
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
    // verticals
    let xs_ticks: Vec<f64> = match &chart.categories {
        Some(cats) => (0..cats.len()).map(|i| i as f64).collect(),
        None => chart.x_axis.tick_values(),
    };
    for v in xs_ticks {
        let x = xs.to_px(v);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: RectF, right_axis: bool, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, 1.5);
    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &paint);
    canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &paint);
    if right_axis {
        canvas.draw_line((plot.right, plot.top), (plot.right, plot.bottom), &paint);
    }
}

fn draw_bar_series(
    canvas: &skia::Canvas,
    series: &Series,
    slot: usize,
    slots: usize,
    xs: &LinearScale,
    ys: &LinearScale,
    fallback: skia::Color,
) {
    let bw = BAR_GROUP_WIDTH / slots.max(1) as f64;
    let offset = -BAR_GROUP_WIDTH * 0.5 + bw * (slot as f64 + 0.5);
    let base = 0.0f64.clamp(ys.vmin.min(ys.vmax), ys.vmin.max(ys.vmax));
    let y_base = ys.to_px(base);

    for (i, &(x, y)) in series.data_xy.iter().enumerate() {
        let cx = x + offset;
        let l = xs.to_px(cx - bw * 0.5);
        let r = xs.to_px(cx + bw * 0.5);
        let y_val = ys.to_px(y);
        let rect = skia::Rect::from_ltrb(l.min(r), y_val.min(y_base), l.max(r), y_val.max(y_base));
        let color = with_alpha(series.color_at(i, fallback), series.alpha);
        canvas.draw_rect(rect, &fill_paint(color));
    }
}

fn draw_line_series(canvas: &skia::Canvas, series: &Series, xs: &LinearScale, ys: &LinearScale, fallback: skia::Color) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }
    let color = with_alpha(series.color.unwrap_or(fallback), series.alpha);

    if data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((xs.to_px(x0), ys.to_px(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((xs.to_px(x), ys.to_px(y)));
        }
        canvas.draw_path(&path, &stroke_paint(color, series.stroke_width));
    }

    let size = (series.stroke_width * 2.5).max(5.0);
    for &(x, y) in data {
        draw_marker(canvas, series.marker, (xs.to_px(x), ys.to_px(y)), size, color);
    }
}

fn draw_marker(canvas: &skia::Canvas, marker: Marker, (cx, cy): (f32, f32), size: f32, color: skia::Color) {
    let paint = fill_paint(color);
    let h = size * 0.5;
    match marker {
        Marker::None => {}
        Marker::Circle => {
            canvas.draw_circle((cx, cy), h, &paint);
        }
        Marker::Square => {
            canvas.draw_rect(skia::Rect::from_ltrb(cx - h, cy - h, cx + h, cy + h), &paint);
        }
        Marker::Triangle => {
            let mut path = skia::Path::new();
            path.move_to((cx, cy - h * 1.15));
            path.line_to((cx + h, cy + h * 0.85));
            path.line_to((cx - h, cy + h * 0.85));
            path.close();
            canvas.draw_path(&path, &paint);
        }
        Marker::Diamond => {
            let mut path = skia::Path::new();
            path.move_to((cx, cy - h * 1.2));
            path.line_to((cx + h * 0.85, cy));
            path.line_to((cx, cy + h * 1.2));
            path.line_to((cx - h * 0.85, cy));
            path.close();
            canvas.draw_path(&path, &paint);
        }
    }
}

fn draw_ref_line(canvas: &skia::Canvas, plot: RectF, line: &RefLine, ys: &LinearScale, theme: &Theme) {
    if !ys.contains(line.y) {
        return;
    }
    let color = line.color.unwrap_or(theme.reference_line);
    let paint = dashed(stroke_paint(color, 1.5), 8.0, 5.0);
    let y = ys.to_px(line.y);
    canvas.draw_line((plot.left, y), (plot.right, y), &paint);
}

fn draw_panel_box(canvas: &skia::Canvas, rect: RectF, theme: &Theme) {
    let r = rect.to_skia();
    canvas.draw_round_rect(r, 6.0, 6.0, &fill_paint(theme.box_fill));
    canvas.draw_round_rect(r, 6.0, 6.0, &stroke_paint(theme.box_border, 1.0));
}

fn draw_text_box(canvas: &skia::Canvas, plot: RectF, tb: &TextBox, theme: &Theme, shaper: &TextShaper) {
    let spec = TextSpec::new(tb.font_size, theme.axis_label);
    let (w, h) = shaper.measure(&tb.text, &spec);
    let pad = 8.0;
    let ax = plot.left + tb.at.0 * plot.width();
    let ay = plot.bottom - tb.at.1 * plot.height();
    let rect = match tb.anchor {
        BoxAnchor::TopLeft => RectF::from_ltwh(ax, ay, w + pad * 2.0, h + pad * 2.0),
        BoxAnchor::BottomLeft => RectF::from_ltwh(ax, ay - h - pad * 2.0, w + pad * 2.0, h + pad * 2.0),
    };
    draw_panel_box(canvas, rect, theme);
    shaper.draw(canvas, &tb.text, (rect.left + pad, rect.top + pad), &spec, Align::Left, VAlign::Top);
}

fn draw_legend_key(canvas: &skia::Canvas, key: LegendKey, (x, cy): (f32, f32), w: f32, color: skia::Color) {
    match key {
        LegendKey::Line(marker) => {
            canvas.draw_line((x, cy), (x + w, cy), &stroke_paint(color, 2.0));
            draw_marker(canvas, marker, (x + w * 0.5, cy), 6.0, color);
        }
        LegendKey::Swatch => {
            let r = skia::Rect::from_ltrb(x + w * 0.2, cy - 5.0, x + w * 0.8, cy + 5.0);
            canvas.draw_rect(r, &fill_paint(color));
        }
        LegendKey::Dashed => {
            canvas.draw_line((x, cy), (x + w, cy), &dashed(stroke_paint(color, 1.5), 5.0, 3.0));
        }
    }
}
