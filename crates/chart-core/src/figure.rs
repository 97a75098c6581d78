// File: crates/chart-core/src/figure.rs
// Summary: Multi-panel figure and the headless PNG pipeline using Skia CPU raster surfaces.

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::geometry::RectF;
use crate::text::TextShaper;
use crate::types::PANEL_GAP;
use crate::{Chart, RenderOptions};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("figure has no panels")]
    Empty,
}

/// How panels share the figure area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelLayout {
    /// Only the first panel is drawn, over the whole area.
    Single,
    /// Panels side by side.
    Row,
    /// Panels stacked top to bottom.
    Column,
}

#[derive(Clone, Debug)]
pub struct Figure {
    pub panels: Vec<Chart>,
    pub layout: PanelLayout,
}

impl Figure {
    pub fn single(chart: Chart) -> Self {
        Self { panels: vec![chart], layout: PanelLayout::Single }
    }

    pub fn row(panels: Vec<Chart>) -> Self {
        Self { panels, layout: PanelLayout::Row }
    }

    pub fn column(panels: Vec<Chart>) -> Self {
        Self { panels, layout: PanelLayout::Column }
    }

    /// Render the figure to a PNG at `output_png_path` inside an existing directory.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_png(output_png_path.as_ref(), &bytes)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let panels: Vec<&Chart> = self.panels.iter().collect();
        encode_panels(&panels, self.layout, opts)
    }
}

/// Panel frames in logical pixels.
pub fn panel_frames(count: usize, layout: PanelLayout, width: f32, height: f32) -> Vec<RectF> {
    let area = RectF::from_ltwh(0.0, 0.0, width, height);
    match layout {
        PanelLayout::Single => vec![area],
        PanelLayout::Row => area.split_columns(count, PANEL_GAP),
        PanelLayout::Column => area.split_rows(count, PANEL_GAP),
    }
}

pub(crate) fn encode_panels(panels: &[&Chart], layout: PanelLayout, opts: &RenderOptions) -> Result<Vec<u8>> {
    if panels.is_empty() {
        return Err(RenderError::Empty.into());
    }
    let scale = opts.scale.max(0.1);
    let dev_w = (opts.width as f32 * scale).round() as i32;
    let dev_h = (opts.height as f32 * scale).round() as i32;

    // Create raster surface
    let mut surface = skia::surfaces::raster_n32_premul((dev_w, dev_h))
        .ok_or(RenderError::Surface { width: dev_w, height: dev_h })?;
    let canvas = surface.canvas();
    canvas.clear(opts.theme.background);
    // Everything below is in logical pixels
    canvas.scale((scale, scale));

    let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };
    let frames = panel_frames(panels.len(), layout, opts.width as f32, opts.height as f32);
    for (chart, frame) in panels.iter().zip(frames) {
        chart.draw(canvas, frame, opts, shaper.as_ref());
    }

    // Snapshot and encode PNG
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(RenderError::Encode)?;
    log::debug!("encoded {}x{} figure ({} panels, {} bytes)", dev_w, dev_h, panels.len(), data.as_bytes().len());
    Ok(data.as_bytes().to_vec())
}

/// Write encoded bytes to `path`. The parent directory must already exist.
pub(crate) fn write_png(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
