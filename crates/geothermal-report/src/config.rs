// File: crates/geothermal-report/src/config.rs
// Summary: Run configuration: output directory, noise seed and base render options.

use std::path::{Path, PathBuf};

use chart_core::{RenderOptions, Theme};

use crate::topics::ChartTopic;

/// Directory the charts are written to when nothing else is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "results";

#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    /// Seed for the efficiency-curve noise; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Base render options; width and height are set per topic.
    pub render: RenderOptions,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
            render: RenderOptions { theme: Theme::light(), ..RenderOptions::default() },
        }
    }
}

impl ReportConfig {
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    /// Render options sized for `topic`.
    pub fn render_for(&self, topic: ChartTopic) -> RenderOptions {
        let (width, height) = topic.canvas_size();
        RenderOptions { width, height, ..self.render.clone() }
    }
}
