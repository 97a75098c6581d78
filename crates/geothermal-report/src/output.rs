// File: crates/geothermal-report/src/output.rs
// Summary: Output directory prepared once per run and handed to every chart operation.

use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};
use crate::topics::ChartTopic;

#[derive(Clone, Debug)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Create `root` (and parents) if missing. Idempotent.
    pub fn prepare(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|source| ReportError::Io { path: root.clone(), source })?;
        log::debug!("output directory ready: {}", root.display());
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Fixed location of `topic`'s chart.
    pub fn file_for(&self, topic: ChartTopic) -> PathBuf {
        self.root.join(topic.file_name())
    }
}
