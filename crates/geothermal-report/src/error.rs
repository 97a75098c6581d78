// File: crates/geothermal-report/src/error.rs
// Summary: Error types for statistics and report generation.

use std::path::PathBuf;

use crate::topics::ChartTopic;

/// A derived statistic is undefined for the given input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("series is empty")]
    EmptySeries,
    #[error("series lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("growth rate needs at least two points, got {0}")]
    TooFewPoints(usize),
    #[error("growth rate undefined: first value is zero")]
    ZeroBaseline,
    #[error("utilization undefined for '{region}': potential is zero")]
    ZeroPotential { region: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("output directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("rendering {topic} failed")]
    Render {
        topic: ChartTopic,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    Stats(#[from] StatsError),
}

pub type Result<T, E = ReportError> = std::result::Result<T, E>;
