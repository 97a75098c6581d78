// File: crates/geothermal-report/src/lib.rs
// Summary: Geothermal statistics report: literal datasets, derived statistics and chart generation.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod noise;
pub mod output;
pub mod report;
pub mod stats;
pub mod topics;

pub use config::ReportConfig;
pub use error::{ReportError, StatsError};
pub use output::OutputDir;
pub use report::ReportGenerator;
pub use topics::ChartTopic;
