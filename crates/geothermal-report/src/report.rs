// File: crates/geothermal-report/src/report.rs
// Summary: Report driver; builds each topic's figure and renders it into the output directory.

use std::path::{Path, PathBuf};

use chart_core::Figure;
use rand::rngs::StdRng;

use crate::charts::{capacity, countries, investment, potential, technology, working_fluid};
use crate::config::ReportConfig;
use crate::data::{
    resource_temperatures_c, CAPACITY_TREND, INVESTMENT, REGIONS, TECHNOLOGIES, TOP_COUNTRIES, WORKING_FLUIDS,
};
use crate::error::{ReportError, Result};
use crate::noise::make_rng;
use crate::output::OutputDir;
use crate::topics::ChartTopic;

pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Build `topic`'s figure from its embedded dataset. Only the working-fluid
    /// chart draws from `rng`.
    pub fn build_figure(&self, topic: ChartTopic, rng: &mut StdRng) -> Result<Figure> {
        let figure = match topic {
            ChartTopic::CapacityTrend => capacity::figure(CAPACITY_TREND)?,
            ChartTopic::TechnologyComparison => technology::figure(TECHNOLOGIES),
            ChartTopic::TopCountries => countries::figure(TOP_COUNTRIES)?,
            ChartTopic::WorkingFluidEfficiency => {
                let curves = working_fluid::curves(WORKING_FLUIDS, &resource_temperatures_c(), rng);
                working_fluid::figure(&curves)
            }
            ChartTopic::InvestmentTrends => investment::figure(INVESTMENT)?,
            ChartTopic::RegionalPotential => potential::figure(REGIONS)?,
        };
        Ok(figure)
    }

    /// Render `topic` into `out`, overwriting any previous file. Returns the written path.
    pub fn generate(&self, topic: ChartTopic, out: &OutputDir, rng: &mut StdRng) -> Result<PathBuf> {
        let figure = self.build_figure(topic, rng)?;
        let path = out.file_for(topic);
        figure
            .render_to_png(&self.config.render_for(topic), &path)
            .map_err(|source| ReportError::Render { topic, source })?;
        log::info!("wrote {} chart to {}", topic, path.display());
        Ok(path)
    }

    /// Prepare the output directory, then render every topic in order,
    /// calling `on_done` after each file is written.
    pub fn generate_all<F>(&self, mut on_done: F) -> Result<Vec<PathBuf>>
    where
        F: FnMut(ChartTopic, &Path),
    {
        let out = OutputDir::prepare(&self.config.output_dir)?;
        let mut rng = make_rng(self.config.seed);
        let mut written = Vec::with_capacity(ChartTopic::ALL.len());
        for topic in ChartTopic::ALL {
            let path = self.generate(topic, &out, &mut rng)?;
            on_done(topic, &path);
            written.push(path);
        }
        Ok(written)
    }
}
