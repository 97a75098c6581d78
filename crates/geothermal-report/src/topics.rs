// File: crates/geothermal-report/src/topics.rs
// Summary: The six chart topics, their fixed output names, canvas sizes and run order.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartTopic {
    CapacityTrend,
    TechnologyComparison,
    TopCountries,
    WorkingFluidEfficiency,
    InvestmentTrends,
    RegionalPotential,
}

impl ChartTopic {
    /// Every topic, in generation order.
    pub const ALL: [ChartTopic; 6] = [
        ChartTopic::CapacityTrend,
        ChartTopic::TechnologyComparison,
        ChartTopic::TopCountries,
        ChartTopic::WorkingFluidEfficiency,
        ChartTopic::InvestmentTrends,
        ChartTopic::RegionalPotential,
    ];

    pub const fn file_name(self) -> &'static str {
        match self {
            ChartTopic::CapacityTrend => "geothermal_capacity_trend.png",
            ChartTopic::TechnologyComparison => "renewable_technology_comparison.png",
            ChartTopic::TopCountries => "top_geothermal_countries.png",
            ChartTopic::WorkingFluidEfficiency => "orc_working_fluid_comparison.png",
            ChartTopic::InvestmentTrends => "geothermal_investment_trends.png",
            ChartTopic::RegionalPotential => "geothermal_potential_by_region.png",
        }
    }

    /// Text of the progress line printed once the chart is written.
    pub const fn progress_message(self) -> &'static str {
        match self {
            ChartTopic::CapacityTrend => "Generated capacity trend visualization",
            ChartTopic::TechnologyComparison => "Generated technology comparison visualization",
            ChartTopic::TopCountries => "Generated top countries visualization",
            ChartTopic::WorkingFluidEfficiency => "Generated ORC efficiency comparison",
            ChartTopic::InvestmentTrends => "Generated investment trends visualization",
            ChartTopic::RegionalPotential => "Generated geothermal potential map",
        }
    }

    /// Logical canvas size (width, height) in pixels.
    pub const fn canvas_size(self) -> (i32, i32) {
        match self {
            ChartTopic::CapacityTrend => (1200, 600),
            ChartTopic::TechnologyComparison => (1500, 600),
            ChartTopic::TopCountries | ChartTopic::RegionalPotential => (1200, 1000),
            ChartTopic::WorkingFluidEfficiency | ChartTopic::InvestmentTrends => (1200, 700),
        }
    }
}

impl fmt::Display for ChartTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartTopic::CapacityTrend => "capacity trend",
            ChartTopic::TechnologyComparison => "technology comparison",
            ChartTopic::TopCountries => "top countries",
            ChartTopic::WorkingFluidEfficiency => "working-fluid efficiency",
            ChartTopic::InvestmentTrends => "investment trends",
            ChartTopic::RegionalPotential => "regional potential",
        };
        f.write_str(name)
    }
}
