// File: crates/geothermal-report/src/data.rs
// Summary: Literal datasets behind the six report charts (illustrative figures, not validated).

/// Installed geothermal capacity for one year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapacityPoint {
    pub year: i32,
    pub capacity_mw: f64,
}

/// Global installed capacity, 2005..=2020.
pub const CAPACITY_TREND: &[CapacityPoint] = &[
    CapacityPoint { year: 2005, capacity_mw: 8686.0 },
    CapacityPoint { year: 2006, capacity_mw: 8918.0 },
    CapacityPoint { year: 2007, capacity_mw: 9139.0 },
    CapacityPoint { year: 2008, capacity_mw: 9459.0 },
    CapacityPoint { year: 2009, capacity_mw: 9899.0 },
    CapacityPoint { year: 2010, capacity_mw: 10121.0 },
    CapacityPoint { year: 2011, capacity_mw: 10011.0 },
    CapacityPoint { year: 2012, capacity_mw: 10471.0 },
    CapacityPoint { year: 2013, capacity_mw: 10740.0 },
    CapacityPoint { year: 2014, capacity_mw: 11221.0 },
    CapacityPoint { year: 2015, capacity_mw: 11846.0 },
    CapacityPoint { year: 2016, capacity_mw: 12706.0 },
    CapacityPoint { year: 2017, capacity_mw: 13299.0 },
    CapacityPoint { year: 2018, capacity_mw: 13928.0 },
    CapacityPoint { year: 2019, capacity_mw: 14600.0 },
    CapacityPoint { year: 2020, capacity_mw: 15406.0 },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TechnologyRecord {
    pub name: &'static str,
    pub capacity_factor_pct: f64,
    pub lcoe_usd_per_mwh: f64,
}

/// Label singled out in the technology comparison.
pub const HIGHLIGHT_TECHNOLOGY: &str = "Geothermal";

/// Renewable technologies, 2020.
pub const TECHNOLOGIES: &[TechnologyRecord] = &[
    TechnologyRecord { name: "Solar PV", capacity_factor_pct: 24.3, lcoe_usd_per_mwh: 57.0 },
    TechnologyRecord { name: "Wind Onshore", capacity_factor_pct: 35.6, lcoe_usd_per_mwh: 39.0 },
    TechnologyRecord { name: "Wind Offshore", capacity_factor_pct: 43.5, lcoe_usd_per_mwh: 84.0 },
    TechnologyRecord { name: "Hydropower", capacity_factor_pct: 44.2, lcoe_usd_per_mwh: 47.0 },
    TechnologyRecord { name: "Geothermal", capacity_factor_pct: 83.1, lcoe_usd_per_mwh: 71.0 },
    TechnologyRecord { name: "Biomass", capacity_factor_pct: 75.2, lcoe_usd_per_mwh: 85.0 },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountryRecord {
    pub name: &'static str,
    pub generation_gwh: f64,
    pub installed_mw: f64,
}

/// Top ten countries by generation, 2019, sorted descending by generation.
pub const TOP_COUNTRIES: &[CountryRecord] = &[
    CountryRecord { name: "United States", generation_gwh: 18000.0, installed_mw: 2600.0 },
    CountryRecord { name: "Indonesia", generation_gwh: 14600.0, installed_mw: 2100.0 },
    CountryRecord { name: "Philippines", generation_gwh: 10730.0, installed_mw: 1900.0 },
    CountryRecord { name: "Turkey", generation_gwh: 8900.0, installed_mw: 1500.0 },
    CountryRecord { name: "New Zealand", generation_gwh: 8200.0, installed_mw: 1000.0 },
    CountryRecord { name: "Italy", generation_gwh: 6100.0, installed_mw: 900.0 },
    CountryRecord { name: "Iceland", generation_gwh: 6000.0, installed_mw: 750.0 },
    CountryRecord { name: "Kenya", generation_gwh: 5500.0, installed_mw: 800.0 },
    CountryRecord { name: "Mexico", generation_gwh: 5400.0, installed_mw: 950.0 },
    CountryRecord { name: "Japan", generation_gwh: 2900.0, installed_mw: 550.0 },
];

/// Linear efficiency model of an ORC working fluid:
/// `base_pct + slope_pct_per_c * (T - REFERENCE_TEMPERATURE_C)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkingFluid {
    pub name: &'static str,
    pub base_pct: f64,
    pub slope_pct_per_c: f64,
}

pub const WORKING_FLUIDS: &[WorkingFluid] = &[
    WorkingFluid { name: "R134a", base_pct: 4.5, slope_pct_per_c: 0.08 },
    WorkingFluid { name: "R245fa", base_pct: 5.0, slope_pct_per_c: 0.09 },
    WorkingFluid { name: "Isopentane", base_pct: 5.2, slope_pct_per_c: 0.10 },
    WorkingFluid { name: "n-Pentane", base_pct: 5.1, slope_pct_per_c: 0.095 },
];

pub const REFERENCE_TEMPERATURE_C: f64 = 80.0;
/// Standard deviation of the Gaussian noise added to each efficiency point.
pub const EFFICIENCY_NOISE_STD: f64 = 0.3;

/// Resource temperatures 80, 90, ..., 190 °C.
pub fn resource_temperatures_c() -> Vec<f64> {
    (80..200).step_by(10).map(f64::from).collect()
}

pub const KEY_FINDINGS: &str = "Key Findings:\n\
    \u{2022} Isopentane shows highest efficiency\n\
    \u{2022} Efficiency increases with temperature\n\
    \u{2022} Typical range: 5-16% for binary cycles\n\
    \u{2022} Working fluid selection depends on resource temperature";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvestmentRecord {
    pub year: i32,
    pub investment_musd: f64,
    pub cumulative_capacity_mw: f64,
    /// Net capacity added that year; negative means net loss.
    pub new_capacity_mw: f64,
}

/// Investment and capacity additions, 2010..=2020.
pub const INVESTMENT: &[InvestmentRecord] = &[
    InvestmentRecord { year: 2010, investment_musd: 1600.0, cumulative_capacity_mw: 10121.0, new_capacity_mw: 222.0 },
    InvestmentRecord { year: 2011, investment_musd: 2900.0, cumulative_capacity_mw: 10011.0, new_capacity_mw: -110.0 },
    InvestmentRecord { year: 2012, investment_musd: 1700.0, cumulative_capacity_mw: 10471.0, new_capacity_mw: 460.0 },
    InvestmentRecord { year: 2013, investment_musd: 2200.0, cumulative_capacity_mw: 10740.0, new_capacity_mw: 269.0 },
    InvestmentRecord { year: 2014, investment_musd: 2800.0, cumulative_capacity_mw: 11221.0, new_capacity_mw: 481.0 },
    InvestmentRecord { year: 2015, investment_musd: 2000.0, cumulative_capacity_mw: 11846.0, new_capacity_mw: 625.0 },
    InvestmentRecord { year: 2016, investment_musd: 2400.0, cumulative_capacity_mw: 12706.0, new_capacity_mw: 860.0 },
    InvestmentRecord { year: 2017, investment_musd: 3100.0, cumulative_capacity_mw: 13299.0, new_capacity_mw: 593.0 },
    InvestmentRecord { year: 2018, investment_musd: 2300.0, cumulative_capacity_mw: 13928.0, new_capacity_mw: 629.0 },
    InvestmentRecord { year: 2019, investment_musd: 1800.0, cumulative_capacity_mw: 14600.0, new_capacity_mw: 672.0 },
    InvestmentRecord { year: 2020, investment_musd: 2500.0, cumulative_capacity_mw: 15406.0, new_capacity_mw: 806.0 },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionRecord {
    pub name: &'static str,
    pub potential_gw: f64,
    pub installed_gw: f64,
}

pub const REGIONS: &[RegionRecord] = &[
    RegionRecord { name: "North America", potential_gw: 35.0, installed_gw: 3.2 },
    RegionRecord { name: "Central America", potential_gw: 6.0, installed_gw: 0.7 },
    RegionRecord { name: "South America", potential_gw: 12.0, installed_gw: 0.9 },
    RegionRecord { name: "Europe", potential_gw: 18.0, installed_gw: 3.3 },
    RegionRecord { name: "Africa", potential_gw: 15.0, installed_gw: 0.7 },
    RegionRecord { name: "Middle East", potential_gw: 2.0, installed_gw: 0.1 },
    RegionRecord { name: "Central Asia", potential_gw: 8.0, installed_gw: 0.1 },
    RegionRecord { name: "East Asia", potential_gw: 27.0, installed_gw: 3.8 },
    RegionRecord { name: "Southeast Asia", potential_gw: 30.0, installed_gw: 4.8 },
    RegionRecord { name: "Oceania", potential_gw: 9.0, installed_gw: 1.4 },
];
