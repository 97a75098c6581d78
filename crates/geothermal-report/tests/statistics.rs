// File: crates/geothermal-report/tests/statistics.rs
// Purpose: Derived statistics over the embedded datasets and their degenerate inputs.

use approx::assert_relative_eq;
use geothermal_report::charts::{capacity, countries, investment};
use geothermal_report::data::{CAPACITY_TREND, INVESTMENT, TOP_COUNTRIES};
use geothermal_report::stats::{cagr, mean, percent_of, positive_ratios, ratios};
use geothermal_report::StatsError;

#[test]
fn capacity_growth_rate_matches_closed_form() {
    let rate = capacity::growth_rate(CAPACITY_TREND).expect("cagr");
    let expected = (15406.0f64 / 8686.0).powf(1.0 / 15.0) - 1.0;
    assert_relative_eq!(rate, expected, epsilon = 1e-12);
    assert_relative_eq!(rate * 100.0, 3.894, epsilon = 1e-3);
}

#[test]
fn cagr_rejects_degenerate_series() {
    assert_eq!(cagr(&[]), Err(StatsError::EmptySeries));
    assert_eq!(cagr(&[5.0]), Err(StatsError::TooFewPoints(1)));
    assert_eq!(cagr(&[0.0, 10.0]), Err(StatsError::ZeroBaseline));
    assert_relative_eq!(cagr(&[100.0, 110.0, 121.0]).unwrap(), 0.1, epsilon = 1e-12);
}

#[test]
fn generation_mean_is_exact() {
    let avg = countries::averages(TOP_COUNTRIES).expect("averages");
    assert_eq!(avg.generation_gwh, 8633.0);
    assert_eq!(avg.installed_mw, 1305.0);
}

#[test]
fn mean_of_empty_is_an_error() {
    assert_eq!(mean(&[]), Err(StatsError::EmptySeries));
}

#[test]
fn investment_per_mw_skips_net_capacity_loss() {
    let per_mw = investment::investment_per_mw(INVESTMENT).expect("ratios");
    // 2011 added -110 MW and is left out
    assert_eq!(per_mw.len(), INVESTMENT.len() - 1);
    assert!(per_mw.iter().all(|v| *v > 0.0));

    let guarded = investment::average_investment_per_mw(INVESTMENT).expect("average");
    assert_relative_eq!(guarded, 4.555776370048497, epsilon = 1e-9);

    // Dividing by max(capacity, 1) instead lets 2011 through as 2900 MUSD/MW
    let unguarded: Vec<f64> = INVESTMENT
        .iter()
        .map(|r| r.investment_musd / r.new_capacity_mw.max(1.0))
        .filter(|v| *v > 0.0)
        .collect();
    let unguarded = mean(&unguarded).expect("mean");
    assert!(
        (unguarded - guarded).abs() > 100.0,
        "guard must change the average: {unguarded} vs {guarded}"
    );
}

#[test]
fn ratio_helpers_check_lengths() {
    assert_eq!(
        ratios(&[1.0, 2.0], &[1.0]),
        Err(StatsError::LengthMismatch { left: 2, right: 1 })
    );
    assert_eq!(positive_ratios(&[], &[]), Err(StatsError::EmptySeries));
    assert_eq!(ratios(&[3.0, 8.0], &[2.0, 4.0]).unwrap(), vec![1.5, 2.0]);
    assert_eq!(positive_ratios(&[3.0, 8.0, 5.0], &[0.0, 4.0, -1.0]).unwrap(), vec![2.0]);
}

#[test]
fn percent_of_zero_potential_is_undefined() {
    assert_eq!(percent_of(1.0, 0.0), None);
    assert_relative_eq!(percent_of(3.2, 35.0).unwrap(), 9.142857142857142, epsilon = 1e-12);
}
