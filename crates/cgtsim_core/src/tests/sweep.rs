//! Tests for the gain-records-to-revenue-grid pipeline
//!
//! These tests verify that:
//! - Observed real gains can seed empirical scenario populations
//! - Grid cells carry exact revenue totals for known populations
//! - Realisation rates select prefix sub-populations deterministically

use jiff::civil::{Date, date};

use crate::analysis::run_sweep;
use crate::gains::build_gain_records;
use crate::model::{
    GainProfile, InflationRecord, InflationTable, PriceObservation, PriceSeries, Scenario,
};
use crate::taxes::{TaxBracket, TaxSchedule};

fn obs(d: Date, close: f64) -> PriceObservation {
    PriceObservation {
        date: d,
        open: None,
        low: None,
        high: None,
        close,
        percent_change: None,
    }
}

fn flat_schedule(rate: f64) -> TaxSchedule {
    TaxSchedule::new(vec![TaxBracket {
        lower: 0.0,
        upper: None,
        rate,
    }])
    .unwrap()
}

fn tiered_schedule() -> TaxSchedule {
    TaxSchedule::new(vec![
        TaxBracket {
            lower: 0.0,
            upper: Some(1_000.0),
            rate: 0.0,
        },
        TaxBracket {
            lower: 1_000.0,
            upper: Some(5_000.0),
            rate: 0.10,
        },
        TaxBracket {
            lower: 5_000.0,
            upper: None,
            rate: 0.20,
        },
    ])
    .unwrap()
}

/// Price history through gain records into an empirical sweep: 18 records
/// (12 real gains of 100, 6 of 75) taxed flat at 10% with everyone selling
#[test]
fn test_price_history_to_revenue() {
    let mut observations = Vec::new();
    let mut year = 2020i16;
    let mut month = 1i8;
    for k in 0..30 {
        observations.push(obs(date(year, month, 28), 100.0 + 10.0 * k as f64));
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    let prices = PriceSeries::new(observations);
    let inflation = InflationTable::new([
        InflationRecord {
            year: 2020,
            annual_rate_pct: 20.0,
        },
        InflationRecord {
            year: 2021,
            annual_rate_pct: 60.0,
        },
    ]);

    let records = build_gain_records(&prices, &inflation, 7);
    assert_eq!(records.len(), 18);

    let pool: Vec<f64> = records.iter().filter_map(|r| r.real_gain).collect();
    assert_eq!(pool.len(), 18);

    let scenarios = [Scenario {
        name: "observed".to_string(),
        holders: pool.len(),
        profile: GainProfile::Empirical { gains: pool },
    }];
    let grid = run_sweep(&flat_schedule(0.10), &scenarios, &[1.0], 42).unwrap();

    // 0.10 * (12 * 100 + 6 * 75) = 165
    let cell = grid.get(0, 0).unwrap();
    assert!(
        (cell.total_tax_revenue - 165.0).abs() < 1e-9,
        "Expected 165, got {}",
        cell.total_tax_revenue
    );
    assert_eq!(cell.realized, 18);
    assert_eq!(cell.skipped_non_finite, 0);
}

/// Two fixed-gain scenarios over three rates: every cell total is the
/// per-holder tax times the floored realized count
#[test]
fn test_fixed_scenario_grid_totals() {
    let scenarios = [
        Scenario {
            name: "small".to_string(),
            holders: 100,
            profile: GainProfile::Fixed { gain: 3_000.0 },
        },
        Scenario {
            name: "large".to_string(),
            holders: 1_000,
            profile: GainProfile::Fixed { gain: 10_000.0 },
        },
    ];
    let rates = [0.5, 0.7, 0.9];
    let grid = run_sweep(&tiered_schedule(), &scenarios, &rates, 42).unwrap();

    // Per-holder taxes: 3,000 -> 200 and 10,000 -> 1,400
    let expected = [
        [50.0 * 200.0, 70.0 * 200.0, 90.0 * 200.0],
        [500.0 * 1_400.0, 700.0 * 1_400.0, 900.0 * 1_400.0],
    ];
    for ((row, col), cell) in grid.iter() {
        assert!(
            (cell.total_tax_revenue - expected[row][col]).abs() < 1e-6,
            "Expected {} at ({}, {}), got {}",
            expected[row][col],
            row,
            col,
            cell.total_tax_revenue
        );
        // Identical gains: no spread in per-holder tax
        assert_eq!(cell.tax_stats.unwrap().std_dev, 0.0);
    }
}

/// Empirical pools realize as an in-order prefix, so partial rates select
/// the leading gains
#[test]
fn test_empirical_prefix_realisation() {
    let scenarios = [Scenario {
        name: "mixed".to_string(),
        holders: 3,
        profile: GainProfile::Empirical {
            gains: vec![500.0, 3_000.0, 10_000.0],
        },
    }];

    let all = run_sweep(&tiered_schedule(), &scenarios, &[1.0], 42).unwrap();
    let cell = all.get(0, 0).unwrap();
    // 0 + 200 + 1,400
    assert!(
        (cell.total_tax_revenue - 1_600.0).abs() < 1e-9,
        "Expected 1600, got {}",
        cell.total_tax_revenue
    );

    let partial = run_sweep(&tiered_schedule(), &scenarios, &[0.7], 42).unwrap();
    let cell = partial.get(0, 0).unwrap();
    // floor(3 * 0.7) = 2 holders: gains 500 and 3,000
    assert_eq!(cell.realized, 2);
    assert!(
        (cell.total_tax_revenue - 200.0).abs() < 1e-9,
        "Expected 200, got {}",
        cell.total_tax_revenue
    );
}
