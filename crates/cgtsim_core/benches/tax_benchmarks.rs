//! Criterion benchmarks for cgtsim_core tax and sweep analysis
//!
//! Run with: cargo bench -p cgtsim_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use cgtsim_core::model::{
    GainProfile, InflationRecord, InflationTable, PriceObservation, PriceSeries, Scenario,
};
use cgtsim_core::taxes::{TaxBracket, TaxSchedule};
use cgtsim_core::{build_gain_records, run_sweep};

fn create_tiered_schedule() -> TaxSchedule {
    TaxSchedule::new(vec![
        TaxBracket {
            lower: 0.0,
            upper: Some(50_000_000.0),
            rate: 0.15,
        },
        TaxBracket {
            lower: 50_000_000.0,
            upper: Some(100_000_000.0),
            rate: 0.20,
        },
        TaxBracket {
            lower: 100_000_000.0,
            upper: None,
            rate: 0.25,
        },
    ])
    .unwrap()
}

fn create_daily_series(days: usize) -> PriceSeries {
    let start = jiff::civil::date(2020, 1, 1);
    let observations = (0..days)
        .map(|i| {
            let date = start.saturating_add(jiff::Span::new().days(i as i64));
            PriceObservation {
                date,
                open: None,
                low: None,
                high: None,
                close: 1_000.0 + (i as f64) * 0.5,
                percent_change: None,
            }
        })
        .collect();
    PriceSeries::new(observations)
}

fn create_scenarios(holders: usize) -> Vec<Scenario> {
    vec![
        Scenario {
            name: "fixed".to_string(),
            holders,
            profile: GainProfile::Fixed { gain: 30_000_000.0 },
        },
        Scenario {
            name: "lognormal".to_string(),
            holders,
            profile: GainProfile::LogNormal {
                mean: 17.0,
                std_dev: 0.5,
            },
        },
    ]
}

fn bench_tax_due(c: &mut Criterion) {
    let schedule = create_tiered_schedule();

    c.bench_function("tax_due_tiered", |b| {
        b.iter(|| schedule.tax_due(black_box(80_000_000.0)))
    });
}

fn bench_gain_records(c: &mut Criterion) {
    // Five years of daily prices, deflated against a five-entry table
    let prices = create_daily_series(365 * 5);
    let inflation = InflationTable::new(
        [(2020, 20.0), (2021, 25.0), (2022, 30.0), (2023, 40.0), (2024, 50.0)].map(
            |(year, annual_rate_pct)| InflationRecord {
                year,
                annual_rate_pct,
            },
        ),
    );

    c.bench_function("gain_records_5yr_daily", |b| {
        b.iter(|| build_gain_records(black_box(&prices), black_box(&inflation), black_box(7)))
    });
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let schedule = create_tiered_schedule();
    let rates = [0.5, 0.7, 0.9];

    for holders in [1_000, 10_000, 100_000].iter() {
        let scenarios = create_scenarios(*holders);

        group.bench_with_input(BenchmarkId::new("holders", holders), holders, |b, _| {
            b.iter(|| {
                run_sweep(
                    black_box(&schedule),
                    black_box(&scenarios),
                    black_box(&rates),
                    black_box(42),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tax_due, bench_gain_records, bench_sweep);
criterion_main!(benches);
