//! CSV loading tests over temporary files.

use std::fs;

use cgtsim_core::model::{InflationRecord, InflationTable};
use cgtsim_core::{build_gain_records, yearly_summaries};
use tempfile::TempDir;

use crate::load::{LoadError, load_price_csv};

const HEADER: &str = "open,low,high,close,change,persent_change,miladi_date,shamsi_date";

fn csv_line(date: &str, close: f64) -> String {
    format!("{close},{close},{close},{close},0,0.0,{date},1399-01-01")
}

#[test]
fn test_load_price_csv_parses_and_sorts() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prices.csv");
    let csv = [
        HEADER,
        "25400,25200,25600,\"25,500\",100,0.39,2021-03-02,1399-12-12",
        "25300,25100,25500,25400,-,-,2021-03-01,1399-12-11",
        "-,-,-,-,-,-,2021-03-03,1399-12-13",
        "25600,25400,25800,25700,200,0.78,bad-date,1399-12-14",
    ]
    .join("\n");
    fs::write(&path, csv).unwrap();

    let series = load_price_csv(&path).unwrap();

    // The missing-close and bad-date rows are dropped, the rest sorted
    assert_eq!(series.len(), 2);
    let observations = series.observations();
    assert_eq!(observations[0].date, jiff::civil::date(2021, 3, 1));
    assert_eq!(observations[0].close, 25_400.0);
    assert_eq!(observations[0].percent_change, None);
    assert_eq!(observations[1].close, 25_500.0);
    assert_eq!(observations[1].open, Some(25_400.0));
    assert_eq!(observations[1].percent_change, Some(0.39));
}

#[test]
fn test_unusable_files_are_errors() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prices.csv");
    fs::write(&path, HEADER).unwrap();

    assert!(matches!(load_price_csv(&path), Err(LoadError::NoData(_))));
    assert!(matches!(
        load_price_csv(temp_dir.path().join("missing.csv")),
        Err(LoadError::Io(_))
    ));
}

#[test]
fn test_loaded_prices_produce_holding_windows() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prices.csv");

    // One observation near each month end of 2020 and 2021, with every close
    // in 2021 exactly 10,000 above the same month of 2020
    let mut lines = vec![HEADER.to_string()];
    for month in 1..=12u32 {
        lines.push(csv_line(
            &format!("2020-{month:02}-28"),
            10_000.0 + 100.0 * month as f64,
        ));
        lines.push(csv_line(
            &format!("2021-{month:02}-28"),
            20_000.0 + 100.0 * month as f64,
        ));
    }
    fs::write(&path, lines.join("\n")).unwrap();

    let series = load_price_csv(&path).unwrap();
    assert_eq!(series.len(), 24);

    let inflation = InflationTable::new([InflationRecord {
        year: 2020,
        annual_rate_pct: 25.0,
    }]);
    let records = build_gain_records(&series, &inflation, 7);

    // Every 2020 purchase month resolves a sale a year later; 2021 purchases
    // have no 2022 prices to sell into
    assert_eq!(records.len(), 12);
    assert!(
        records
            .iter()
            .all(|r| (r.nominal_gain - 10_000.0).abs() < 1e-9)
    );
    assert!(
        records
            .iter()
            .all(|r| (r.real_gain.unwrap() - 8_000.0).abs() < 1e-9)
    );

    let summaries = yearly_summaries(&records);
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].year, 2020);
    assert_eq!(summaries[0].records, 12);
}
