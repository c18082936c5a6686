//! Daily dollar price history from CSV exports.

use std::fs::File;
use std::path::Path;

use cgtsim_core::model::{PriceObservation, PriceSeries};
use csv::ReaderBuilder;
use jiff::civil::Date;
use serde::Deserialize;

use super::LoadError;

/// One export row. Numeric columns may carry thousands separators or a bare
/// "-" for missing values, so everything comes in as text first.
#[derive(Debug, Deserialize)]
struct PriceRow {
    open: String,
    low: String,
    high: String,
    close: String,
    #[serde(rename = "change")]
    _change: String,
    #[serde(rename = "persent_change")]
    percent_change: String,
    miladi_date: String,
    #[serde(rename = "shamsi_date")]
    _shamsi_date: String,
}

/// Load a daily price CSV
///
/// Rows without a parseable date or close price are skipped, matching the
/// gaps the source export leaves; a file with no usable rows at all is an
/// error.
pub fn load_price_csv<P: AsRef<Path>>(path: P) -> Result<PriceSeries, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| LoadError::Io(format!("Failed to open {}: {e}", path.display())))?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut observations = Vec::new();
    let mut skipped = 0usize;

    for (idx, record) in reader.deserialize::<PriceRow>().enumerate() {
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!(row = idx + 1, error = %e, "Skipping malformed price row");
                skipped += 1;
                continue;
            }
        };

        let Some(date) = parse_date(&row.miladi_date) else {
            skipped += 1;
            continue;
        };
        let Some(close) = parse_number(&row.close) else {
            skipped += 1;
            continue;
        };

        observations.push(PriceObservation {
            date,
            open: parse_number(&row.open),
            low: parse_number(&row.low),
            high: parse_number(&row.high),
            close,
            percent_change: parse_number(&row.percent_change),
        });
    }

    if observations.is_empty() {
        return Err(LoadError::NoData(format!(
            "no usable price rows in {}",
            path.display()
        )));
    }
    if skipped > 0 {
        tracing::warn!(skipped, "Dropped price rows without a date or close");
    }
    tracing::info!(rows = observations.len(), "Loaded daily price history");

    Ok(PriceSeries::new(observations))
}

/// "-" and empty cells mean missing; thousands separators are stripped
fn parse_number(raw: &str) -> Option<f64> {
    let cleaned = raw.trim();
    if cleaned.is_empty() || cleaned == "-" {
        return None;
    }
    cleaned.replace(',', "").parse().ok()
}

fn parse_date(raw: &str) -> Option<Date> {
    let cleaned = raw.trim();
    if let Ok(date) = cleaned.parse() {
        return Some(date);
    }
    // Some exports use slashes instead of dashes
    cleaned.replace('/', "-").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_handles_export_quirks() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("255,000"), Some(255_000.0));
        assert_eq!(parse_number(" 1,234.5 "), Some(1_234.5));
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("n/a"), None);
    }

    #[test]
    fn test_parse_date_accepts_both_separators() {
        assert_eq!(parse_date("2020-03-15"), Some(jiff::civil::date(2020, 3, 15)));
        assert_eq!(parse_date("2020/03/15"), Some(jiff::civil::date(2020, 3, 15)));
        assert_eq!(parse_date("not a date"), None);
    }
}
