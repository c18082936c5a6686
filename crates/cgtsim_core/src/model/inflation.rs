use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One year's annual inflation as a percentage (12.5 means 12.5%)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationRecord {
    pub year: i16,
    pub annual_rate_pct: f64,
}

/// Annual inflation rates keyed by calendar year
///
/// Duplicate years keep the last record seen.
#[derive(Debug, Clone, Default)]
pub struct InflationTable {
    rates: FxHashMap<i16, f64>,
}

impl InflationTable {
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = InflationRecord>) -> Self {
        let mut rates = FxHashMap::default();
        for record in records {
            rates.insert(record.year, record.annual_rate_pct);
        }
        Self { rates }
    }

    #[must_use]
    pub fn rate_pct(&self, year: i16) -> Option<f64> {
        self.rates.get(&year).copied()
    }

    /// Divisor that converts a nominal amount into that year's real terms
    #[must_use]
    pub fn deflator(&self, year: i16) -> Option<f64> {
        self.rate_pct(year).map(|pct| 1.0 + pct / 100.0)
    }

    /// Deflate a nominal amount by the given year's annual rate
    ///
    /// `None` when the year has no inflation record.
    #[must_use]
    pub fn deflate(&self, year: i16, nominal: f64) -> Option<f64> {
        self.deflator(year).map(|deflator| nominal / deflator)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
