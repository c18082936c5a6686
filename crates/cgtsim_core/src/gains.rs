//! Holding-period gain derivation
//!
//! Pairs each month-end purchase with a sale exactly twelve months later and
//! carries both the nominal gain and its purchase-year deflated counterpart.

use jiff::{Span, civil::Date};
use serde::Serialize;

use crate::model::{InflationTable, PriceSeries};

const HOLDING_MONTHS: i64 = 12;

/// One month-end purchase held for twelve months
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GainRecord {
    pub purchase_date: Date,
    /// Exactly twelve months after `purchase_date`
    pub sale_date: Date,
    /// Observation actually priced for the sale, nearest to `sale_date`
    pub sale_observed_on: Date,
    pub buy_price: f64,
    pub sell_price: f64,
    pub nominal_gain: f64,
    /// Nominal gain deflated by the purchase-year inflation rate; `None` when
    /// that year has no inflation record
    pub real_gain: Option<f64>,
}

/// Derive one record per month-end purchase that can be priced twelve months
/// later
///
/// The sale price is the close nearest to the sale date within
/// `max_sale_gap_days`; purchases with no observation in that window are
/// dropped, never imputed. Records come out ordered by purchase date.
#[must_use]
pub fn build_gain_records(
    prices: &PriceSeries,
    inflation: &InflationTable,
    max_sale_gap_days: i32,
) -> Vec<GainRecord> {
    let mut records = Vec::new();

    for (purchase_date, buy_price) in prices.month_end_closes() {
        let sale_date = purchase_date.saturating_add(Span::new().months(HOLDING_MONTHS));
        let Some((sale_observed_on, sell_price)) =
            prices.nearest_close(sale_date, max_sale_gap_days)
        else {
            continue;
        };

        let nominal_gain = sell_price - buy_price;
        records.push(GainRecord {
            purchase_date,
            sale_date,
            sale_observed_on,
            buy_price,
            sell_price,
            nominal_gain,
            real_gain: inflation.deflate(purchase_date.year(), nominal_gain),
        });
    }

    records
}

/// Mean gains over the purchases made in one calendar year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyGainSummary {
    pub year: i16,
    pub mean_nominal_gain: f64,
    /// `None` when no record of the year carries a real gain
    pub mean_real_gain: Option<f64>,
    pub records: usize,
}

struct YearAccumulator {
    year: i16,
    nominal_sum: f64,
    nominal_count: usize,
    real_sum: f64,
    real_count: usize,
    total: usize,
}

impl YearAccumulator {
    fn new(year: i16) -> Self {
        Self {
            year,
            nominal_sum: 0.0,
            nominal_count: 0,
            real_sum: 0.0,
            real_count: 0,
            total: 0,
        }
    }

    fn add(&mut self, record: &GainRecord) {
        self.total += 1;
        if record.nominal_gain.is_finite() {
            self.nominal_sum += record.nominal_gain;
            self.nominal_count += 1;
        }
        if let Some(real) = record.real_gain {
            if real.is_finite() {
                self.real_sum += real;
                self.real_count += 1;
            }
        }
    }

    fn finish(self) -> YearlyGainSummary {
        YearlyGainSummary {
            year: self.year,
            mean_nominal_gain: if self.nominal_count > 0 {
                self.nominal_sum / self.nominal_count as f64
            } else {
                0.0
            },
            mean_real_gain: if self.real_count > 0 {
                Some(self.real_sum / self.real_count as f64)
            } else {
                None
            },
            records: self.total,
        }
    }
}

/// Per purchase-year means, ascending by year
///
/// Expects records ordered by purchase date, as `build_gain_records` produces
/// them. Non-finite gains stay out of the means.
#[must_use]
pub fn yearly_summaries(records: &[GainRecord]) -> Vec<YearlyGainSummary> {
    let mut summaries = Vec::new();
    let mut acc: Option<YearAccumulator> = None;

    for record in records {
        let year = record.purchase_date.year();
        match &mut acc {
            Some(current) if current.year == year => current.add(record),
            _ => {
                if let Some(finished) = acc.take() {
                    summaries.push(finished.finish());
                }
                let mut current = YearAccumulator::new(year);
                current.add(record);
                acc = Some(current);
            }
        }
    }
    if let Some(finished) = acc {
        summaries.push(finished.finish());
    }

    summaries
}
