use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One day of market data, immutable once loaded
///
/// Only `date` and `close` are required by the analysis; the remaining fields
/// mirror the source feed, which marks them as missing on some days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub date: Date,
    pub open: Option<f64>,
    pub low: Option<f64>,
    pub high: Option<f64>,
    pub close: f64,
    pub percent_change: Option<f64>,
}

/// Date-sorted price history with lookup helpers
///
/// Construction sorts by date so `nearest_close` can binary search.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PriceSeries {
    observations: Vec<PriceObservation>,
}

impl PriceSeries {
    #[must_use]
    pub fn new(mut observations: Vec<PriceObservation>) -> Self {
        observations.sort_by_key(|o| o.date);
        Self { observations }
    }

    #[must_use]
    pub fn observations(&self) -> &[PriceObservation] {
        &self.observations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.observations.first().map(|o| o.date)
    }

    #[must_use]
    pub fn last_date(&self) -> Option<Date> {
        self.observations.last().map(|o| o.date)
    }

    /// Close of the observation nearest to `target`, if one lies within
    /// `max_gap_days` of it
    ///
    /// Returns the observation date actually used alongside its close. Ties
    /// between an earlier and a later observation go to the earlier one.
    #[must_use]
    pub fn nearest_close(&self, target: Date, max_gap_days: i32) -> Option<(Date, f64)> {
        let idx = self.observations.partition_point(|o| o.date < target);

        let mut best: Option<(i32, Date, f64)> = None;
        for candidate in [idx.checked_sub(1), Some(idx)] {
            let Some(obs) = candidate.and_then(|i| self.observations.get(i)) else {
                continue;
            };
            let gap = (obs.date - target).get_days().abs();
            if best.is_none_or(|(best_gap, _, _)| gap < best_gap) {
                best = Some((gap, obs.date, obs.close));
            }
        }

        match best {
            Some((gap, date, close)) if gap <= max_gap_days => Some((date, close)),
            _ => None,
        }
    }

    /// Last close of each calendar month, labeled with the calendar month end
    ///
    /// Months with no observations produce nothing. The label is the last day
    /// of the calendar month even when the final observation falls earlier.
    #[must_use]
    pub fn month_end_closes(&self) -> Vec<(Date, f64)> {
        let mut closes: Vec<(Date, f64)> = Vec::new();

        for obs in &self.observations {
            let month_end = obs.date.last_of_month();
            match closes.last_mut() {
                // Observations are sorted, so the last entry of a month wins
                Some((prev_end, prev_close)) if *prev_end == month_end => {
                    *prev_close = obs.close;
                }
                _ => closes.push((month_end, obs.close)),
            }
        }

        closes
    }
}
