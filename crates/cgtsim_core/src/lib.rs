//! Capital gains tax analysis library
//!
//! This crate derives twelve-month holding-period gains from historical price
//! data and estimates aggregate tax revenue under a tiered capital gains tax.
//! It supports:
//! - Month-end purchase sampling with nearest-match sale pricing
//! - Nominal gains and purchase-year inflation-deflated real gains
//! - Validated progressive bracket schedules with an unbounded top bracket
//! - Scenario sweeps over holder populations and realisation rates
//! - Summary statistics and histogram binning for rendering layers
//!
//! The pipeline is a staged composition: build a `PriceSeries` and an
//! `InflationTable`, derive `GainRecord`s, then sweep `Scenario`s through a
//! `TaxSchedule`:
//!
//! ```ignore
//! use cgtsim_core::{build_gain_records, run_sweep, InflationTable, PriceSeries};
//!
//! let prices = PriceSeries::new(observations);
//! let inflation = InflationTable::new(inflation_records);
//! let records = build_gain_records(&prices, &inflation, 7);
//! let grid = run_sweep(&schedule, &scenarios, &[0.5, 0.7, 0.9], seed)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod gains;
pub mod taxes;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{Histogram, ScenarioResult, SummaryStatistics, SweepGrid, run_sweep};
pub use error::{ProfileError, ScheduleError, SweepError};
pub use gains::{GainRecord, YearlyGainSummary, build_gain_records, yearly_summaries};
pub use model::{
    GainProfile, InflationRecord, InflationTable, PriceObservation, PriceSeries, Scenario,
};
pub use taxes::{TaxBracket, TaxSchedule};
