//! Per-year scenario derivation and sweep execution.
//!
//! Each analysed year turns the observed mean real gain into a fixed
//! per-person gain for every configured scenario, then runs the full
//! (scenario x realisation rate) sweep for that year. Years without priced
//! holding windows or without an inflation record are skipped, not failed.

use cgtsim_core::model::{GainProfile, Scenario};
use cgtsim_core::taxes::TaxSchedule;
use cgtsim_core::{ScenarioResult, SweepError, SweepGrid, YearlyGainSummary, run_sweep};
use serde::Serialize;

use crate::config::AnalysisConfig;

/// Sweep results for a single purchase year
#[derive(Debug, Clone, Serialize)]
pub struct YearlySweep {
    pub year: i16,
    /// Rial value of one dollar in that year
    pub dollar_value: f64,
    /// Mean real gain over the year's holding windows, per price unit
    pub mean_real_gain: f64,
    /// Rows follow the configured scenario order, columns the realisation
    /// rates
    pub grid: SweepGrid<ScenarioResult>,
}

/// Real gain booked by one person in a scenario
///
/// The mean real gain is measured per price unit, so a person trading
/// `dollar_volume` dollars books `mean_real_gain / dollar_value` per dollar
/// scaled by their volume.
#[must_use]
pub fn gain_per_person(mean_real_gain: f64, dollar_value: f64, dollar_volume: f64) -> f64 {
    mean_real_gain / dollar_value * dollar_volume
}

/// Run the sweep for every configured year that has usable gain data
pub fn run_yearly_sweeps(
    config: &AnalysisConfig,
    schedule: &TaxSchedule,
    summaries: &[YearlyGainSummary],
) -> Result<Vec<YearlySweep>, SweepError> {
    let mut sweeps = Vec::new();

    for (&year, &dollar_value) in &config.dollar_value_by_year {
        let Some(summary) = summaries.iter().find(|s| s.year == year) else {
            tracing::warn!(year, "No priced holding windows, skipping year");
            continue;
        };
        let Some(mean_real_gain) = summary.mean_real_gain else {
            tracing::warn!(year, "No inflation record, skipping year");
            continue;
        };

        let scenarios: Vec<Scenario> = config
            .scenarios
            .iter()
            .map(|s| Scenario {
                name: s.name.clone(),
                holders: s.people,
                profile: GainProfile::Fixed {
                    gain: gain_per_person(mean_real_gain, dollar_value, s.dollar_volume),
                },
            })
            .collect();

        let grid = run_sweep(schedule, &scenarios, &config.realisation_rates, config.seed)?;
        let excluded: usize = grid.data().iter().map(|cell| cell.skipped_non_finite).sum();
        if excluded > 0 {
            tracing::warn!(year, excluded, "Non-finite gains excluded from revenue totals");
        }
        tracing::debug!(year, cells = grid.len(), "Swept year");

        sweeps.push(YearlySweep {
            year,
            dollar_value,
            mean_real_gain,
            grid,
        });
    }

    Ok(sweeps)
}
