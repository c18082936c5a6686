//! Plain-text report rendering.

use cgtsim_core::taxes::TaxSchedule;
use cgtsim_core::{GainRecord, SummaryStatistics, YearlyGainSummary};

use crate::config::AnalysisConfig;
use crate::sweep_by_year::{YearlySweep, gain_per_person};
use crate::util::format::{format_amount, format_percent};

/// Render the full analysis as a plain-text report
pub fn render_report(
    config: &AnalysisConfig,
    schedule: &TaxSchedule,
    records: &[GainRecord],
    real_gain_stats: Option<&SummaryStatistics>,
    summaries: &[YearlyGainSummary],
    sweeps: &[YearlySweep],
) -> String {
    let mut out = String::new();

    out.push_str("Capital gains tax analysis\n");
    out.push_str("==========================\n\n");

    render_window_span(&mut out, records);
    render_yearly_gains(&mut out, summaries);
    render_gain_stats(&mut out, real_gain_stats);
    render_revenue(&mut out, config, schedule, sweeps);

    out
}

fn render_window_span(out: &mut String, records: &[GainRecord]) {
    let (Some(first), Some(last)) = (records.first(), records.last()) else {
        return;
    };
    out.push_str(&format!(
        "Holding windows: {} ({} to {})\n\n",
        records.len(),
        first.purchase_date,
        last.sale_date
    ));
}

fn render_yearly_gains(out: &mut String, summaries: &[YearlyGainSummary]) {
    out.push_str("12-month holding gains by purchase year\n\n");
    if summaries.is_empty() {
        out.push_str("  (no priced holding windows)\n\n");
        return;
    }

    out.push_str(&format!(
        "  {:>6} {:>9} {:>16} {:>16}\n",
        "year", "windows", "mean nominal", "mean real"
    ));
    for summary in summaries {
        let real = summary
            .mean_real_gain
            .map(format_amount)
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "  {:>6} {:>9} {:>16} {:>16}\n",
            summary.year,
            summary.records,
            format_amount(summary.mean_nominal_gain),
            real
        ));
    }
    out.push('\n');
}

fn render_gain_stats(out: &mut String, stats: Option<&SummaryStatistics>) {
    let Some(stats) = stats else {
        return;
    };
    out.push_str(&format!(
        "Real gain per dollar: mean {}, std dev {}, min {}, max {}, windows {}\n\n",
        format_amount(stats.mean),
        format_amount(stats.std_dev),
        format_amount(stats.min),
        format_amount(stats.max),
        stats.count
    ));
}

fn render_revenue(
    out: &mut String,
    config: &AnalysisConfig,
    schedule: &TaxSchedule,
    sweeps: &[YearlySweep],
) {
    out.push_str("Projected CGT revenue\n\n");
    if sweeps.is_empty() {
        out.push_str("  (no year could be analysed)\n");
        return;
    }

    out.push_str(&format!(
        "  {:>6} {:<14} {:>5} {:>11} {:>13} {:>12} {:>18}\n",
        "year", "scenario", "rate", "people", "gain/person", "tax/person", "total tax"
    ));

    for sweep in sweeps {
        for ((row, _), cell) in sweep.grid.iter() {
            let Some(scenario) = config.scenarios.get(row) else {
                continue;
            };
            let gain =
                gain_per_person(sweep.mean_real_gain, sweep.dollar_value, scenario.dollar_volume);
            let tax = schedule.tax_due(gain);

            out.push_str(&format!(
                "  {:>6} {:<14} {:>5} {:>11} {:>13} {:>12} {:>18}\n",
                sweep.year,
                cell.scenario,
                format_percent(cell.realisation_rate),
                format_amount(scenario.people as f64),
                format_amount(gain),
                format_amount(tax),
                format_amount(cell.total_tax_revenue)
            ));
        }
        out.push('\n');
    }
}
