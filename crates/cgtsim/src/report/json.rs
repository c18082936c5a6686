//! JSON export of the full analysis output.

use std::fs;
use std::path::Path;

use cgtsim_core::{GainRecord, SummaryStatistics, YearlyGainSummary};
use serde::Serialize;

use super::ReportError;
use crate::sweep_by_year::YearlySweep;

/// Everything the analysis produced, bundled into one document
#[derive(Debug, Serialize)]
pub struct AnalysisExport<'a> {
    pub records: &'a [GainRecord],
    pub yearly_summaries: &'a [YearlyGainSummary],
    pub real_gain_stats: Option<&'a SummaryStatistics>,
    pub sweeps: &'a [YearlySweep],
}

/// Write the export as pretty-printed JSON
pub fn write_json(path: &Path, export: &AnalysisExport) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(export)
        .map_err(|e| ReportError::Serialize(format!("Failed to serialize results: {e}")))?;
    fs::write(path, json)
        .map_err(|e| ReportError::Io(format!("Failed to write {}: {e}", path.display())))
}
