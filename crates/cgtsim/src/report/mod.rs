//! Report rendering: plain-text tables, JSON export and SVG charts.

pub mod json;
pub mod svg;
pub mod text;

use std::fmt;
use std::fs;
use std::path::Path;

/// Error types for report output
#[derive(Debug)]
pub enum ReportError {
    Io(String),
    Serialize(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Io(msg) => write!(f, "IO error: {msg}"),
            ReportError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {}

/// Write each named chart as `{name}.svg` under `out_dir`
///
/// Charts come back empty when their input had no data; those are skipped
/// rather than written as broken documents.
pub fn write_charts(out_dir: &Path, charts: &[(&str, String)]) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)
        .map_err(|e| ReportError::Io(format!("Failed to create {}: {e}", out_dir.display())))?;

    for (name, svg) in charts {
        if svg.is_empty() {
            tracing::warn!(chart = %name, "No data, skipping chart");
            continue;
        }
        let path = out_dir.join(format!("{name}.svg"));
        fs::write(&path, svg)
            .map_err(|e| ReportError::Io(format!("Failed to write {}: {e}", path.display())))?;
    }
    Ok(())
}
