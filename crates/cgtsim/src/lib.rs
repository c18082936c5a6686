//! Capital gains tax analysis application
//!
//! This crate wraps `cgtsim_core` with everything the command-line tool needs:
//! - YAML configuration with study defaults for every knob
//! - CSV price-history and XLSX inflation-table loaders
//! - Per-year revenue sweeps priced at each year's dollar value
//! - Plain-text, JSON and SVG report output

// ============================================================================
// Application modules
// ============================================================================

pub mod config;
pub mod load;
pub mod logging;
pub mod report;
pub mod sweep_by_year;
pub mod util;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{AnalysisConfig, ConfigError, ScenarioConfig};
pub use load::{LoadError, load_inflation_xlsx, load_price_csv};
pub use logging::init_logging;
pub use report::{ReportError, write_charts};
pub use sweep_by_year::{YearlySweep, run_yearly_sweeps};
