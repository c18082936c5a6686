//! Analysis configuration loaded from YAML.
//!
//! Every field has a built-in default reproducing the published study setup,
//! so a config file only needs to name what it overrides. `--print-config`
//! emits the full default document as a starting point.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use cgtsim_core::error::ScheduleError;
use cgtsim_core::taxes::{TaxBracket, TaxSchedule};
use serde::{Deserialize, Serialize};

/// Error types for configuration handling
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Serialize(String),
    Schedule(ScheduleError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {msg}"),
            ConfigError::Parse(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
            ConfigError::Schedule(err) => write!(f, "Invalid tax schedule: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Schedule(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ScheduleError> for ConfigError {
    fn from(err: ScheduleError) -> Self {
        ConfigError::Schedule(err)
    }
}

/// One market participation scenario: how many people hold dollars and the
/// dollar volume each person typically trades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,
    pub people: usize,
    pub dollar_volume: f64,
}

/// Full analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum distance in days between the nominal sale date and the nearest
    /// priced observation before a holding window is dropped
    #[serde(default = "default_max_sale_gap_days")]
    pub max_sale_gap_days: i32,
    /// Bin count for the real-gain distribution chart
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    /// Seed for the sweep's random number generator
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Tiered tax brackets, ordered from the zero floor up
    #[serde(default = "default_schedule")]
    pub schedule: Vec<TaxBracket>,
    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<ScenarioConfig>,
    /// Fractions of holders assumed to realize their gains
    #[serde(default = "default_realisation_rates")]
    pub realisation_rates: Vec<f64>,
    /// Rial value of one dollar for each analysed year
    #[serde(default = "default_dollar_value_by_year")]
    pub dollar_value_by_year: BTreeMap<i16, f64>,
}

fn default_max_sale_gap_days() -> i32 {
    7
}

fn default_histogram_bins() -> usize {
    30
}

fn default_seed() -> u64 {
    42
}

fn default_schedule() -> Vec<TaxBracket> {
    vec![
        TaxBracket {
            lower: 0.0,
            upper: Some(50_000_000.0),
            rate: 0.15,
        },
        TaxBracket {
            lower: 50_000_000.0,
            upper: Some(100_000_000.0),
            rate: 0.20,
        },
        TaxBracket {
            lower: 100_000_000.0,
            upper: None,
            rate: 0.25,
        },
    ]
}

fn default_scenarios() -> Vec<ScenarioConfig> {
    vec![
        ScenarioConfig {
            name: "conservative".to_string(),
            people: 850_000,
            dollar_volume: 2_000.0,
        },
        ScenarioConfig {
            name: "median".to_string(),
            people: 4_250_000,
            dollar_volume: 5_000.0,
        },
        ScenarioConfig {
            name: "optimistic".to_string(),
            people: 8_500_000,
            dollar_volume: 10_000.0,
        },
    ]
}

fn default_realisation_rates() -> Vec<f64> {
    vec![0.5, 0.7, 0.9]
}

fn default_dollar_value_by_year() -> BTreeMap<i16, f64> {
    BTreeMap::from([
        (2020, 20_000.0),
        (2021, 25_000.0),
        (2022, 30_000.0),
        (2023, 40_000.0),
        (2024, 50_000.0),
    ])
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_sale_gap_days: default_max_sale_gap_days(),
            histogram_bins: default_histogram_bins(),
            seed: default_seed(),
            schedule: default_schedule(),
            scenarios: default_scenarios(),
            realisation_rates: default_realisation_rates(),
            dollar_value_by_year: default_dollar_value_by_year(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {e}")))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_saphyr::to_string(self)
            .map_err(|e| ConfigError::Serialize(format!("Failed to serialize config: {e}")))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    /// Validate the configured brackets into a usable schedule
    pub fn tax_schedule(&self) -> Result<TaxSchedule, ConfigError> {
        Ok(TaxSchedule::new(self.schedule.clone())?)
    }
}
