//! Input loading: daily price history from CSV, annual inflation from XLSX.

mod inflation;
mod prices;

pub use inflation::load_inflation_xlsx;
pub use prices::load_price_csv;

use std::fmt;

/// Error types for input loading
#[derive(Debug)]
pub enum LoadError {
    Io(String),
    Parse(String),
    MissingColumn(&'static str),
    NoData(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "IO error: {msg}"),
            LoadError::Parse(msg) => write!(f, "Parse error: {msg}"),
            LoadError::MissingColumn(column) => write!(f, "Missing column: {column}"),
            LoadError::NoData(msg) => write!(f, "No usable rows: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}
