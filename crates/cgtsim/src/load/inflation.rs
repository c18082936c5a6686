//! Annual inflation rates from the source workbook.

use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use cgtsim_core::model::{InflationRecord, InflationTable};

use super::LoadError;

const YEAR_COLUMN: &str = "year_miladi";
const RATE_COLUMN: &str = "persent";

/// Load annual inflation rates from an XLSX workbook
///
/// Sheets are scanned for a header row carrying the year and rate columns;
/// the first sheet that yields records wins.
pub fn load_inflation_xlsx<P: AsRef<Path>>(path: P) -> Result<InflationTable, LoadError> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| LoadError::Io(format!("Failed to open {}: {e}", path.display())))?;

    let sheet_names = workbook.sheet_names().to_vec();
    for sheet_name in sheet_names {
        let Ok(range) = workbook.worksheet_range(&sheet_name) else {
            continue;
        };
        let records = parse_sheet(&range);
        if !records.is_empty() {
            tracing::info!(
                sheet = %sheet_name,
                years = records.len(),
                "Loaded annual inflation rates"
            );
            return Ok(InflationTable::new(records));
        }
    }

    Err(LoadError::MissingColumn(YEAR_COLUMN))
}

/// Extract records from one sheet; empty when the header row is absent
pub(crate) fn parse_sheet(range: &Range<Data>) -> Vec<InflationRecord> {
    let Some((header_idx, year_col, rate_col)) = find_header_row(range) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for row in range.rows().skip(header_idx + 1) {
        let Some(year) = cell_year(row.get(year_col)) else {
            continue;
        };
        let Some(rate) = cell_f64(row.get(rate_col)) else {
            continue;
        };
        records.push(InflationRecord {
            year,
            annual_rate_pct: rate,
        });
    }
    records
}

fn find_header_row(range: &Range<Data>) -> Option<(usize, usize, usize)> {
    for (row_idx, row) in range.rows().enumerate() {
        let mut year_col = None;
        let mut rate_col = None;
        for (col_idx, cell) in row.iter().enumerate() {
            match cell_str(cell) {
                Some(name) if name == YEAR_COLUMN => year_col = Some(col_idx),
                Some(name) if name == RATE_COLUMN => rate_col = Some(col_idx),
                _ => {}
            }
        }
        if let (Some(year), Some(rate)) = (year_col, rate_col) {
            return Some((row_idx, year, rate));
        }
    }
    None
}

fn cell_str(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => Some(s.trim().to_string()),
        Data::Empty => None,
        other => Some(other.to_string().trim().to_string()),
    }
}

fn cell_f64(cell: Option<&Data>) -> Option<f64> {
    match cell? {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    }
}

/// Years arrive as floats from Excel; reject anything that is not a whole
/// in-range year.
fn cell_year(cell: Option<&Data>) -> Option<i16> {
    let value = cell_f64(cell)?;
    if value.fract() == 0.0 && (1000.0..=9999.0).contains(&value) {
        Some(value as i16)
    } else {
        None
    }
}
