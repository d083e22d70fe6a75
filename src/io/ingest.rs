//! CSV ingest and validation.
//!
//! Turns a delay-catalog CSV into a clean `Vec<DelayEntry>` that is safe to
//! search:
//!
//! - required columns are checked up front, with clear errors (exit code 2)
//! - a malformed row aborts the run with its line number; silently skipping
//!   it would change what the search sees
//! - entries keep their file order, which later acts as the tie-break order
//!   inside a rise bucket

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::DelayEntry;
use crate::error::AppError;

/// Summary stats about the catalog actually loaded.
#[derive(Debug, Clone)]
pub struct CatalogStats {
    pub n_entries: usize,
    pub rise_min: i64,
    pub rise_max: i64,
    pub fall_min: i64,
    pub fall_max: i64,
}

/// Ingest output: entries in file order + range stats.
///
/// `stats` is `None` for an empty catalog. An empty catalog is not an ingest
/// error; the search simply finds nothing.
#[derive(Debug, Clone)]
pub struct CatalogData {
    pub entries: Vec<DelayEntry>,
    pub stats: Option<CatalogStats>,
}

/// Load a delay catalog from a CSV file.
pub fn load_catalog(path: &Path) -> Result<CatalogData, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::input(format!("Failed to open catalog '{}': {e}", path.display()))
    })?;
    read_catalog(file)
}

/// Parse a delay catalog from any reader.
///
/// Split out from [`load_catalog`] so tests can drive it with in-memory CSV.
pub fn read_catalog(input: impl Read) -> Result<CatalogData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let columns = header_positions(&headers);
    ensure_required_columns_exist(&columns)?;

    let mut entries = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        // The header occupies line 1 and records() counts from 0, so the
        // first data row is line 2.
        let line = idx + 2;

        let record =
            result.map_err(|e| AppError::input(format!("Line {line}: CSV parse error: {e}")))?;

        let entry = parse_row(&record, &columns)
            .map_err(|msg| AppError::input(format!("Line {line}: {msg}")))?;
        entries.push(entry);
    }

    let stats = compute_stats(&entries);
    Ok(CatalogData { entries, stats })
}

/// Map normalized header names to column positions.
///
/// Names are trimmed, lowercased and stripped of a leading UTF-8 BOM.
/// Spreadsheet exports often prefix the first header with one, and a
/// BOM-carrying "select" would otherwise fail schema validation.
fn header_positions(headers: &StringRecord) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for (idx, raw) in headers.iter().enumerate() {
        let name = raw.trim().trim_start_matches('\u{feff}').to_ascii_lowercase();
        map.insert(name, idx);
    }
    map
}

fn ensure_required_columns_exist(columns: &HashMap<String, usize>) -> Result<(), AppError> {
    for name in ["select", "rise", "fall"] {
        if !columns.contains_key(name) {
            return Err(AppError::input(format!(
                "Missing required column: `{name}`"
            )));
        }
    }
    Ok(())
}

fn parse_row(record: &StringRecord, columns: &HashMap<String, usize>) -> Result<DelayEntry, String> {
    let select = field(record, columns, "select")?.to_string();
    let rise = parse_ps(field(record, columns, "rise")?, "rise")?;
    let fall = parse_ps(field(record, columns, "fall")?, "fall")?;

    Ok(DelayEntry { select, rise, fall })
}

/// Fetch a required field. Column presence was validated up front, so the
/// only failure left is an absent or empty value.
fn field<'a>(
    record: &'a StringRecord,
    columns: &HashMap<String, usize>,
    name: &str,
) -> Result<&'a str, String> {
    let value = columns
        .get(name)
        .and_then(|idx| record.get(*idx))
        .map_or("", str::trim);
    if value.is_empty() {
        return Err(format!("Missing required value: `{name}`"));
    }
    Ok(value)
}

fn parse_ps(s: &str, name: &str) -> Result<i64, String> {
    s.parse::<i64>()
        .map_err(|_| format!("Invalid `{name}` value '{s}' (expected integer picoseconds)."))
}

fn compute_stats(entries: &[DelayEntry]) -> Option<CatalogStats> {
    let first = entries.first()?;

    let mut rise_min = first.rise;
    let mut rise_max = first.rise;
    let mut fall_min = first.fall;
    let mut fall_max = first.fall;

    for e in entries {
        rise_min = rise_min.min(e.rise);
        rise_max = rise_max.max(e.rise);
        fall_min = fall_min.min(e.fall);
        fall_max = fall_max.max(e.fall);
    }

    Some(CatalogStats {
        n_entries: entries.len(),
        rise_min,
        rise_max,
        fall_min,
        fall_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_entries_in_file_order() {
        let csv = "SELECT,RISE,FALL\nTAP001,150,165\nTAP000,142,158\n";
        let data = read_catalog(csv.as_bytes()).unwrap();

        assert_eq!(data.entries.len(), 2);
        assert_eq!(data.entries[0].select, "TAP001");
        assert_eq!(data.entries[0].rise, 150);
        assert_eq!(data.entries[0].fall, 165);
        assert_eq!(data.entries[1].select, "TAP000");

        let stats = data.stats.unwrap();
        assert_eq!(stats.n_entries, 2);
        assert_eq!(stats.rise_min, 142);
        assert_eq!(stats.rise_max, 150);
        assert_eq!(stats.fall_min, 158);
        assert_eq!(stats.fall_max, 165);
    }

    #[test]
    fn headers_are_case_insensitive_and_bom_tolerant() {
        let csv = "\u{feff}Select,rise,Fall\nT0,10,12\n";
        let data = read_catalog(csv.as_bytes()).unwrap();
        assert_eq!(data.entries[0].select, "T0");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "SELECT,RISE,FALL,NOTE\nT0,10,12,slow corner\n";
        let data = read_catalog(csv.as_bytes()).unwrap();
        assert_eq!(data.entries.len(), 1);
        assert_eq!(data.entries[0].fall, 12);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let csv = "SELECT,RISE\nT0,10\n";
        let err = read_catalog(csv.as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("`fall`"));
    }

    #[test]
    fn bad_value_is_reported_with_line_number() {
        let csv = "SELECT,RISE,FALL\nT0,10,12\nT1,abc,14\n";
        let err = read_catalog(csv.as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        let msg = err.to_string();
        assert!(msg.contains("Line 3"), "unexpected message: {msg}");
        assert!(msg.contains("`rise`"), "unexpected message: {msg}");
    }

    #[test]
    fn empty_value_is_an_error() {
        let csv = "SELECT,RISE,FALL\nT0,,12\n";
        let err = read_catalog(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Missing required value"));
    }

    #[test]
    fn empty_catalog_is_not_an_error() {
        let csv = "SELECT,RISE,FALL\n";
        let data = read_catalog(csv.as_bytes()).unwrap();
        assert!(data.entries.is_empty());
        assert!(data.stats.is_none());
    }

    #[test]
    fn negative_delays_are_accepted() {
        // The search treats delays as plain integers; sign conventions are the
        // catalog's business.
        let csv = "SELECT,RISE,FALL\nT0,-5,-3\n";
        let data = read_catalog(csv.as_bytes()).unwrap();
        assert_eq!(data.entries[0].rise, -5);
    }
}
