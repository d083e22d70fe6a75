//! Export the selected sequence (and generated catalogs) to CSV.
//!
//! The sequence export is meant to be easy to consume in downstream scripts:
//! two `#` comment lines, then plain comma-separated rows. Catalog exports use
//! the same schema the ingest side reads (`SELECT,RISE,FALL`).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{DelayEntry, SequenceStep};
use crate::error::AppError;

/// Write the selected sequence to a CSV file.
pub fn write_sequence_csv(path: &Path, steps: &[SequenceStep]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::input(format!("Failed to create sequence CSV '{}': {e}", path.display()))
    })?;
    write_sequence(&mut file, steps).map_err(|e| {
        AppError::input(format!("Failed to write sequence CSV '{}': {e}", path.display()))
    })
}

/// Write a delay catalog to a CSV file.
///
/// The output loads back through `io::ingest` unchanged.
pub fn write_catalog_csv(path: &Path, entries: &[DelayEntry]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::input(format!("Failed to create catalog CSV '{}': {e}", path.display()))
    })?;
    write_catalog(&mut file, entries).map_err(|e| {
        AppError::input(format!("Failed to write catalog CSV '{}': {e}", path.display()))
    })
}

fn write_sequence(out: &mut impl Write, steps: &[SequenceStep]) -> std::io::Result<()> {
    writeln!(out, "# Delay Sequence")?;
    writeln!(out, "# TGT_RISE,TGT_FALL,ACT_RISE,ACT_FALL,SELECT,DISTANCE")?;
    for s in steps {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            s.target_rise, s.target_fall, s.actual_rise, s.actual_fall, s.select, s.distance
        )?;
    }
    Ok(())
}

fn write_catalog(out: &mut impl Write, entries: &[DelayEntry]) -> std::io::Result<()> {
    writeln!(out, "SELECT,RISE,FALL")?;
    for e in entries {
        writeln!(out, "{},{},{}", e.select, e.rise, e.fall)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ingest::read_catalog;

    #[test]
    fn sequence_export_matches_expected_bytes() {
        let steps = vec![
            SequenceStep {
                target_rise: 10,
                target_fall: 12,
                actual_rise: 10,
                actual_fall: 12,
                select: "TAP000".to_string(),
                distance: 0,
            },
            SequenceStep {
                target_rise: 18,
                target_fall: 20,
                actual_rise: 17,
                actual_fall: 21,
                select: "TAP004".to_string(),
                distance: 2,
            },
        ];

        let mut buf = Vec::new();
        write_sequence(&mut buf, &steps).unwrap();

        let expected = "\
# Delay Sequence
# TGT_RISE,TGT_FALL,ACT_RISE,ACT_FALL,SELECT,DISTANCE
10,12,10,12,TAP000,0
18,20,17,21,TAP004,2
";
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn exported_catalog_loads_back_unchanged() {
        let entries = vec![
            DelayEntry {
                select: "TAP000".to_string(),
                rise: 150,
                fall: 165,
            },
            DelayEntry {
                select: "TAP001".to_string(),
                rise: 162,
                fall: 177,
            },
        ];

        let mut buf = Vec::new();
        write_catalog(&mut buf, &entries).unwrap();

        let data = read_catalog(buf.as_slice()).unwrap();
        assert_eq!(data.entries, entries);
    }
}
