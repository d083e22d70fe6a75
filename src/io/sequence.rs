//! Read/write sequence JSON files.
//!
//! Sequence JSON is the portable representation of a search result:
//! - the winning chain with per-position targets and matches
//! - the parameters that produced it
//! - candidate-space diagnostics
//!
//! The schema is defined by `domain::SequenceFile`. Written by
//! `search --export-json`, read back by the `plot` subcommand.

use std::fs::File;
use std::path::Path;

use crate::domain::{BestChain, SearchParams, SequenceFile};
use crate::error::AppError;

/// Write a sequence JSON file.
pub fn write_sequence_json(
    path: &Path,
    best: &BestChain,
    params: SearchParams,
    catalog_entries: usize,
    pairs_evaluated: usize,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::input(format!("Failed to create sequence JSON '{}': {e}", path.display()))
    })?;

    let total_distance = best
        .steps
        .iter()
        .fold(0i64, |acc, s| acc.saturating_add(s.distance));
    let doc = SequenceFile {
        tool: "taps".to_string(),
        params,
        catalog_entries,
        pairs_evaluated,
        start_rise: best.start_rise,
        step: best.step,
        length: best.len(),
        total_distance,
        steps: best.steps.clone(),
    };

    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::input(format!("Failed to write sequence JSON: {e}")))?;

    Ok(())
}

/// Read a sequence JSON file.
pub fn read_sequence_json(path: &Path) -> Result<SequenceFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::input(format!("Failed to open sequence JSON '{}': {e}", path.display()))
    })?;
    let doc: SequenceFile = serde_json::from_reader(file)
        .map_err(|e| AppError::input(format!("Invalid sequence JSON: {e}")))?;
    Ok(doc)
}
