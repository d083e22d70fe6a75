//! Formatted terminal output.
//!
//! All console formatting lives here, next to its snapshot tests; the search
//! code itself never prints.

use crate::domain::SequenceStep;
use crate::io::ingest::CatalogData;
use crate::report::sequence_stats;

/// Format the post-load catalog summary (entry count + delay ranges).
///
/// The range lines are omitted for an empty catalog.
pub fn format_catalog_summary(data: &CatalogData) -> String {
    let mut out = String::new();
    out.push_str(&format!("Loaded {} entries\n", data.entries.len()));
    if let Some(stats) = &data.stats {
        out.push_str(&format!(
            "Rise range: {} - {} ps\n",
            stats.rise_min, stats.rise_max
        ));
        out.push_str(&format!(
            "Fall range: {} - {} ps\n",
            stats.fall_min, stats.fall_max
        ));
    }
    out
}

/// Format a chain as the fixed-width sequence table.
///
/// Layout: title (preceded by a blank line when non-empty), an 80-char rule,
/// the column header, one row per position numbered from 1, then totals and
/// step-spread lines. Spread lines appear only for chains with at least two
/// positions.
pub fn format_sequence_table(steps: &[SequenceStep], title: &str) -> String {
    if steps.is_empty() {
        return "No sequence found\n".to_string();
    }

    let mut out = String::new();

    if !title.is_empty() {
        out.push('\n');
        out.push_str(title);
        out.push('\n');
    }
    out.push_str(&"=".repeat(80));
    out.push('\n');
    out.push_str(&format!(
        "{:>3} | {:>5} | {:>5} | {:>5} | {:>5} | {:^16} | {:>4}\n",
        "#", "TGT_R", "TGT_F", "ACT_R", "ACT_F", "SELECT", "DIST"
    ));
    out.push_str(&"-".repeat(80));
    out.push('\n');

    for (i, s) in steps.iter().enumerate() {
        out.push_str(&format!(
            "{:>3} | {:>5} | {:>5} | {:>5} | {:>5} | {:^16} | {:>4}\n",
            i + 1,
            s.target_rise,
            s.target_fall,
            s.actual_rise,
            s.actual_fall,
            s.select,
            s.distance
        ));
    }

    out.push_str(&"-".repeat(80));
    out.push('\n');

    let stats = sequence_stats(steps);
    out.push_str(&format!(
        "Length: {}, Total distance: {}\n",
        steps.len(),
        stats.total_distance
    ));
    if let (Some(rise), Some(fall)) = (&stats.rise_steps, &stats.fall_steps) {
        out.push_str(&format!(
            "Rise steps: min={}, max={}, avg={:.1}\n",
            rise.min, rise.max, rise.avg
        ));
        out.push_str(&format!(
            "Fall steps: min={}, max={}, avg={:.1}\n",
            fall.min, fall.max, fall.avg
        ));
    }
    out.push_str(&"=".repeat(80));
    out.push('\n');

    out
}
