//! Reporting utilities: sequence statistics and formatted terminal output.

use crate::domain::SequenceStep;

pub mod format;

pub use format::{format_catalog_summary, format_sequence_table};

/// Spread of consecutive actual deltas along one transition edge.
#[derive(Debug, Clone)]
pub struct StepSpread {
    pub min: i64,
    pub max: i64,
    pub avg: f64,
}

/// Aggregate stats for a chain.
///
/// The spreads describe the deltas between consecutive **actual** delays, not
/// the requested targets, so they show how uniform the chain really is. They
/// are `None` for chains shorter than two positions.
#[derive(Debug, Clone)]
pub struct SequenceStats {
    pub total_distance: i64,
    pub rise_steps: Option<StepSpread>,
    pub fall_steps: Option<StepSpread>,
}

/// Compute total distance and step spreads for a chain.
///
/// The folds saturate so that chains carrying saturated per-step distances
/// still report a total instead of overflowing.
pub fn sequence_stats(steps: &[SequenceStep]) -> SequenceStats {
    SequenceStats {
        total_distance: steps.iter().fold(0, |acc, s| acc.saturating_add(s.distance)),
        rise_steps: spread_of(steps, |s| s.actual_rise),
        fall_steps: spread_of(steps, |s| s.actual_fall),
    }
}

fn spread_of(steps: &[SequenceStep], value: impl Fn(&SequenceStep) -> i64) -> Option<StepSpread> {
    if steps.len() < 2 {
        return None;
    }

    let deltas: Vec<i64> = steps
        .windows(2)
        .map(|w| value(&w[1]).saturating_sub(value(&w[0])))
        .collect();
    let min = *deltas.iter().min()?;
    let max = *deltas.iter().max()?;
    let sum = deltas.iter().fold(0i64, |acc, d| acc.saturating_add(*d));
    let avg = sum as f64 / deltas.len() as f64;

    Some(StepSpread { min, max, avg })
}
