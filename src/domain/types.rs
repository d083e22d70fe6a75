//! Core domain types.
//!
//! These types are intentionally lightweight so they can be:
//!
//! - used in-memory during the search
//! - exported to delimited text or JSON
//! - cloned freely between the pipeline and the report layer
//!
//! All delays are integer picoseconds, matching the convention of cell-timing
//! exports (`RISE` / `FALL` columns). Signed `i64` keeps the distance
//! arithmetic free of casts: targets, deltas, and thresholds all live in the
//! same space.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One programmable delay-cell configuration from the catalog.
///
/// `select` is the tap-select identifier the hardware uses to pick this cell;
/// `rise` and `fall` are the measured propagation delays for the rising and
/// falling transition. Multiple cells may share a rise value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayEntry {
    pub select: String,
    pub rise: i64,
    pub fall: i64,
}

/// One position of a matched chain.
///
/// `target_*` is the arithmetic-progression value the position asked for;
/// `actual_*` is what the chosen cell measures. `distance` is the combined
/// absolute deviation `|actual_rise - target_rise| + |actual_fall -
/// target_fall|` (zero for the seed position, where target equals actual by
/// construction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceStep {
    pub target_rise: i64,
    pub target_fall: i64,
    pub actual_rise: i64,
    pub actual_fall: i64,
    pub select: String,
    pub distance: i64,
}

/// Core search tuning, passed explicitly (never global state).
///
/// An inverted window (`min_step > max_step`) is not rejected here; it simply
/// produces an empty candidate space in the driver.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchParams {
    /// Smallest step size (ps) to try.
    pub min_step: i64,
    /// Largest step size (ps) to try, inclusive.
    pub max_step: i64,
    /// Maximum rise deviation (ps) a candidate bucket may have from the
    /// target; combined rise+fall deviation is capped at twice this value.
    pub max_distance: i64,
}

/// The winning chain plus the `(start_rise, step)` pair that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestChain {
    pub start_rise: i64,
    pub step: i64,
    pub steps: Vec<SequenceStep>,
}

impl BestChain {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Driver output: the best chain found, if any, plus search-size diagnostics.
///
/// `best` is `None` exactly when the candidate space was empty (empty catalog
/// or `min_step > max_step`), never because of a failure.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub best: Option<BestChain>,
    /// Number of `(start_rise, step)` pairs evaluated.
    pub pairs_evaluated: usize,
}

/// Portable JSON representation of a completed search.
///
/// This is the machine-readable counterpart of the terminal report: the
/// parameters that produced the chain, how big the candidate space was, and
/// the chain itself. The schema is written by `io::sequence` and is stable
/// for downstream tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceFile {
    pub tool: String,
    pub params: SearchParams,
    pub catalog_entries: usize,
    pub pairs_evaluated: usize,
    pub start_rise: i64,
    pub step: i64,
    pub length: usize,
    pub total_distance: i64,
    pub steps: Vec<SequenceStep>,
}

/// A full run's configuration as understood by the pipeline.
///
/// Built from the `search` arg struct, defaults already applied.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub catalog: PathBuf,
    /// Requested chain length. Accepted but not consulted: the search always
    /// returns the longest chain it can find.
    pub target_length: usize,
    pub min_step: i64,
    pub max_step: i64,
    pub max_distance: i64,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub output: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

impl SearchConfig {
    /// The core-facing slice of this configuration.
    pub fn params(&self) -> SearchParams {
        SearchParams {
            min_step: self.min_step,
            max_step: self.max_step,
            max_distance: self.max_distance,
        }
    }
}

/// Synthetic catalog generation settings.
///
/// The generator lays out an ideal arithmetic ladder and perturbs it; see
/// `data::sample` for the noise model.
#[derive(Debug, Clone)]
pub struct SynthConfig {
    pub cells: usize,
    pub start_rise: i64,
    pub start_fall: i64,
    pub step: i64,
    /// Gaussian jitter applied to each measured delay, in ps.
    pub noise: f64,
    /// Probability that a cell is an outlier.
    pub outlier_prob: f64,
    /// Outlier shift, in units of `noise`.
    pub outlier_scale: f64,
    pub seed: u64,
}
