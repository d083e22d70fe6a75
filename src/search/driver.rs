//! Exhaustive search over every `(start_rise, step)` candidate.
//!
//! Candidate space:
//! - start values: every distinct rise delay in the catalog, ascending
//! - steps: every integer in `[min_step, max_step]`, ascending
//!
//! Each candidate grows its chain independently (parallel). Selection then
//! walks the candidates in enumeration order and keeps the first chain of
//! maximum length, so results are identical run to run regardless of thread
//! count.

use rayon::prelude::*;

use crate::domain::{BestChain, DelayEntry, SearchOutcome, SearchParams, SequenceStep};
use crate::search::builder::build_sequence;
use crate::search::index::RiseIndex;

/// Find the longest near-arithmetic delay chain in the catalog.
///
/// An empty candidate space (no entries, or `min_step > max_step`) is a
/// normal outcome, not an error: `best` is simply `None`. Whenever at least
/// one candidate exists the result is `Some`, because every start value seeds
/// a chain of length one or more.
pub fn find_longest_sequence(catalog: &[DelayEntry], params: SearchParams) -> SearchOutcome {
    let index = RiseIndex::build(catalog);

    let mut pairs: Vec<(i64, i64)> = Vec::new();
    for &start_rise in index.rise_values() {
        for step in params.min_step..=params.max_step {
            pairs.push((start_rise, step));
        }
    }

    // Grow each candidate's chain independently (parallel).
    let chains: Vec<Vec<SequenceStep>> = pairs
        .par_iter()
        .map(|&(start_rise, step)| build_sequence(&index, start_rise, step, params.max_distance))
        .collect();

    // Deterministic selection: longest chain wins; ties go to the earliest
    // candidate in enumeration order.
    let mut best_idx: Option<usize> = None;
    for (idx, chain) in chains.iter().enumerate() {
        let best_len = match best_idx {
            Some(i) => chains[i].len(),
            None => 0,
        };
        if chain.len() > best_len {
            best_idx = Some(idx);
        }
    }

    let best = best_idx.map(|i| {
        let (start_rise, step) = pairs[i];
        BestChain {
            start_rise,
            step,
            steps: chains[i].clone(),
        }
    });

    SearchOutcome {
        best,
        pairs_evaluated: pairs.len(),
    }
}
