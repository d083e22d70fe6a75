//! Greedy chain extension for a single `(start_rise, step)` candidate.
//!
//! The builder seeds a chain at `start_rise` and then walks the arithmetic
//! targets `start + i*step`, accepting at each position the nearest catalog
//! entry within the distance thresholds. The first position with no
//! acceptable entry ends the chain permanently; there is no backtracking and
//! no retry at a different step. A longest-uniform-subsequence search would do
//! better globally; this greedy cut-off is the intended behavior, and the
//! driver compensates by trying every `(start, step)` pair.

use crate::domain::{DelayEntry, SequenceStep};
use crate::search::index::RiseIndex;

/// Hard cap on chain length, seed included.
pub const MAX_CHAIN_LEN: usize = 100;

/// Grow a chain from `start_rise` with the given step.
///
/// The seed is the **first** entry of the `start_rise` bucket in catalog
/// order (not the best match), with target = actual and distance 0. The fall
/// target for position `i` is `seed.fall + i*step`: rise and fall are assumed
/// to progress with the same step even though their starting values differ,
/// so fall error accrues against the seed's anchor rather than being tracked
/// independently.
///
/// Returns the accumulated chain; empty only if `start_rise` has no bucket.
/// Never fails: sparse catalogs just produce short chains, and the target
/// arithmetic saturates at the `i64` limits, so extreme steps degrade to
/// unmatchable targets instead of overflowing.
pub fn build_sequence(
    index: &RiseIndex<'_>,
    start_rise: i64,
    step: i64,
    max_distance: i64,
) -> Vec<SequenceStep> {
    let Some(seed) = index.bucket(start_rise).first() else {
        return Vec::new();
    };

    let mut steps = Vec::with_capacity(8);
    steps.push(SequenceStep {
        target_rise: start_rise,
        target_fall: seed.fall,
        actual_rise: seed.rise,
        actual_fall: seed.fall,
        select: seed.select.clone(),
        distance: 0,
    });

    for i in 1..MAX_CHAIN_LEN as i64 {
        let target_rise = start_rise.saturating_add(i.saturating_mul(step));
        let target_fall = seed.fall.saturating_add(i.saturating_mul(step));

        let Some((entry, distance)) = nearest_match(index, target_rise, target_fall, max_distance)
        else {
            break;
        };

        steps.push(SequenceStep {
            target_rise,
            target_fall,
            actual_rise: entry.rise,
            actual_fall: entry.fall,
            select: entry.select.clone(),
            distance,
        });
    }

    steps
}

/// Nearest acceptable entry for one target position.
///
/// Scans buckets with `|rise - target_rise| <= max_distance` in ascending
/// rise order, entries in catalog order within each bucket, and keeps the
/// minimum combined deviation. Acceptance requires the combined deviation to
/// be at most `2*max_distance`. Only a strictly smaller deviation displaces
/// the running minimum, so ties resolve to the earliest entry in scan order.
fn nearest_match<'a>(
    index: &RiseIndex<'a>,
    target_rise: i64,
    target_fall: i64,
    max_distance: i64,
) -> Option<(&'a DelayEntry, i64)> {
    let mut best: Option<(&'a DelayEntry, i64)> = None;

    let window = index.buckets_in_window(
        target_rise.saturating_sub(max_distance),
        target_rise.saturating_add(max_distance),
    );
    for (_, bucket) in window {
        for &entry in bucket {
            let rise_dev = entry.rise.saturating_sub(target_rise).saturating_abs();
            let fall_dev = entry.fall.saturating_sub(target_fall).saturating_abs();
            let distance = rise_dev.saturating_add(fall_dev);
            if distance > max_distance.saturating_mul(2) {
                continue;
            }
            let replace = match best {
                Some((_, best_distance)) => distance < best_distance,
                None => true,
            };
            if replace {
                best = Some((entry, distance));
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DelayEntry;

    fn entry(select: &str, rise: i64, fall: i64) -> DelayEntry {
        DelayEntry {
            select: select.to_string(),
            rise,
            fall,
        }
    }

    fn selects(steps: &[SequenceStep]) -> Vec<&str> {
        steps.iter().map(|s| s.select.as_str()).collect()
    }

    #[test]
    fn builds_three_step_chain_and_rejects_far_entry() {
        let catalog = vec![
            entry("A", 10, 12),
            entry("B", 18, 20),
            entry("C", 26, 29),
            entry("D", 50, 999),
        ];
        let index = RiseIndex::build(&catalog);

        let steps = build_sequence(&index, 10, 8, 3);

        // D is unreachable: at target_rise=34, |50-34| = 16 > 3.
        assert_eq!(selects(&steps), ["A", "B", "C"]);
        assert_eq!(steps[0].distance, 0);
        assert_eq!(steps[1].distance, 0);
        // C: rise exact, fall off by one (29 vs target 28).
        assert_eq!(steps[2].target_fall, 28);
        assert_eq!(steps[2].distance, 1);
    }

    #[test]
    fn targets_follow_the_arithmetic_progression() {
        let catalog = vec![entry("A", 10, 12), entry("B", 18, 20), entry("C", 26, 29)];
        let index = RiseIndex::build(&catalog);

        let steps = build_sequence(&index, 10, 8, 3);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.target_rise, 10 + 8 * i as i64);
            assert_eq!(step.target_fall, 12 + 8 * i as i64);
        }
    }

    #[test]
    fn seed_is_first_catalog_entry_in_bucket() {
        // Same rise, wildly different fall: the seed must be the first entry in
        // catalog order, and the fall targets anchor to its fall value.
        let catalog = vec![entry("X", 20, 100), entry("Y", 20, 30)];
        let index = RiseIndex::build(&catalog);

        let steps = build_sequence(&index, 20, 5, 0);
        assert_eq!(steps[0].select, "X");
        assert_eq!(steps[0].target_fall, 100);
        assert_eq!(steps[0].actual_fall, 100);
    }

    #[test]
    fn missing_start_bucket_yields_empty_chain() {
        let catalog = vec![entry("A", 10, 12)];
        let index = RiseIndex::build(&catalog);
        assert!(build_sequence(&index, 11, 8, 3).is_empty());
    }

    #[test]
    fn negative_max_distance_stops_after_seed() {
        let catalog = vec![entry("A", 10, 10), entry("B", 18, 18)];
        let index = RiseIndex::build(&catalog);

        let steps = build_sequence(&index, 10, 8, -1);
        assert_eq!(selects(&steps), ["A"]);
    }

    #[test]
    fn gap_terminates_chain_permanently() {
        // C would match position 3 perfectly, but the unmatched position 2
        // already ended the chain.
        let catalog = vec![entry("A", 0, 0), entry("B", 10, 10), entry("C", 30, 30)];
        let index = RiseIndex::build(&catalog);

        let steps = build_sequence(&index, 0, 10, 2);
        assert_eq!(selects(&steps), ["A", "B"]);
    }

    #[test]
    fn combined_deviation_threshold_is_twice_max_distance() {
        // Rise on target, fall off by 8: combined 8 > 2*3 rejects.
        let catalog = vec![entry("A", 10, 10), entry("B", 18, 26)];
        let index = RiseIndex::build(&catalog);
        assert_eq!(build_sequence(&index, 10, 8, 3).len(), 1);

        // Fall off by 6: combined 6 <= 2*3 accepts.
        let catalog = vec![entry("A", 10, 10), entry("B", 18, 24)];
        let index = RiseIndex::build(&catalog);
        let steps = build_sequence(&index, 10, 8, 3);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].distance, 6);
    }

    #[test]
    fn equal_distance_prefers_lower_rise_bucket() {
        // D(19,20) and P(21,20) are both distance 1 from target (20,20); the
        // ascending-rise scan reaches D first.
        let catalog = vec![entry("A", 10, 10), entry("P", 21, 20), entry("D", 19, 20)];
        let index = RiseIndex::build(&catalog);

        let steps = build_sequence(&index, 10, 10, 3);
        assert_eq!(steps[1].select, "D");
    }

    #[test]
    fn equal_distance_within_bucket_prefers_catalog_order() {
        // B and C share rise 20 and are both distance 1 from target (20,20);
        // B precedes C in the catalog.
        let catalog = vec![entry("A", 10, 10), entry("B", 20, 21), entry("C", 20, 19)];
        let index = RiseIndex::build(&catalog);

        let steps = build_sequence(&index, 10, 10, 3);
        assert_eq!(steps[1].select, "B");
    }

    #[test]
    fn extreme_step_saturates_instead_of_overflowing() {
        let catalog = vec![entry("A", 10, 12), entry("B", 18, 20)];
        let index = RiseIndex::build(&catalog);

        // Position 1 targets clamp to the i64 limits and match nothing.
        let steps = build_sequence(&index, 10, i64::MAX, 5);
        assert_eq!(selects(&steps), ["A"]);

        let steps = build_sequence(&index, 10, i64::MIN, 5);
        assert_eq!(selects(&steps), ["A"]);
    }

    #[test]
    fn extreme_window_saturates_distance_math() {
        // A window this wide reaches every bucket, so the deviation math runs
        // against saturated targets and a negative fall.
        let catalog = vec![entry("A", 10, -1000), entry("B", 18, 20)];
        let index = RiseIndex::build(&catalog);

        let steps = build_sequence(&index, 10, i64::MAX, i64::MAX);
        assert_eq!(steps.len(), MAX_CHAIN_LEN);
        assert_eq!(steps[1].select, "A");
        assert_eq!(steps[1].target_rise, i64::MAX);
        assert_eq!(steps[1].distance, i64::MAX);
    }

    #[test]
    fn chain_length_is_capped() {
        let catalog: Vec<DelayEntry> = (0..150)
            .map(|i| entry(&format!("T{i:03}"), i * 10, i * 10))
            .collect();
        let index = RiseIndex::build(&catalog);

        let steps = build_sequence(&index, 0, 10, 0);
        assert_eq!(steps.len(), MAX_CHAIN_LEN);
    }
}
