use crate::PivotStrategy;
use crate::seq::KeyedSeq;

use super::{common, partition};

/// Quickselect on `left..right` so that positions `left..target` hold the
/// `target - left` smallest keys of the range.
pub fn select<S: KeyedSeq + ?Sized>(
    seq: &mut S,
    mut left: usize,
    mut right: usize,
    target: usize,
    strategy: PivotStrategy,
) {
    debug_assert!(left <= target && target <= right && right <= seq.len());

    while left < target && target < right {
        let pivot = common::choose_pivot(seq, left, right, strategy);
        let part = partition::partition_3way(seq, left, right, pivot);

        if part < target {
            left = part;
        } else if target < part {
            let eq = common::equal_run_start(seq, left, part, pivot);
            if eq <= target {
                return;
            }
            right = eq;
        } else {
            return;
        }
    }
}
