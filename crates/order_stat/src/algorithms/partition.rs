use crate::key::TotalKey;
use crate::seq::KeyedSeq;

/// Three-way partition of `left..right` around `pivot`.
///
/// Keys below the pivot end up first, then keys equal to it, then keys above
/// it. Returns the boundary `j`: positions `< j` hold keys `<= pivot`,
/// positions `>= j` hold keys `> pivot`.
pub fn partition_3way<S: KeyedSeq + ?Sized>(
    seq: &mut S,
    left: usize,
    right: usize,
    pivot: S::Key,
) -> usize {
    debug_assert!(left <= right && right <= seq.len());

    // [left, lt) < pivot, [lt, k) == pivot, [gt, right) > pivot.
    let mut lt = left;
    let mut gt = right;
    let mut k = left;

    while k < gt {
        while pivot.key_lt(&seq.key(k)) {
            gt -= 1;
            if gt == k {
                return gt;
            }
            seq.swap(gt, k);
        }
        if seq.key(k).key_lt(&pivot) {
            if lt < k {
                seq.swap(lt, k);
            }
            lt += 1;
        }
        k += 1;
    }

    gt
}
