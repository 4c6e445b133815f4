use crate::PivotStrategy;
use crate::key::{TotalKey, median3};
use crate::seq::KeyedSeq;

#[inline]
pub fn choose_pivot_midpoint<S: KeyedSeq + ?Sized>(
    seq: &S,
    left: usize,
    right: usize,
) -> S::Key {
    debug_assert!(left < right);
    seq.key(left + ((right - left) >> 1))
}

#[inline]
pub fn choose_pivot_median3<S: KeyedSeq + ?Sized>(
    seq: &S,
    left: usize,
    right: usize,
) -> S::Key {
    debug_assert!(left < right);
    let a = seq.key(left);
    let b = seq.key(left + ((right - left) >> 1));
    let c = seq.key(right - 1);
    median3(a, b, c)
}

#[inline]
pub fn choose_pivot<S: KeyedSeq + ?Sized>(
    seq: &S,
    left: usize,
    right: usize,
    strategy: PivotStrategy,
) -> S::Key {
    match strategy {
        PivotStrategy::Midpoint => choose_pivot_midpoint(seq, left, right),
        PivotStrategy::MedianOfThree => choose_pivot_median3(seq, left, right),
    }
}

/// Start of the run of pivot-equal keys that ends at `part - 1`.
///
/// `part` is a partition boundary of `left..right` for a pivot drawn from that
/// range, so `part - 1` holds the pivot. The walk never goes below `left`.
#[inline]
pub fn equal_run_start<S: KeyedSeq + ?Sized>(
    seq: &S,
    left: usize,
    part: usize,
    pivot: S::Key,
) -> usize {
    debug_assert!(left < part);
    debug_assert!(seq.key(part - 1).key_eq(&pivot));

    let mut pos = part - 1;
    while pos > left && seq.key(pos - 1).key_eq(&pivot) {
        pos -= 1;
    }
    pos
}
