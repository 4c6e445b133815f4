//! Top-k and sorted views that hand back index vectors instead of
//! reordering the caller's data.

use crate::error::Result;
use crate::key::TotalKey;
use crate::seq::Indexed;
use crate::{PivotStrategy, algorithms, check_count};

/// Positions of `values` in non-decreasing key order. Not stable.
pub fn argsort<T: TotalKey>(values: &[T]) -> Vec<usize> {
    argsort_with(values, PivotStrategy::default())
}

pub fn argsort_with<T: TotalKey>(values: &[T], strategy: PivotStrategy) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    let len = indices.len();
    algorithms::sort_indices::quick_sort(&mut Indexed::new(&mut indices, values), 0, len, strategy);
    indices
}

/// Positions of the `k` smallest keys, in no particular order.
pub fn arg_select<T: TotalKey>(values: &[T], k: usize) -> Result<Vec<usize>> {
    arg_select_with(values, k, PivotStrategy::default())
}

pub fn arg_select_with<T: TotalKey>(
    values: &[T],
    k: usize,
    strategy: PivotStrategy,
) -> Result<Vec<usize>> {
    let len = values.len();
    check_count(k, len)?;

    let mut indices: Vec<usize> = (0..len).collect();
    algorithms::select::select(&mut Indexed::new(&mut indices, values), 0, len, k, strategy);
    indices.truncate(k);
    Ok(indices)
}

/// First position of a smallest key.
pub fn min_index<T: TotalKey>(values: &[T]) -> Option<usize> {
    let (&first, rest) = values.split_first()?;
    let mut best = 0;
    let mut min = first;
    for (i, x) in rest.iter().enumerate() {
        if x.key_lt(&min) {
            min = *x;
            best = i + 1;
        }
    }
    Some(best)
}

/// First position of a largest key.
pub fn max_index<T: TotalKey>(values: &[T]) -> Option<usize> {
    let (&first, rest) = values.split_first()?;
    let mut best = 0;
    let mut max = first;
    for (i, x) in rest.iter().enumerate() {
        if max.key_lt(x) {
            max = *x;
            best = i + 1;
        }
    }
    Some(best)
}
