//! Order-statistic selection and index sorting over numeric slices.
//!
//! Ranges are half-open: `[start, end)`. The direct family (`partition`,
//! `select`) permutes the value slice itself; the indirect family
//! (`partition_indices`, `select_indices`, `sort_indices`) permutes an index
//! slice and only reads the values through it.

mod algorithms;
mod error;
mod key;
mod seq;
mod view;

use std::ops::Range;

use seq::Indexed;

pub use error::{Result, SelectError};
pub use key::TotalKey;
pub use view::{arg_select, arg_select_with, argsort, argsort_with, max_index, min_index};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum PivotStrategy {
    /// Key at `(start + end) / 2`.
    #[default]
    Midpoint,
    /// Median of the keys at `start`, the midpoint and `end - 1`.
    MedianOfThree,
}

pub const ALL_PIVOT_STRATEGIES: [PivotStrategy; 2] =
    [PivotStrategy::Midpoint, PivotStrategy::MedianOfThree];

pub fn all_pivot_strategies() -> &'static [PivotStrategy] {
    &ALL_PIVOT_STRATEGIES
}

pub fn pivot_strategy_name(strategy: PivotStrategy) -> &'static str {
    match strategy {
        PivotStrategy::Midpoint => "midpoint",
        PivotStrategy::MedianOfThree => "median_of_three",
    }
}

#[inline]
pub(crate) fn check_range(range: &Range<usize>, len: usize) -> Result<()> {
    if range.start > range.end || range.end > len {
        return Err(SelectError::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}

#[inline]
pub(crate) fn check_count(k: usize, len: usize) -> Result<()> {
    if k > len {
        return Err(SelectError::CountOutOfRange { k, len });
    }
    Ok(())
}

#[inline]
pub(crate) fn check_indices(indices: &[usize], range: &Range<usize>, len: usize) -> Result<()> {
    for (position, &index) in indices[range.clone()].iter().enumerate() {
        if index >= len {
            return Err(SelectError::IndexOutOfBounds {
                position: range.start + position,
                index,
                len,
            });
        }
    }
    Ok(())
}

/// Three-way partition of `values[range]` around `pivot`.
///
/// Returns the boundary `j`: every position in `range.start..j` holds a key
/// `<= pivot` (keys below the pivot first), every position in `j..range.end`
/// a key `> pivot`.
pub fn partition<T: TotalKey>(values: &mut [T], range: Range<usize>, pivot: T) -> Result<usize> {
    check_range(&range, values.len())?;
    Ok(algorithms::partition::partition_3way(values, range.start, range.end, pivot))
}

/// [`partition`] over `values[indices[i]]`, permuting `indices` only.
pub fn partition_indices<T: TotalKey>(
    indices: &mut [usize],
    values: &[T],
    range: Range<usize>,
    pivot: T,
) -> Result<usize> {
    check_range(&range, indices.len())?;
    check_indices(indices, &range, values.len())?;
    Ok(algorithms::partition::partition_3way(
        &mut Indexed::new(indices, values),
        range.start,
        range.end,
        pivot,
    ))
}

/// Moves the `k` smallest keys of `values[range]` to the front of the range.
///
/// `k` counts from `range.start`. Every key after the first `k` is `>=` every
/// key among them; neither side is sorted.
pub fn select<T: TotalKey>(values: &mut [T], range: Range<usize>, k: usize) -> Result<()> {
    select_with(values, range, k, PivotStrategy::default())
}

/// [`select`] with an explicit pivot strategy.
pub fn select_with<T: TotalKey>(
    values: &mut [T],
    range: Range<usize>,
    k: usize,
    strategy: PivotStrategy,
) -> Result<()> {
    check_range(&range, values.len())?;
    check_count(k, range.len())?;
    algorithms::select::select(values, range.start, range.end, range.start + k, strategy);
    Ok(())
}

/// [`select`] over `values[indices[i]]`, permuting `indices` only.
pub fn select_indices<T: TotalKey>(
    indices: &mut [usize],
    values: &[T],
    range: Range<usize>,
    k: usize,
) -> Result<()> {
    select_indices_with(indices, values, range, k, PivotStrategy::default())
}

/// [`select_indices`] with an explicit pivot strategy.
pub fn select_indices_with<T: TotalKey>(
    indices: &mut [usize],
    values: &[T],
    range: Range<usize>,
    k: usize,
    strategy: PivotStrategy,
) -> Result<()> {
    check_range(&range, indices.len())?;
    check_count(k, range.len())?;
    check_indices(indices, &range, values.len())?;
    algorithms::select::select(
        &mut Indexed::new(indices, values),
        range.start,
        range.end,
        range.start + k,
        strategy,
    );
    Ok(())
}

/// Reorders `indices[range]` so that `values[indices[i]]` is non-decreasing
/// over the range. Not stable.
pub fn sort_indices<T: TotalKey>(
    indices: &mut [usize],
    values: &[T],
    range: Range<usize>,
) -> Result<()> {
    sort_indices_with(indices, values, range, PivotStrategy::default())
}

/// [`sort_indices`] with an explicit pivot strategy.
pub fn sort_indices_with<T: TotalKey>(
    indices: &mut [usize],
    values: &[T],
    range: Range<usize>,
    strategy: PivotStrategy,
) -> Result<()> {
    check_range(&range, indices.len())?;
    check_indices(indices, &range, values.len())?;
    algorithms::sort_indices::quick_sort(
        &mut Indexed::new(indices, values),
        range.start,
        range.end,
        strategy,
    );
    Ok(())
}
