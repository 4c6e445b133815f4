use crate::PivotStrategy;
use crate::seq::KeyedSeq;

use super::{common, partition};

/// Quicksort of `left..right` into non-decreasing key order.
///
/// Only the smaller side of each split is handled recursively.
pub fn quick_sort<S: KeyedSeq + ?Sized>(
    seq: &mut S,
    mut left: usize,
    mut right: usize,
    strategy: PivotStrategy,
) {
    debug_assert!(left <= right && right <= seq.len());

    while right - left > 1 {
        let pivot = common::choose_pivot(seq, left, right, strategy);
        let part = partition::partition_3way(seq, left, right, pivot);
        let eq = common::equal_run_start(seq, left, part, pivot);

        // [left, eq) < pivot, [eq, part) == pivot, [part, right) > pivot.
        if eq - left < right - part {
            quick_sort(seq, left, eq, strategy);
            left = part;
        } else {
            quick_sort(seq, part, right, strategy);
            right = eq;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::ALL_PIVOT_STRATEGIES;
    use crate::seq::Indexed;

    fn sort_all(indices: &mut [usize], values: &[f64], strategy: PivotStrategy) {
        let len = indices.len();
        quick_sort(&mut Indexed::new(indices, values), 0, len, strategy);
    }

    fn gather(indices: &[usize], values: &[f64]) -> Vec<f64> {
        indices.iter().map(|&i| values[i]).collect()
    }

    fn assert_sorts_like_std(values: &[f64]) {
        for &strategy in &ALL_PIVOT_STRATEGIES {
            let mut indices: Vec<usize> = (0..values.len()).collect();
            sort_all(&mut indices, values, strategy);

            let mut expected = values.to_vec();
            expected.sort_unstable_by(f64::total_cmp);
            assert_eq!(gather(&indices, values), expected, "strategy={strategy:?}");

            let mut seen = indices.clone();
            seen.sort_unstable();
            assert_eq!(seen, (0..values.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42.0],
            vec![5.0, 3.0, 3.0, 8.0, 1.0],
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
            vec![4.0; 4],
            vec![7.0; 128],
            vec![f64::INFINITY, -0.0, 0.0, f64::NEG_INFINITY, f64::MAX, f64::MIN],
            vec![5.0, 5.0, 3.0, 3.0, 1.0, 1.0, 4.0, 4.0, 2.0, 2.0, 0.0, 0.0],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn known_case() {
        let values = [5.0, 3.0, 3.0, 8.0, 1.0];
        let mut indices = vec![0, 1, 2, 3, 4];
        sort_all(&mut indices, &values, PivotStrategy::Midpoint);
        assert_eq!(gather(&indices, &values), vec![1.0, 3.0, 3.0, 5.0, 8.0]);
        assert_eq!(indices[0], 4);
        assert_eq!(&indices[3..], &[0, 3]);
    }

    #[test]
    fn sorting_twice_keeps_order() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let values: Vec<f64> = (0..512).map(|_| rng.random_range(0..32) as f64).collect();
        let mut indices: Vec<usize> = (0..values.len()).collect();
        sort_all(&mut indices, &values, PivotStrategy::Midpoint);
        let once = gather(&indices, &values);
        sort_all(&mut indices, &values, PivotStrategy::Midpoint);
        assert_eq!(gather(&indices, &values), once);
    }

    #[test]
    fn subrange_leaves_rest_untouched() {
        let values = [9.0, 8.0, 7.0, 6.0, 5.0, 4.0];
        let mut indices = vec![0, 1, 2, 3, 4, 5];
        quick_sort(&mut Indexed::new(&mut indices, &values), 1, 5, PivotStrategy::Midpoint);
        assert_eq!(indices, vec![0, 4, 3, 2, 1, 5]);
    }

    #[test]
    fn partial_index_cover() {
        // Indices need not cover the whole value array.
        let values = [3.0, 10.0, 1.0, 7.0, 2.0];
        let mut indices = vec![3, 0, 4];
        sort_all(&mut indices, &values, PivotStrategy::MedianOfThree);
        assert_eq!(indices, vec![4, 0, 3]);
    }

    #[test]
    fn direct_slice_sorts_in_place() {
        let mut data = vec![3_u64, 9, 1, 1, 0, 7, 3];
        let len = data.len();
        quick_sort(&mut data[..], 0, len, PivotStrategy::Midpoint);
        assert_eq!(data, vec![0, 1, 1, 3, 3, 7, 9]);
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 32, 63, 64, 127, 128, 511, 2048] {
            let values: Vec<f64> = (0..size).map(|_| rng.random::<f64>() * 1e6 - 5e5).collect();
            assert_sorts_like_std(&values);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let values: Vec<f64> = (0..size)
                .map(|_| ((rng.random::<u64>() % 16) * 17) as f64)
                .collect();
            assert_sorts_like_std(&values);
        }
    }
}
