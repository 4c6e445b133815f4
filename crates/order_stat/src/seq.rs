//! Keyed sequences: the capability pair the partition, select and sort
//! routines are written against.
//!
//! A plain slice `[T]` reads and swaps its own slots (direct family).
//! [`Indexed`] reads `values[indices[pos]]` and swaps `indices` entries only
//! (indirect family).

use crate::key::TotalKey;

pub trait KeyedSeq {
    type Key: TotalKey;

    fn len(&self) -> usize;

    /// Key at logical position `pos`.
    fn key(&self, pos: usize) -> Self::Key;

    /// Exchange logical positions `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);
}

impl<T: TotalKey> KeyedSeq for [T] {
    type Key = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn key(&self, pos: usize) -> T {
        self[pos]
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

/// Index slice viewed through a read-only value slice.
#[derive(Debug)]
pub struct Indexed<'a, T> {
    indices: &'a mut [usize],
    values: &'a [T],
}

impl<'a, T: TotalKey> Indexed<'a, T> {
    /// Entries of `indices` must be valid positions into `values` wherever
    /// they are read; out-of-range entries panic on access.
    pub fn new(indices: &'a mut [usize], values: &'a [T]) -> Self {
        Self { indices, values }
    }
}

impl<T: TotalKey> KeyedSeq for Indexed<'_, T> {
    type Key = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline(always)]
    fn key(&self, pos: usize) -> T {
        self.values[self.indices[pos]]
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.indices.swap(a, b);
    }
}
