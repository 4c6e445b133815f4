use std::cmp::Ordering;

/// Numeric key with a total order.
///
/// Floats use IEEE 754 `totalOrder`: NaN sorts above every number and
/// `-0.0 < 0.0`.
pub trait TotalKey: Copy {
    fn total_cmp_key(&self, other: &Self) -> Ordering;

    #[inline(always)]
    fn key_lt(&self, other: &Self) -> bool {
        self.total_cmp_key(other) == Ordering::Less
    }

    #[inline(always)]
    fn key_eq(&self, other: &Self) -> bool {
        self.total_cmp_key(other) == Ordering::Equal
    }
}

impl TotalKey for f32 {
    #[inline(always)]
    fn total_cmp_key(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl TotalKey for f64 {
    #[inline(always)]
    fn total_cmp_key(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

macro_rules! impl_total_key_for_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl TotalKey for $t {
                #[inline(always)]
                fn total_cmp_key(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_total_key_for_ord!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[inline]
pub(crate) fn median3<T: TotalKey>(a: T, b: T, c: T) -> T {
    if a.key_lt(&b) {
        if b.key_lt(&c) {
            b
        } else if a.key_lt(&c) {
            c
        } else {
            a
        }
    } else if a.key_lt(&c) {
        a
    } else if b.key_lt(&c) {
        c
    } else {
        b
    }
}
