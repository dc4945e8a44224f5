//! Comparable type class - total order over values.
//!
//! `Comparable` is the ordering capability `cmp`, `max`, `min` and
//! `is_sorted` rely on. `ToOrdering` turns whatever a comparator returns
//! into an [`Ordering`]: an `Ordering` is returned unchanged, while a signed
//! number is classified by its sign, so `|a, b| a - b` is a valid
//! comparator.
//!
//! # Laws
//!
//! For all `a`, `b`:
//!
//! ```text
//! a.compare(&b) == b.compare(&a).reverse()        // antisymmetry
//! a.compare(&b).is_equal() == a.equals(&b)       // consistency with Equatable
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::control::Ordering;
//! use lazyseq::typeclass::{Comparable, ToOrdering};
//!
//! assert_eq!(3_i32.compare(&5), Ordering::Less);
//! assert_eq!("pear".compare("apple"), Ordering::Greater);
//! assert_eq!(Ordering::Equal.to_ordering(), Ordering::Equal);
//! assert_eq!((-0.5_f64).to_ordering(), Ordering::Less);
//! ```

use std::cmp;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

use super::Equatable;
use crate::control::{Option, Ordering};

/// A type class for values with a total order.
pub trait Comparable: Equatable {
    /// Compares `self` with `other`.
    fn compare(&self, other: &Self) -> Ordering;
}

/// Conversion of a comparator result into an [`Ordering`].
pub trait ToOrdering {
    /// Converts `self` into an `Ordering`.
    fn to_ordering(self) -> Ordering;
}

// =============================================================================
// ToOrdering Implementations
// =============================================================================

impl ToOrdering for Ordering {
    #[inline]
    fn to_ordering(self) -> Ordering {
        self
    }
}

impl ToOrdering for cmp::Ordering {
    #[inline]
    fn to_ordering(self) -> Ordering {
        self.into()
    }
}

macro_rules! impl_to_ordering_for_signed {
    ($($type:ty),* $(,)?) => {
        $(
            impl ToOrdering for $type {
                #[inline]
                fn to_ordering(self) -> Ordering {
                    self.cmp(&0).into()
                }
            }
        )*
    };
}

impl_to_ordering_for_signed!(i8, i16, i32, i64, i128, isize);

impl ToOrdering for f32 {
    /// `NaN` has no sign and classifies as `Equal`.
    #[inline]
    fn to_ordering(self) -> Ordering {
        self.partial_cmp(&0.0).map_or(Ordering::Equal, Ordering::from)
    }
}

impl ToOrdering for f64 {
    /// `NaN` has no sign and classifies as `Equal`.
    #[inline]
    fn to_ordering(self) -> Ordering {
        self.partial_cmp(&0.0).map_or(Ordering::Equal, Ordering::from)
    }
}

// =============================================================================
// Scalar and Text Implementations
// =============================================================================

macro_rules! impl_comparable_via_ord {
    ($($type:ty),* $(,)?) => {
        $(
            impl Comparable for $type {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other).into()
                }
            }
        )*
    };
}

// Text compares by code point; no locale tables are consulted.
impl_comparable_via_ord!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String,
);

impl Comparable for f32 {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other).into()
    }
}

impl Comparable for f64 {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other).into()
    }
}

// =============================================================================
// Reference Implementations
// =============================================================================

impl<T: Comparable + ?Sized> Comparable for &T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }
}

impl<T: Comparable + ?Sized> Comparable for Box<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(other)
    }
}

// =============================================================================
// Sequence Implementations
// =============================================================================

/// Lexicographic comparison; a proper prefix orders first.
fn compare_sequences<'a, T, L, R>(mut left: L, mut right: R) -> Ordering
where
    T: Comparable + 'a,
    L: Iterator<Item = &'a T>,
    R: Iterator<Item = &'a T>,
{
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(left), Some(right)) => match left.compare(right) {
                Ordering::Equal => {}
                ordering => return ordering,
            },
        }
    }
}

impl<T: Comparable> Comparable for [T] {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        compare_sequences(self.iter(), other.iter())
    }
}

impl<T: Comparable, const N: usize> Comparable for [T; N] {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.as_slice().compare(other.as_slice())
    }
}

impl<T: Comparable> Comparable for Vec<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.as_slice().compare(other.as_slice())
    }
}

impl<T: Comparable> Comparable for VecDeque<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        compare_sequences(self.iter(), other.iter())
    }
}

impl<T: Comparable> Comparable for BTreeSet<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        compare_sequences(self.iter(), other.iter())
    }
}

impl<K: Comparable, V: Comparable> Comparable for BTreeMap<K, V> {
    fn compare(&self, other: &Self) -> Ordering {
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some((left_key, left_value)), Some((right_key, right_value))) => {
                    match left_key
                        .compare(right_key)
                        .then(left_value.compare(right_value))
                    {
                        Ordering::Equal => {}
                        ordering => return ordering,
                    }
                }
            }
        }
    }
}

// =============================================================================
// Tuple Implementations
// =============================================================================

macro_rules! impl_comparable_for_tuple {
    ($($name:ident : $index:tt),+) => {
        impl<$($name: Comparable),+> Comparable for ($($name,)+) {
            #[inline]
            fn compare(&self, other: &Self) -> Ordering {
                Ordering::Equal
                    $(.then(self.$index.compare(&other.$index)))+
            }
        }
    };
}

impl_comparable_for_tuple!(A: 0);
impl_comparable_for_tuple!(A: 0, B: 1);
impl_comparable_for_tuple!(A: 0, B: 1, C: 2);
impl_comparable_for_tuple!(A: 0, B: 1, C: 2, D: 3);

// =============================================================================
// Control Primitive Implementations
// =============================================================================

/// `None` orders before any `Some`.
impl<T: Comparable> Comparable for Option<T> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => left.compare(right),
            (Self::None, Self::None) => Ordering::Equal,
            (Self::None, Self::Some(_)) => Ordering::Less,
            (Self::Some(_), Self::None) => Ordering::Greater,
        }
    }
}

impl Comparable for Ordering {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        Ordering::from_sign(i64::from(self.as_sign()) - i64::from(other.as_sign()))
    }
}
