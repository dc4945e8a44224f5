//! Equatable type class - structural equality.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! a.equals(&a)                                   // reflexivity
//! a.equals(&b) == b.equals(&a)                   // symmetry
//! a.equals(&b) && b.equals(&c) => a.equals(&c)   // transitivity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::control::Option;
//! use lazyseq::typeclass::Equatable;
//!
//! assert!(Option::some(10).equals(&Option::some(10)));
//! assert!(!Option::some(10).equals(&Option::none()));
//! assert!(Option::<i32>::none().equals(&Option::none()));
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::control::{ControlFlow, Option, Ordering};

/// A type class for values that can be compared for structural equality.
pub trait Equatable {
    /// Returns `true` if `self` and `other` are structurally equal.
    fn equals(&self, other: &Self) -> bool;

    /// Returns `true` if `self` and `other` differ.
    #[inline]
    fn not_equals(&self, other: &Self) -> bool {
        !self.equals(other)
    }
}

// =============================================================================
// Scalar and Text Implementations
// =============================================================================

macro_rules! impl_equatable_via_eq {
    ($($type:ty),* $(,)?) => {
        $(
            impl Equatable for $type {
                #[inline]
                fn equals(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_equatable_via_eq!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String,
);

impl Equatable for f32 {
    /// Floats are equal when their total order says so.
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.total_cmp(other).is_eq()
    }
}

impl Equatable for f64 {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.total_cmp(other).is_eq()
    }
}

// =============================================================================
// Reference Implementations
// =============================================================================

impl<T: Equatable + ?Sized> Equatable for &T {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(*other)
    }
}

impl<T: Equatable + ?Sized> Equatable for Box<T> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(other)
    }
}

// =============================================================================
// Sequence Implementations
// =============================================================================

fn sequences_equal<'a, T, L, R>(left: L, right: R) -> bool
where
    T: Equatable + 'a,
    L: ExactSizeIterator<Item = &'a T>,
    R: ExactSizeIterator<Item = &'a T>,
{
    left.len() == right.len() && left.zip(right).all(|(left, right)| left.equals(right))
}

impl<T: Equatable> Equatable for [T] {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        sequences_equal(self.iter(), other.iter())
    }
}

impl<T: Equatable, const N: usize> Equatable for [T; N] {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.as_slice().equals(other.as_slice())
    }
}

impl<T: Equatable> Equatable for Vec<T> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.as_slice().equals(other.as_slice())
    }
}

impl<T: Equatable> Equatable for VecDeque<T> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        sequences_equal(self.iter(), other.iter())
    }
}

impl<T: Equatable> Equatable for BTreeSet<T> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        sequences_equal(self.iter(), other.iter())
    }
}

impl<K: Equatable, V: Equatable> Equatable for BTreeMap<K, V> {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((left_key, left_value), (right_key, right_value))| {
                    left_key.equals(right_key) && left_value.equals(right_value)
                })
    }
}

/// Hash sets have no iteration order, so equality is membership-based.
impl<T: Eq + Hash, S: BuildHasher> Equatable for HashSet<T, S> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

/// Hash maps have no iteration order: keys are matched by hash lookup and
/// values by `Equatable`.
impl<K: Eq + Hash, V: Equatable, S: BuildHasher> Equatable for HashMap<K, V, S> {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| {
                other
                    .get(key)
                    .is_some_and(|other_value| value.equals(other_value))
            })
    }
}

// =============================================================================
// Tuple Implementations
// =============================================================================

macro_rules! impl_equatable_for_tuple {
    ($($name:ident : $index:tt),+) => {
        impl<$($name: Equatable),+> Equatable for ($($name,)+) {
            #[inline]
            fn equals(&self, other: &Self) -> bool {
                $(self.$index.equals(&other.$index))&&+
            }
        }
    };
}

impl_equatable_for_tuple!(A: 0);
impl_equatable_for_tuple!(A: 0, B: 1);
impl_equatable_for_tuple!(A: 0, B: 1, C: 2);
impl_equatable_for_tuple!(A: 0, B: 1, C: 2, D: 3);

// =============================================================================
// Control Primitive Implementations
// =============================================================================

impl<T: Equatable> Equatable for Option<T> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => left.equals(right),
            (Self::None, Self::None) => true,
            _ => false,
        }
    }
}

impl Equatable for Ordering {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl<B: Equatable, C: Equatable> Equatable for ControlFlow<B, C> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Continue(left), Self::Continue(right)) => left.equals(right),
            (Self::Break(left), Self::Break(right)) => left.equals(right),
            _ => false,
        }
    }
}
