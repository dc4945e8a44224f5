//! IntoSeq and Iterable - the iteration boundary.
//!
//! `IntoSeq` converts a value into an [`Iterator`]. Every iterator converts
//! to itself, and host containers convert to the matching source:
//!
//! | Value | Iterator | Item |
//! |---|---|---|
//! | `&[T]`, `&[T; N]`, `&Vec<T>` | [`SliceIter`] | `&T` |
//! | `Vec<T>`, `[T; N]` | [`IntoIter`] | `T` |
//! | `&VecDeque<T>` | [`FromStd`] | `&T` |
//! | `&str`, `&String` | [`Chars`] | `char` |
//! | `&HashSet<T>`, `&BTreeSet<T>` (and owned) | [`SetIter`] | `&T` (`T`) |
//! | `&HashMap<K, V>`, `&BTreeMap<K, V>` (and owned) | [`MapIter`] | `(&K, &V)` (`(K, V)`) |
//! | `Option<T>`, `&Option<T>` | [`OptionIter`] | `T` (`&T`) |
//!
//! [`Iterable::seq`] is the borrowing shorthand: `container.seq()` is
//! `(&container).into_seq()`.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let owned = vec![1, 2, 3];
//! assert_eq!(owned.seq().count(), 3);
//! assert_eq!("añb".seq().nth(1), Some('ñ'));
//! let total: i32 = owned.into_seq().sum();
//! assert_eq!(total, 6);
//! ```

use std::collections::{
    BTreeMap, BTreeSet, HashMap, HashSet, VecDeque, btree_map, btree_set, hash_map, hash_set,
    vec_deque,
};

use crate::control::Option;
use crate::iter::{
    Chars, FromStd, IntoIter, Iterator, MapIter, OptionIter, SetIter, SliceIter, from_std,
};

/// Conversion into an [`Iterator`].
pub trait IntoSeq {
    /// The type of the elements being iterated over.
    type Item;

    /// The iterator this value turns into.
    type IntoSeq: Iterator<Item = Self::Item>;

    /// Creates an iterator from `self`.
    fn into_seq(self) -> Self::IntoSeq;
}

/// Borrowing traversal for any value whose reference implements
/// [`IntoSeq`].
pub trait Iterable {
    /// Iterates over `self` without consuming it.
    fn seq<'a>(&'a self) -> <&'a Self as IntoSeq>::IntoSeq
    where
        &'a Self: IntoSeq,
    {
        IntoSeq::into_seq(self)
    }
}

impl<C: ?Sized> Iterable for C {}

impl<I: Iterator> IntoSeq for I {
    type Item = I::Item;
    type IntoSeq = I;

    #[inline]
    fn into_seq(self) -> I {
        self
    }
}

// =============================================================================
// Linear Buffers
// =============================================================================

impl<'a, T> IntoSeq for &'a [T] {
    type Item = &'a T;
    type IntoSeq = SliceIter<'a, T>;

    #[inline]
    fn into_seq(self) -> SliceIter<'a, T> {
        SliceIter::new(self)
    }
}

impl<'a, T, const N: usize> IntoSeq for &'a [T; N] {
    type Item = &'a T;
    type IntoSeq = SliceIter<'a, T>;

    #[inline]
    fn into_seq(self) -> SliceIter<'a, T> {
        SliceIter::new(self)
    }
}

impl<'a, T> IntoSeq for &'a Vec<T> {
    type Item = &'a T;
    type IntoSeq = SliceIter<'a, T>;

    #[inline]
    fn into_seq(self) -> SliceIter<'a, T> {
        SliceIter::new(self)
    }
}

impl<T> IntoSeq for Vec<T> {
    type Item = T;
    type IntoSeq = IntoIter<T>;

    #[inline]
    fn into_seq(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<T, const N: usize> IntoSeq for [T; N] {
    type Item = T;
    type IntoSeq = IntoIter<T>;

    #[inline]
    fn into_seq(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoSeq for &'a VecDeque<T> {
    type Item = &'a T;
    type IntoSeq = FromStd<vec_deque::Iter<'a, T>>;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        from_std(self)
    }
}

impl<T> IntoSeq for VecDeque<T> {
    type Item = T;
    type IntoSeq = IntoIter<T>;

    #[inline]
    fn into_seq(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

// =============================================================================
// Text
// =============================================================================

impl<'a> IntoSeq for &'a str {
    type Item = char;
    type IntoSeq = Chars<'a>;

    #[inline]
    fn into_seq(self) -> Chars<'a> {
        Chars::new(self)
    }
}

impl<'a> IntoSeq for &'a String {
    type Item = char;
    type IntoSeq = Chars<'a>;

    #[inline]
    fn into_seq(self) -> Chars<'a> {
        Chars::new(self)
    }
}

// =============================================================================
// Sets and Maps
// =============================================================================

impl<'a, T, S> IntoSeq for &'a HashSet<T, S> {
    type Item = &'a T;
    type IntoSeq = SetIter<hash_set::Iter<'a, T>>;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        SetIter::new(self.iter())
    }
}

impl<T, S> IntoSeq for HashSet<T, S> {
    type Item = T;
    type IntoSeq = SetIter<hash_set::IntoIter<T>>;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        SetIter::new(std::iter::IntoIterator::into_iter(self))
    }
}

impl<'a, T> IntoSeq for &'a BTreeSet<T> {
    type Item = &'a T;
    type IntoSeq = SetIter<btree_set::Iter<'a, T>>;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        SetIter::new(self.iter())
    }
}

impl<T> IntoSeq for BTreeSet<T> {
    type Item = T;
    type IntoSeq = SetIter<btree_set::IntoIter<T>>;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        SetIter::new(std::iter::IntoIterator::into_iter(self))
    }
}

impl<'a, K, V, S> IntoSeq for &'a HashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoSeq = MapIter<hash_map::Iter<'a, K, V>>;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        MapIter::new(self.iter())
    }
}

impl<K, V, S> IntoSeq for HashMap<K, V, S> {
    type Item = (K, V);
    type IntoSeq = MapIter<hash_map::IntoIter<K, V>>;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        MapIter::new(std::iter::IntoIterator::into_iter(self))
    }
}

impl<'a, K, V> IntoSeq for &'a BTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoSeq = MapIter<btree_map::Iter<'a, K, V>>;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        MapIter::new(self.iter())
    }
}

impl<K, V> IntoSeq for BTreeMap<K, V> {
    type Item = (K, V);
    type IntoSeq = MapIter<btree_map::IntoIter<K, V>>;

    #[inline]
    fn into_seq(self) -> Self::IntoSeq {
        MapIter::new(std::iter::IntoIterator::into_iter(self))
    }
}

// =============================================================================
// Option
// =============================================================================

impl<T> IntoSeq for Option<T> {
    type Item = T;
    type IntoSeq = OptionIter<T>;

    #[inline]
    fn into_seq(self) -> OptionIter<T> {
        OptionIter::new(self)
    }
}

impl<'a, T> IntoSeq for &'a Option<T> {
    type Item = &'a T;
    type IntoSeq = OptionIter<&'a T>;

    #[inline]
    fn into_seq(self) -> OptionIter<&'a T> {
        OptionIter::new(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Option::{None, Some};
    use crate::iter::DoubleEndedIterator;
    use rstest::rstest;

    #[rstest]
    fn test_iterator_converts_to_itself() {
        let values = [1, 2, 3];
        let mut iter = values.seq();
        iter.next();
        let mut same = iter.into_seq();
        assert_eq!(same.next(), Some(&2));
    }

    #[rstest]
    fn test_borrowed_and_owned_buffers() {
        let values = vec![1, 2, 3];
        assert_eq!(values.seq().next_back(), Some(&3));
        assert_eq!(values.as_slice().seq().next(), Some(&1));
        assert_eq!(values.into_seq().next_back(), Some(3));
        assert_eq!([4, 5].into_seq().next(), Some(4));
    }

    #[rstest]
    fn test_deque() {
        let values: VecDeque<i32> = VecDeque::from([1, 2, 3]);
        assert_eq!(values.seq().next_back(), Some(&3));
        assert_eq!(values.into_seq().next(), Some(1));
    }

    #[rstest]
    fn test_text_yields_chars() {
        let owned = String::from("hé");
        let mut chars = owned.seq();
        assert_eq!(chars.next(), Some('h'));
        assert_eq!(chars.next(), Some('é'));
        assert_eq!(chars.next(), None);
        assert_eq!("".seq().next(), None);
    }

    #[rstest]
    fn test_sets_and_maps() {
        let set = BTreeSet::from([3, 1, 2]);
        assert_eq!(set.seq().next(), Some(&1));
        assert_eq!(set.into_seq().count(), 3);

        let hashed: HashSet<&str> = HashSet::from(["only"]);
        assert_eq!(hashed.seq().next(), Some(&"only"));

        let map = BTreeMap::from([("b", 2), ("a", 1)]);
        assert_eq!(map.seq().next(), Some((&"a", &1)));
        assert_eq!(map.into_seq().last(), Some(("b", 2)));

        let hash_map: HashMap<char, u8> = HashMap::from([('k', 9)]);
        assert_eq!(hash_map.seq().next(), Some((&'k', &9)));
    }

    #[rstest]
    fn test_option() {
        let present = Some(5);
        assert_eq!(present.seq().next(), Some(&5));
        assert_eq!(present.into_seq().count(), 1);
        assert_eq!(Option::<i32>::None.into_seq().next(), None);
    }
}
