//! Bridge from `std` iterators.

use std::iter::{
    DoubleEndedIterator as StdDoubleEndedIterator, ExactSizeIterator as StdExactSizeIterator,
    Iterator as StdIterator,
};

use crate::control::Option;
use crate::iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};

/// Wraps a `std` iterator so the operations of this crate can drive it.
///
/// Capabilities carry over: a double-ended or exact-size `std` iterator
/// yields a double-ended or exact-size `FromStd`.
#[derive(Debug, Clone)]
pub struct FromStd<I> {
    inner: I,
}

/// Converts anything `std` can iterate into an [`Iterator`].
///
/// # Examples
///
/// ```rust
/// use lazyseq::iter::from_std;
/// use lazyseq::prelude::*;
///
/// let squares: Vec<u32> = from_std(1..=4).map(|value| value * value).collect();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// assert_eq!(from_std(0..10).rev().next(), Some(9));
/// ```
pub fn from_std<I: IntoIterator>(iterable: I) -> FromStd<I::IntoIter> {
    FromStd {
        inner: iterable.into_iter(),
    }
}

impl<I: StdIterator> Iterator for FromStd<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.inner.next().into()
    }

    fn nth(&mut self, n: usize) -> Option<I::Item> {
        self.inner.nth(n).into()
    }
}

impl<I: StdDoubleEndedIterator> DoubleEndedIterator for FromStd<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.inner.next_back().into()
    }
}

impl<I: StdExactSizeIterator> ExactSizeIterator for FromStd<I> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Option::{None, Some};
    use rstest::rstest;

    #[rstest]
    fn test_wraps_range() {
        let mut iter = from_std(1..4);
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.nth(0), Some(2));
        assert_eq!(iter.next(), None);
    }

    #[rstest]
    fn test_infinite_source_stays_lazy() {
        let mut iter = from_std(std::iter::repeat('z'));
        assert_eq!(iter.nth(1_000), Some('z'));
    }
}
