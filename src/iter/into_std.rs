//! Bridge to `std` iteration.

use std::iter::{
    DoubleEndedIterator as StdDoubleEndedIterator, ExactSizeIterator as StdExactSizeIterator,
    FusedIterator, Iterator as StdIterator,
};

use super::{DoubleEndedIterator, ExactSizeIterator, Fuse, Iterator};

/// Adapts an [`Iterator`] to `std::iter::Iterator`, so it can drive a `for`
/// loop or feed any `std` API.
///
/// Created by [`Iterator::into_std`].
#[derive(Debug, Clone)]
pub struct IntoStd<I> {
    iter: I,
}

impl<I> IntoStd<I> {
    pub(crate) const fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Returns the wrapped iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: Iterator> StdIterator for IntoStd<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.next().into()
    }

    fn nth(&mut self, n: usize) -> Option<I::Item> {
        self.iter.nth(n).into()
    }
}

impl<I: DoubleEndedIterator> StdDoubleEndedIterator for IntoStd<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.next_back().into()
    }
}

impl<I: ExactSizeIterator> StdExactSizeIterator for IntoStd<I> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<I: Iterator> FusedIterator for IntoStd<Fuse<I>> {}
