//! Iterators that can be pulled from both ends, and iterators that know
//! their remaining length.

use super::Iterator;
use super::adapters::Rev;
use crate::control::ControlFlow;
use crate::control::Option::{self, None, Some};

/// An iterator that can also yield elements from the back.
///
/// Front and back pulls consume the same underlying sequence: once they
/// meet, both ends report `None`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let values = [1, 2, 3, 4];
/// let mut iter = values.seq();
///
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&4));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// assert_eq!(iter.next_back(), None);
/// ```
pub trait DoubleEndedIterator: Iterator {
    /// Pulls the next element from the back.
    fn next_back(&mut self) -> Option<Self::Item>;

    /// Discards up to `n` elements from the back.
    ///
    /// Returns `true` if all `n` elements existed.
    fn advance_back_by(&mut self, n: usize) -> bool {
        for _ in 0..n {
            if self.next_back().is_none() {
                return false;
            }
        }
        true
    }

    /// Returns the `n`th element counted from the back (zero-based).
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        if self.advance_back_by(n) {
            self.next_back()
        } else {
            None
        }
    }

    /// Reverses the direction of iteration.
    ///
    /// The result is single-ended: reversing it again does not compile.
    /// Its back-end operations are available as inherent methods on
    /// [`Rev`].
    fn rev(self) -> Rev<Self>
    where
        Self: Sized,
    {
        Rev::new(self)
    }

    /// Searches from the back for an element satisfying `predicate`.
    fn rfind<P>(&mut self, mut predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.try_rfold((), |(), item| {
            if predicate(&item) {
                ControlFlow::Break(item)
            } else {
                ControlFlow::Continue(())
            }
        })
        .break_value()
    }

    /// Folds from the back, draining the iterator.
    fn rfold<B, F>(mut self, init: B, mut function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut accumulator = init;
        while let Some(item) = self.next_back() {
            accumulator = function(accumulator, item);
        }
        accumulator
    }

    /// Short-circuiting fold from the back; see [`Iterator::try_fold`].
    fn try_rfold<B, F, R>(&mut self, init: B, mut function: F) -> ControlFlow<R, B>
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> ControlFlow<R, B>,
    {
        let mut accumulator = init;
        while let Some(item) = self.next_back() {
            match function(accumulator, item) {
                ControlFlow::Continue(next) => accumulator = next,
                ControlFlow::Break(result) => return ControlFlow::Break(result),
            }
        }
        ControlFlow::Continue(accumulator)
    }

    /// Searches from the back and returns the front-based index of the
    /// first element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let values = [1, 2, 3, 2, 1];
    /// assert_eq!(values.seq().rposition(|value| *value == 2), Some(3));
    /// assert_eq!(values.seq().rposition(|value| *value == 9), None);
    /// ```
    fn rposition<P>(&mut self, mut predicate: P) -> Option<usize>
    where
        Self: Sized + ExactSizeIterator,
        P: FnMut(Self::Item) -> bool,
    {
        let length = self.len();
        self.try_rfold(length, |index, item| {
            let index = index - 1;
            if predicate(item) {
                ControlFlow::Break(index)
            } else {
                ControlFlow::Continue(index)
            }
        })
        .break_value()
    }
}

/// An iterator that knows exactly how many elements remain.
pub trait ExactSizeIterator: Iterator {
    /// Number of elements left to yield.
    fn len(&self) -> usize;

    /// Returns `true` if no elements remain.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<I: DoubleEndedIterator + ?Sized> DoubleEndedIterator for &mut I {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        (**self).next_back()
    }

    fn advance_back_by(&mut self, n: usize) -> bool {
        (**self).advance_back_by(n)
    }
}

impl<I: ExactSizeIterator + ?Sized> ExactSizeIterator for &mut I {
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<I: DoubleEndedIterator + ?Sized> DoubleEndedIterator for Box<I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        (**self).next_back()
    }
}

impl<I: ExactSizeIterator + ?Sized> ExactSizeIterator for Box<I> {
    fn len(&self) -> usize {
        (**self).len()
    }
}
