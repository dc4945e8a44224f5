//! Borrowing iterator over a linear buffer.

use crate::control::Option::{self, None, Some};
use crate::iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};

/// Yields references to the elements of a slice, front to back.
///
/// Keeps a front cursor and a back bound; pulls from either end move them
/// toward each other and the iterator is exhausted once they meet. Skipping
/// is constant-time.
///
/// Created by [`Iterable::seq`](crate::typeclass::Iterable::seq) on slices,
/// arrays and vectors.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let values = vec![10, 20, 30];
/// let mut iter = values.seq();
/// assert_eq!(iter.as_slice(), &[10, 20, 30]);
/// iter.next();
/// assert_eq!(iter.as_slice(), &[20, 30]);
/// ```
#[derive(Debug)]
pub struct SliceIter<'a, T> {
    values: &'a [T],
    front: usize,
    back: usize,
}

impl<'a, T> SliceIter<'a, T> {
    pub(crate) const fn new(values: &'a [T]) -> Self {
        Self {
            values,
            front: 0,
            back: values.len(),
        }
    }

    /// The elements not yet yielded from either end.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        &self.values[self.front..self.back]
    }
}

// A derive would demand `T: Clone`; only the cursors are copied.
impl<T> Clone for SliceIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for SliceIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let value = &self.values[self.front];
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    fn advance_by(&mut self, n: usize) -> bool {
        let step = n.min(self.back - self.front);
        self.front += step;
        step == n
    }
}

impl<T> DoubleEndedIterator for SliceIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(&self.values[self.back])
        } else {
            None
        }
    }

    fn advance_back_by(&mut self, n: usize) -> bool {
        let step = n.min(self.back - self.front);
        self.back -= step;
        step == n
    }
}

impl<T> ExactSizeIterator for SliceIter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.back - self.front
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_yields_in_order_then_none() {
        let values = [1, 2, 3];
        let mut iter = SliceIter::new(&values);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[rstest]
    fn test_ends_meet() {
        let values = [1, 2];
        let mut iter = SliceIter::new(&values);
        assert_eq!(iter.next_back(), Some(&2));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }

    #[rstest]
    #[case(2, true, 1)]
    #[case(3, true, 0)]
    #[case(5, false, 0)]
    fn test_advance_by(#[case] n: usize, #[case] complete: bool, #[case] remaining: usize) {
        let values = [1, 2, 3];
        let mut iter = SliceIter::new(&values);
        assert_eq!(iter.advance_by(n), complete);
        assert_eq!(iter.len(), remaining);
    }

    #[rstest]
    fn test_advance_back_by_then_nth() {
        let values = [1, 2, 3, 4, 5];
        let mut iter = SliceIter::new(&values);
        assert!(iter.advance_back_by(2));
        assert_eq!(iter.nth(2), Some(&3));
        assert_eq!(iter.next(), None);
    }

    #[rstest]
    fn test_clone_is_independent() {
        let values = [1, 2, 3];
        let mut iter = SliceIter::new(&values);
        iter.next();
        let mut copy = iter.clone();
        assert_eq!(copy.next(), Some(&2));
        assert_eq!(copy.next(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
    }
}
