//! Owning iterator over a linear buffer.

use std::collections::VecDeque;

use crate::control::Option;
use crate::iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};

/// Yields the elements of a vector or array by value.
///
/// Created by [`IntoSeq::into_seq`](crate::typeclass::IntoSeq::into_seq) on
/// `Vec<T>` and `[T; N]`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    values: VecDeque<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(values: impl Into<VecDeque<T>>) -> Self {
        Self {
            values: values.into(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.values.pop_front().into()
    }

    fn advance_by(&mut self, n: usize) -> bool {
        let step = n.min(self.values.len());
        drop(self.values.drain(..step));
        step == n
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.values.pop_back().into()
    }

    fn advance_back_by(&mut self, n: usize) -> bool {
        let step = n.min(self.values.len());
        self.values.truncate(self.values.len() - step);
        step == n
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }
}
