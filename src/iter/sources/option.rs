use crate::control::Option;
use crate::iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};

/// Yields the value of a `Some`, or nothing for `None`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let present: Vec<i32> = Some(4).into_seq().chain(None).collect();
/// assert_eq!(present, vec![4]);
/// ```
#[derive(Debug, Clone)]
pub struct OptionIter<T> {
    inner: Option<T>,
}

impl<T> OptionIter<T> {
    pub(crate) const fn new(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for OptionIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }
}

impl<T> DoubleEndedIterator for OptionIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for OptionIter<T> {
    fn len(&self) -> usize {
        usize::from(self.inner.is_some())
    }
}
