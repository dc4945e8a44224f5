use crate::control::Option::{self, None};
use crate::iter::{ExactSizeIterator, Iterator};

/// Yields at most `n` elements.
///
/// Once `n` elements have been yielded the upstream is not pulled again,
/// which makes `take` the usual way to bound an endless iterator.
///
/// Created by [`Iterator::take`].
#[derive(Debug, Clone)]
pub struct Take<I> {
    iter: I,
    n: usize,
}

impl<I> Take<I> {
    pub(crate) const fn new(iter: I, n: usize) -> Self {
        Self { iter, n }
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.n == 0 {
            None
        } else {
            self.n -= 1;
            self.iter.next()
        }
    }

    fn nth(&mut self, n: usize) -> Option<I::Item> {
        if self.n > n {
            self.n -= n + 1;
            self.iter.nth(n)
        } else {
            if self.n > 0 {
                self.iter.advance_by(self.n);
                self.n = 0;
            }
            None
        }
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Take<I> {
    fn len(&self) -> usize {
        self.iter.len().min(self.n)
    }
}
