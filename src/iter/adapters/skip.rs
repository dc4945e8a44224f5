use crate::control::Option;
use crate::iter::{ExactSizeIterator, Iterator};

/// Skips the first `n` elements, then yields the rest.
///
/// The skip happens on the first pull, through the upstream's `nth`, so a
/// source that can jump (such as a slice) never touches the skipped
/// elements.
///
/// Created by [`Iterator::skip`].
#[derive(Debug, Clone)]
pub struct Skip<I> {
    iter: I,
    n: usize,
}

impl<I> Skip<I> {
    pub(crate) const fn new(iter: I, n: usize) -> Self {
        Self { iter, n }
    }
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.n > 0 {
            let n = std::mem::take(&mut self.n);
            self.iter.nth(n)
        } else {
            self.iter.next()
        }
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Skip<I> {
    fn len(&self) -> usize {
        self.iter.len().saturating_sub(self.n)
    }
}
