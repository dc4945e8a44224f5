use crate::control::Option::{self, None, Some};
use crate::iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};

/// Returns `None` forever once the underlying iterator has returned `None`.
///
/// The upstream is dropped at that point and never pulled again.
///
/// Created by [`Iterator::fuse`].
#[derive(Debug, Clone)]
pub struct Fuse<I> {
    iter: Option<I>,
}

impl<I> Fuse<I> {
    pub(crate) const fn new(iter: I) -> Self {
        Self { iter: Some(iter) }
    }
}

/// Pulls through `slot` and clears it when the pull comes back empty.
pub(super) fn and_then_or_clear<T, U>(
    slot: &mut Option<T>,
    pull: impl FnOnce(&mut T) -> Option<U>,
) -> Option<U> {
    let item = match slot.as_mut() {
        Some(inner) => pull(inner),
        None => return None,
    };
    if item.is_none() {
        *slot = None;
    }
    item
}

impl<I: Iterator> Iterator for Fuse<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        and_then_or_clear(&mut self.iter, I::next)
    }

    fn nth(&mut self, n: usize) -> Option<I::Item> {
        and_then_or_clear(&mut self.iter, |iter| iter.nth(n))
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for Fuse<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        and_then_or_clear(&mut self.iter, I::next_back)
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Fuse<I> {
    fn len(&self) -> usize {
        match &self.iter {
            Some(iter) => iter.len(),
            None => 0,
        }
    }
}
