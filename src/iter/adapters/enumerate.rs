use crate::control::Option::{self, None, Some};
use crate::iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};

/// Pairs each element with its zero-based position.
///
/// Pulling from the back needs the remaining length to recover the index,
/// so the adapter is double-ended only over exact-size iterators.
///
/// Created by [`Iterator::enumerate`].
#[derive(Debug, Clone)]
pub struct Enumerate<I> {
    iter: I,
    count: usize,
}

impl<I> Enumerate<I> {
    pub(crate) const fn new(iter: I) -> Self {
        Self { iter, count: 0 }
    }
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = (usize, I::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.iter.next() {
            Some(item) => {
                let index = self.count;
                self.count += 1;
                Some((index, item))
            }
            None => None,
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        match self.iter.nth(n) {
            Some(item) => {
                let index = self.count + n;
                self.count = index + 1;
                Some((index, item))
            }
            None => None,
        }
    }
}

impl<I> DoubleEndedIterator for Enumerate<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.iter.next_back() {
            Some(item) => Some((self.count + self.iter.len(), item)),
            None => None,
        }
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Enumerate<I> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}
