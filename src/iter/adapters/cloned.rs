use crate::control::Option;
use crate::iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};

/// Clones every borrowed element of the underlying iterator.
///
/// Created by [`Iterator::cloned`].
#[derive(Debug, Clone)]
pub struct Cloned<I> {
    iter: I,
}

impl<I> Cloned<I> {
    pub(crate) const fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<'a, I, T> Iterator for Cloned<I>
where
    I: Iterator<Item = &'a T>,
    T: Clone + 'a,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next().map(T::clone)
    }

    fn advance_by(&mut self, n: usize) -> bool {
        self.iter.advance_by(n)
    }
}

impl<'a, I, T> DoubleEndedIterator for Cloned<I>
where
    I: DoubleEndedIterator<Item = &'a T>,
    T: Clone + 'a,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back().map(T::clone)
    }

    fn advance_back_by(&mut self, n: usize) -> bool {
        self.iter.advance_back_by(n)
    }
}

impl<'a, I, T> ExactSizeIterator for Cloned<I>
where
    I: ExactSizeIterator<Item = &'a T>,
    T: Clone + 'a,
{
    fn len(&self) -> usize {
        self.iter.len()
    }
}
