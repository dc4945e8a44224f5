use crate::control::Option;
use crate::iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};

/// Transforms each element with a function.
///
/// The function runs once per pulled element, in pull order, so a
/// side-effecting function observes exactly the elements consumed.
///
/// Created by [`Iterator::map`].
#[derive(Clone)]
pub struct Map<I, F> {
    iter: I,
    function: F,
}

impl<I, F> Map<I, F> {
    pub(crate) const fn new(iter: I, function: F) -> Self {
        Self { iter, function }
    }
}

impl<I: std::fmt::Debug, F> std::fmt::Debug for Map<I, F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Map")
            .field("iter", &self.iter)
            .finish_non_exhaustive()
    }
}

impl<B, I, F> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.iter.next().map(&mut self.function)
    }

    fn fold<Acc, G>(self, init: Acc, mut function: G) -> Acc
    where
        G: FnMut(Acc, B) -> Acc,
    {
        let mut map = self.function;
        self.iter
            .fold(init, move |accumulator, item| function(accumulator, map(item)))
    }
}

impl<B, I, F> DoubleEndedIterator for Map<I, F>
where
    I: DoubleEndedIterator,
    F: FnMut(I::Item) -> B,
{
    #[inline]
    fn next_back(&mut self) -> Option<B> {
        self.iter.next_back().map(&mut self.function)
    }
}

impl<B, I, F> ExactSizeIterator for Map<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(I::Item) -> B,
{
    fn len(&self) -> usize {
        self.iter.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Option::{None, Some};
    use crate::typeclass::Iterable;
    use rstest::rstest;

    #[rstest]
    fn test_function_runs_lazily() {
        let values = [1, 2, 3];
        let mut calls = Vec::new();
        let mut mapped = values.seq().map(|value| {
            calls.push(*value);
            value * 10
        });
        assert_eq!(mapped.next_back(), Some(30));
        assert_eq!(mapped.next(), Some(10));
        drop(mapped);
        assert_eq!(calls, vec![3, 1]);
    }

    #[rstest]
    fn test_fold_and_len() {
        let values = [1, 2, 3];
        let mapped = values.seq().map(|value| value * 2);
        assert_eq!(mapped.len(), 3);
        assert_eq!(mapped.fold(0, |sum, value| sum + value), 12);
        assert_eq!([0_i32; 0].seq().map(|value| *value).next(), None);
    }
}
