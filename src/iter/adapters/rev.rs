use crate::control::{ControlFlow, Option};
use crate::iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};

/// Iterates a double-ended iterator back to front.
///
/// Every front-end operation is answered by the matching back-end
/// operation of the upstream (`next` by `next_back`, `fold` by `rfold`,
/// `find` by `rfind`, ...).
///
/// `Rev` is single-ended: it does not implement [`DoubleEndedIterator`], so
/// it cannot be reversed again. Its back-end operations, which pull from
/// the upstream's front, are available as inherent methods.
///
/// Created by [`DoubleEndedIterator::rev`].
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let values = [1, 2, 3];
/// let mut reversed = values.seq().rev();
/// assert_eq!(reversed.next(), Some(&3));
/// assert_eq!(reversed.next_back(), Some(&1));
/// assert_eq!(reversed.next(), Some(&2));
/// assert_eq!(reversed.next_back(), None);
/// ```
///
/// ```compile_fail
/// use lazyseq::prelude::*;
///
/// let values = [1, 2, 3];
/// let _ = values.seq().rev().rev();
/// ```
#[derive(Debug, Clone)]
pub struct Rev<I> {
    iter: I,
}

impl<I> Rev<I> {
    pub(crate) const fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: DoubleEndedIterator> Rev<I> {
    /// Pulls the element at the upstream's front.
    pub fn next_back(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    /// Discards up to `n` elements from the upstream's front.
    pub fn advance_back_by(&mut self, n: usize) -> bool {
        self.iter.advance_by(n)
    }

    /// Returns the `n`th element counted from the upstream's front.
    pub fn nth_back(&mut self, n: usize) -> Option<I::Item> {
        self.iter.nth(n)
    }

    /// Searches from the upstream's front.
    pub fn rfind<P>(&mut self, predicate: P) -> Option<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.find(predicate)
    }

    /// Folds from the upstream's front.
    pub fn rfold<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, I::Item) -> B,
    {
        self.iter.fold(init, function)
    }

    /// Short-circuiting fold from the upstream's front.
    pub fn try_rfold<B, F, R>(&mut self, init: B, function: F) -> ControlFlow<R, B>
    where
        F: FnMut(B, I::Item) -> ControlFlow<R, B>,
    {
        self.iter.try_fold(init, function)
    }
}

impl<I: DoubleEndedIterator> Iterator for Rev<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.next_back()
    }

    fn advance_by(&mut self, n: usize) -> bool {
        self.iter.advance_back_by(n)
    }

    fn nth(&mut self, n: usize) -> Option<I::Item> {
        self.iter.nth_back(n)
    }

    fn find<P>(&mut self, predicate: P) -> Option<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.rfind(predicate)
    }

    fn fold<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, I::Item) -> B,
    {
        self.iter.rfold(init, function)
    }

    fn try_fold<B, F, R>(&mut self, init: B, function: F) -> ControlFlow<R, B>
    where
        F: FnMut(B, I::Item) -> ControlFlow<R, B>,
    {
        self.iter.try_rfold(init, function)
    }
}

impl<I> ExactSizeIterator for Rev<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    fn len(&self) -> usize {
        self.iter.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Option::{None, Some};
    use crate::iter::SliceIter;
    use crate::typeclass::Iterable;
    use rstest::rstest;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(Rev<SliceIter<'static, i32>>: Iterator, ExactSizeIterator);
    assert_not_impl_any!(Rev<SliceIter<'static, i32>>: DoubleEndedIterator);

    #[rstest]
    fn test_overrides_use_back_end() {
        let values = [1, 2, 3, 4, 5];
        let mut reversed = values.seq().rev();
        assert!(reversed.advance_by(1));
        assert_eq!(reversed.nth(1), Some(&3));
        assert_eq!(reversed.find(|value| **value < 3), Some(&2));
        assert_eq!(reversed.len(), 1);
        let rest = reversed.fold(Vec::new(), |mut seen, value| {
            seen.push(*value);
            seen
        });
        assert_eq!(rest, vec![1]);
    }

    #[rstest]
    fn test_try_fold_short_circuits_from_back() {
        let values = [1, 2, 3, 4];
        let mut reversed = values.seq().rev();
        let flow = reversed.try_fold(0, |sum, value| {
            if *value == 2 { ControlFlow::Break(sum) } else { ControlFlow::Continue(sum + value) }
        });
        assert_eq!(flow, ControlFlow::Break(7));
        assert_eq!(reversed.next(), Some(&1));
    }

    #[rstest]
    fn test_inherent_back_end_operations() {
        let values = [1, 2, 3, 4, 5, 6];
        let mut reversed = values.seq().rev();
        assert_eq!(reversed.next_back(), Some(&1));
        assert!(reversed.advance_back_by(1));
        assert_eq!(reversed.nth_back(0), Some(&3));
        assert_eq!(reversed.rfind(|value| **value > 4), Some(&5));
        let flow = reversed.try_rfold((), |(), value| ControlFlow::<i32>::Break(*value));
        assert_eq!(flow, ControlFlow::Break(6));
        assert_eq!(reversed.next(), None);
        assert_eq!(values.seq().rev().rfold(0, |last, value| last * 10 + value), 123_456);
    }

    #[rstest]
    fn test_empty() {
        let empty: [i32; 0] = [];
        let mut reversed = empty.seq().rev();
        assert_eq!(reversed.next(), None);
        assert_eq!(reversed.next_back(), None);
    }
}
