use crate::control::Option::{self, None, Some};
use crate::iter::{ExactSizeIterator, Iterator};

/// Pairs up the elements of two iterators.
///
/// Both sides are pulled on every call, so when one side runs out the
/// element just pulled from the other side is discarded.
///
/// Created by [`Iterator::zip`].
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let names = ["ann", "bob", "cy"];
/// let ages = [31, 42];
/// let pairs: Vec<(&&str, &i32)> = names.seq().zip(ages.seq()).collect();
/// assert_eq!(pairs, vec![(&"ann", &31), (&"bob", &42)]);
/// ```
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    pub(crate) const fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: Iterator, B: Iterator> Iterator for Zip<A, B> {
    type Item = (A::Item, B::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let left = self.a.next();
        let right = self.b.next();
        match (left, right) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }
}

impl<A: ExactSizeIterator, B: ExactSizeIterator> ExactSizeIterator for Zip<A, B> {
    fn len(&self) -> usize {
        self.a.len().min(self.b.len())
    }
}
