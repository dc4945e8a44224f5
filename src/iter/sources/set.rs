//! Single-ended iteration over sets.

use std::iter::Iterator as StdIterator;

use crate::control::Option;
use crate::iter::Iterator;

/// Yields the members of a set in the set's own iteration order.
///
/// Sets are traversed from the front only: `SetIter` has no back-end
/// operations, so `rev` is unavailable on it.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
/// use std::collections::BTreeSet;
///
/// let members: BTreeSet<i32> = [3, 1, 2].seq().cloned().collect();
/// let doubled: Vec<i32> = members.seq().map(|value| value * 2).collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
#[derive(Debug, Clone)]
pub struct SetIter<I> {
    inner: I,
}

impl<I> SetIter<I> {
    pub(crate) const fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I: StdIterator> Iterator for SetIter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.inner.next().into()
    }
}
