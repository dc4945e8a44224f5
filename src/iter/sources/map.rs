//! Single-ended iteration over key/value maps.

use std::iter::Iterator as StdIterator;

use crate::control::Option;
use crate::iter::Iterator;

/// Yields the entries of a map as `(key, value)` pairs in the map's own
/// iteration order.
///
/// Like [`SetIter`](super::SetIter), a `MapIter` is single-ended.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
/// use std::collections::BTreeMap;
///
/// let prices = BTreeMap::from([("apple", 3), ("pear", 5)]);
/// let expensive: Vec<&str> = prices
///     .seq()
///     .filter(|(_, price)| **price > 4)
///     .map(|(name, _)| *name)
///     .collect();
/// assert_eq!(expensive, vec!["pear"]);
/// ```
#[derive(Debug, Clone)]
pub struct MapIter<I> {
    inner: I,
}

impl<I> MapIter<I> {
    pub(crate) const fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<K, V, I> Iterator for MapIter<I>
where
    I: StdIterator<Item = (K, V)>,
{
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next().into()
    }
}
