use super::Map;
use super::fuse::{Fuse, and_then_or_clear};
use crate::control::Option::{self, None, Some};
use crate::iter::{DoubleEndedIterator, Iterator};
use crate::typeclass::IntoSeq;

/// Flattens one level of nesting.
///
/// The outer iterator is fused. Inner iterators are opened on demand with
/// [`IntoSeq`]: one at the front for `next`, one at the back for
/// `next_back`. When the outer iterator is exhausted, each end drains what
/// the other end left open.
///
/// Created by [`Iterator::flatten`] and [`Iterator::flat_map`].
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let nested = [vec![0], vec![], vec![1, 2], vec![3]];
/// let mut flat = nested.seq().flatten();
/// assert_eq!(flat.next(), Some(&0));
/// assert_eq!(flat.next_back(), Some(&3));
/// assert_eq!(flat.next_back(), Some(&2));
/// assert_eq!(flat.next(), Some(&1));
/// assert_eq!(flat.next(), None);
/// ```
pub struct Flatten<I>
where
    I: Iterator,
    I::Item: IntoSeq,
{
    iter: Fuse<I>,
    frontiter: Option<<I::Item as IntoSeq>::IntoSeq>,
    backiter: Option<<I::Item as IntoSeq>::IntoSeq>,
}

/// Maps each element to something iterable and flattens the results.
///
/// Created by [`Iterator::flat_map`].
pub type FlatMap<I, F> = Flatten<Map<I, F>>;

impl<I> Flatten<I>
where
    I: Iterator,
    I::Item: IntoSeq,
{
    pub(crate) const fn new(iter: I) -> Self {
        Self {
            iter: Fuse::new(iter),
            frontiter: None,
            backiter: None,
        }
    }
}

impl<I> Clone for Flatten<I>
where
    I: Iterator + Clone,
    I::Item: IntoSeq,
    <I::Item as IntoSeq>::IntoSeq: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            frontiter: self.frontiter.clone(),
            backiter: self.backiter.clone(),
        }
    }
}

impl<I> std::fmt::Debug for Flatten<I>
where
    I: Iterator + std::fmt::Debug,
    I::Item: IntoSeq,
    <I::Item as IntoSeq>::IntoSeq: std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Flatten")
            .field("iter", &self.iter)
            .field("frontiter", &self.frontiter)
            .field("backiter", &self.backiter)
            .finish()
    }
}

impl<I> Iterator for Flatten<I>
where
    I: Iterator,
    I::Item: IntoSeq,
{
    type Item = <I::Item as IntoSeq>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = and_then_or_clear(&mut self.frontiter, |inner| inner.next()) {
                return Some(item);
            }
            match self.iter.next() {
                Some(inner) => self.frontiter = Some(inner.into_seq()),
                None => return and_then_or_clear(&mut self.backiter, |inner| inner.next()),
            }
        }
    }
}

impl<I> DoubleEndedIterator for Flatten<I>
where
    I: DoubleEndedIterator,
    I::Item: IntoSeq,
    <I::Item as IntoSeq>::IntoSeq: DoubleEndedIterator,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = and_then_or_clear(&mut self.backiter, |inner| inner.next_back())
            {
                return Some(item);
            }
            match self.iter.next_back() {
                Some(inner) => self.backiter = Some(inner.into_seq()),
                None => {
                    return and_then_or_clear(&mut self.frontiter, |inner| inner.next_back());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Iterable;
    use rstest::rstest;

    #[rstest]
    fn test_flattens_one_level_only() {
        let nested = vec![vec![vec![1, 2]], vec![vec![3]]];
        let once: Vec<&Vec<i32>> = nested.seq().flatten().collect();
        assert_eq!(once, vec![&vec![1, 2], &vec![3]]);
        let twice: Vec<&i32> = nested.seq().flatten().flatten().collect();
        assert_eq!(twice, vec![&1, &2, &3]);
    }

    #[rstest]
    fn test_skips_empty_inner() {
        let nested: Vec<Vec<i32>> = vec![vec![], vec![], vec![7], vec![]];
        let mut flat = nested.into_seq().flatten();
        assert_eq!(flat.next(), Some(7));
        assert_eq!(flat.next(), None);
        assert_eq!(flat.next_back(), None);
    }

    #[rstest]
    fn test_flat_map_over_text() {
        let words = ["ab", "", "c"];
        let letters: String = words.seq().flat_map(|word| (*word).seq()).collect();
        assert_eq!(letters, "abc");
    }

    #[rstest]
    fn test_back_drains_front_inner() {
        let nested = [vec![1, 2, 3]];
        let mut flat = nested.seq().flatten();
        assert_eq!(flat.next(), Some(&1));
        assert_eq!(flat.next_back(), Some(&3));
        assert_eq!(flat.next_back(), Some(&2));
        assert_eq!(flat.next(), None);
    }

    #[rstest]
    fn test_clone_copies_open_inner() {
        let nested = [vec![1, 2], vec![3]];
        let mut flat = nested.seq().flatten();
        flat.next();
        let copy: Vec<&i32> = flat.clone().collect();
        assert_eq!(copy, vec![&2, &3]);
        assert_eq!(flat.next(), Some(&2));
    }
}
