use super::Fuse;
use crate::control::Option::{self, None, Some};
use crate::iter::Iterator;

/// Places a copy of a separator between adjacent elements.
///
/// Holds one element of lookahead: after an element is yielded, the next
/// one is pulled and buffered so the separator is only emitted when
/// another element follows. There is never a leading or trailing
/// separator.
///
/// Created by [`Iterator::intersperse`].
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let values = [1, 2, 3];
/// let spaced: Vec<i32> = values.seq().cloned().intersperse(0).collect();
/// assert_eq!(spaced, vec![1, 0, 2, 0, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Intersperse<I>
where
    I: Iterator,
    I::Item: Clone,
{
    iter: Fuse<I>,
    separator: I::Item,
    next_item: Option<I::Item>,
    started: bool,
}

impl<I> Intersperse<I>
where
    I: Iterator,
    I::Item: Clone,
{
    pub(crate) const fn new(iter: I, separator: I::Item) -> Self {
        Self {
            iter: Fuse::new(iter),
            separator,
            next_item: None,
            started: false,
        }
    }
}

impl<I> Iterator for Intersperse<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if !self.started {
            self.started = true;
            return self.iter.next();
        }
        if let Some(item) = self.next_item.take() {
            return Some(item);
        }
        match self.iter.next() {
            Some(item) => {
                self.next_item = Some(item);
                Some(self.separator.clone())
            }
            None => None,
        }
    }
}
