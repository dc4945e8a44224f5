use crate::control::Option::{self, None};
use crate::iter::Iterator;

/// Repeats an iterator endlessly.
///
/// Keeps a pristine copy of the source; whenever the working copy runs out
/// it is replaced by a fresh clone of the pristine one. An empty source
/// produces `None` immediately instead of looping.
///
/// Created by [`Iterator::cycle`].
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let colors = ["red", "green"];
/// let mut lights = colors.seq().cycle();
/// assert_eq!(lights.nth(4), Some(&"red"));
/// assert_eq!(lights.next(), Some(&"green"));
/// ```
#[derive(Debug, Clone)]
pub struct Cycle<I> {
    orig: I,
    iter: I,
}

impl<I: Clone> Cycle<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            orig: iter.clone(),
            iter,
        }
    }
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.iter.next() {
            None => {
                self.iter = self.orig.clone();
                self.iter.next()
            }
            item => item,
        }
    }
}
