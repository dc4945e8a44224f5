use crate::control::Option::{self, None, Some};
use crate::iter::Iterator;

/// Yields elements while the predicate holds.
///
/// The first failing element is consumed and discarded, and the adapter
/// latches: it yields `None` from then on without pulling again.
///
/// Created by [`Iterator::take_while`].
#[derive(Clone)]
pub struct TakeWhile<I, P> {
    iter: I,
    flag: bool,
    predicate: P,
}

impl<I, P> TakeWhile<I, P> {
    pub(crate) const fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            flag: false,
            predicate,
        }
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.flag {
            return None;
        }
        match self.iter.next() {
            Some(item) if (self.predicate)(&item) => Some(item),
            Some(_) | None => {
                self.flag = true;
                None
            }
        }
    }
}
