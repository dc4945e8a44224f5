use crate::control::Option::{self, None, Some};
use crate::iter::Iterator;

/// Maps elements while the function returns `Some`.
///
/// The first `None` latches the adapter: it yields `None` from then on
/// without pulling the upstream again.
///
/// Created by [`Iterator::map_while`].
#[derive(Clone)]
pub struct MapWhile<I, P> {
    iter: I,
    predicate: P,
    done: bool,
}

impl<I, P> MapWhile<I, P> {
    pub(crate) const fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate,
            done: false,
        }
    }
}

impl<B, I, P> Iterator for MapWhile<I, P>
where
    I: Iterator,
    P: FnMut(I::Item) -> Option<B>,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some(item) => {
                let mapped = (self.predicate)(item);
                self.done = mapped.is_none();
                mapped
            }
            None => None,
        }
    }
}
