use crate::control::ControlFlow;
use crate::control::Option::{self, None, Some};
use crate::iter::{DoubleEndedIterator, Iterator};

/// Maps each element and yields only the `Some` results.
///
/// Created by [`Iterator::filter_map`].
#[derive(Clone)]
pub struct FilterMap<I, F> {
    iter: I,
    function: F,
}

impl<I, F> FilterMap<I, F> {
    pub(crate) const fn new(iter: I, function: F) -> Self {
        Self { iter, function }
    }
}

impl<B, I, F> Iterator for FilterMap<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Option<B>,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.iter.find_map(&mut self.function)
    }
}

impl<B, I, F> DoubleEndedIterator for FilterMap<I, F>
where
    I: DoubleEndedIterator,
    F: FnMut(I::Item) -> Option<B>,
{
    fn next_back(&mut self) -> Option<B> {
        let function = &mut self.function;
        self.iter
            .try_rfold((), |(), item| match function(item) {
                Some(value) => ControlFlow::Break(value),
                None => ControlFlow::Continue(()),
            })
            .break_value()
    }
}
