use crate::control::Option;
use crate::iter::Iterator;

/// Skips elements while the predicate holds.
///
/// Once the predicate fails, that element and every later one are yielded
/// without consulting the predicate again.
///
/// Created by [`Iterator::skip_while`].
#[derive(Clone)]
pub struct SkipWhile<I, P> {
    iter: I,
    flag: bool,
    predicate: P,
}

impl<I, P> SkipWhile<I, P> {
    pub(crate) const fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            flag: false,
            predicate,
        }
    }
}

impl<I, P> Iterator for SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let flag = &mut self.flag;
        let predicate = &mut self.predicate;
        self.iter.find(move |item| {
            if *flag || !predicate(item) {
                *flag = true;
                true
            } else {
                false
            }
        })
    }
}
