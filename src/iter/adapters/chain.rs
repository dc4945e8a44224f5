use crate::control::Option::{self, None, Some};
use crate::iter::{DoubleEndedIterator, Iterator};

/// Yields every element of the first iterator, then every element of the
/// second.
///
/// Each side is dropped once it is exhausted, so neither is pulled again
/// after reporting `None`.
///
/// Created by [`Iterator::chain`].
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    a: Option<A>,
    b: Option<B>,
}

impl<A, B> Chain<A, B> {
    pub(crate) const fn new(a: A, b: B) -> Self {
        Self {
            a: Some(a),
            b: Some(b),
        }
    }
}

impl<A, B> Iterator for Chain<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if let Some(a) = self.a.as_mut() {
            match a.next() {
                Some(item) => return Some(item),
                None => self.a = None,
            }
        }
        match self.b.as_mut() {
            Some(b) => b.next(),
            None => None,
        }
    }
}

impl<A, B> DoubleEndedIterator for Chain<A, B>
where
    A: DoubleEndedIterator,
    B: DoubleEndedIterator<Item = A::Item>,
{
    fn next_back(&mut self) -> Option<A::Item> {
        if let Some(b) = self.b.as_mut() {
            match b.next_back() {
                Some(item) => return Some(item),
                None => self.b = None,
            }
        }
        match self.a.as_mut() {
            Some(a) => a.next_back(),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Iterable;
    use rstest::rstest;

    #[rstest]
    fn test_first_then_second() {
        let collected: Vec<i32> = [1, 2].seq().chain([3].seq()).cloned().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_both_ends() {
        let left = [1, 2];
        let right = [3, 4];
        let mut chain = left.seq().chain(right.seq());
        assert_eq!(chain.next_back(), Some(&4));
        assert_eq!(chain.next(), Some(&1));
        assert_eq!(chain.next_back(), Some(&3));
        assert_eq!(chain.next_back(), Some(&2));
        assert_eq!(chain.next(), None);
        assert_eq!(chain.next_back(), None);
    }

    #[rstest]
    fn test_empty_sides() {
        let empty: [i32; 0] = [];
        assert_eq!(empty.seq().chain(empty.seq()).next(), None);
        assert_eq!(empty.seq().chain([5].seq()).next(), Some(&5));
    }
}
