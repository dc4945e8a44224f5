use std::iter::{DoubleEndedIterator as StdDoubleEndedIterator, Iterator as StdIterator};
use std::str;

use crate::control::Option;
use crate::iter::{DoubleEndedIterator, Iterator};

/// Yields the characters of a string slice.
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    inner: str::Chars<'a>,
}

impl<'a> Chars<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { inner: text.chars() }
    }

    /// The text not yet yielded from either end.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.inner.as_str()
    }
}

impl Iterator for Chars<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        StdIterator::next(&mut self.inner).into()
    }
}

impl DoubleEndedIterator for Chars<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<char> {
        StdDoubleEndedIterator::next_back(&mut self.inner).into()
    }
}
