//! Lazy, composable iteration.
//!
//! This module provides the iteration core:
//!
//! - [`Iterator`]: The single required primitive `next` plus the derived
//!   operations (`fold`, `try_fold`, `find`, `cmp`, `collect`, ...)
//! - [`DoubleEndedIterator`]: Iterators that can also be pulled from the back
//! - [`ExactSizeIterator`]: Iterators that know how many elements remain
//!
//! Sources turn host data into iterators ([`SliceIter`], [`IntoIter`],
//! [`Chars`], [`SetIter`], [`MapIter`], [`OptionIter`], [`FromStd`]);
//! adapters wrap one or two upstream iterators and transform their output
//! lazily ([`Chain`], [`Cycle`], [`Flatten`], [`Intersperse`], [`StepBy`],
//! [`Zip`], ...). [`IntoStd`] hands an iterator back to the host so it can
//! drive a `for` loop.
//!
//! Building a pipeline performs no work. Each call to `next` (or a terminal
//! operation such as `fold`, `count` or `collect`) pulls from the outermost
//! adapter, which pulls from its upstream in turn.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let letters = ['A', 'B', 'C', 'D', 'E'];
//! let mut stepped = letters.seq().cycle().step_by(2);
//!
//! assert_eq!(stepped.next(), Some(&'A'));
//! assert_eq!(stepped.next(), Some(&'C'));
//! assert_eq!(stepped.next(), Some(&'E'));
//! assert_eq!(stepped.next(), Some(&'B'));
//! ```
//!
//! Single-ended iterators have no back-end operations, and a reversed
//! iterator cannot be reversed again:
//!
//! ```compile_fail
//! use lazyseq::prelude::*;
//!
//! let values = [1, 2, 3];
//! let _ = values.seq().rev().rev();
//! ```
//!
//! ```compile_fail
//! use lazyseq::prelude::*;
//! use std::collections::HashSet;
//!
//! let values: HashSet<i32> = HashSet::new();
//! let _ = values.seq().rev();
//! ```

mod adapters;
mod compare;
mod double_ended;
mod into_std;
mod iterator;
mod sources;

pub use adapters::{
    Chain, Cloned, Cycle, Enumerate, Filter, FilterMap, FlatMap, Flatten, Fuse, Intersperse, Map,
    MapWhile, Rev, Skip, SkipWhile, StepBy, Take, TakeWhile, Zip,
};
pub use double_ended::{DoubleEndedIterator, ExactSizeIterator};
pub use into_std::IntoStd;
pub use iterator::Iterator;
pub use sources::{Chars, FromStd, IntoIter, MapIter, OptionIter, SetIter, SliceIter, from_std};
