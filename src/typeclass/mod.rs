//! Capability traits the iterator core relies on.
//!
//! Every element that flows through a pipeline is `Clone`; operations that
//! compare elements additionally need the capabilities defined here:
//!
//! - [`Equatable`]: Structural equality (`equals`)
//! - [`Comparable`]: Total order producing an [`Ordering`](crate::control::Ordering)
//! - [`ToOrdering`]: Conversion of a comparator result (for example a signed
//!   difference) into an `Ordering`
//!
//! With the `iter` feature the iteration boundary is available as well:
//!
//! - [`IntoSeq`]: Conversion of a container (or iterator) into an iterator
//! - [`Iterable`]: Borrowing traversal, `container.seq()`
//! - [`FromSeq`]: Destinations for `collect`
//!
//! Host scalar, text and container types receive implementations in this
//! module; downstream types opt in by implementing the traits themselves.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::control::Ordering;
//! use lazyseq::typeclass::{Comparable, Equatable, ToOrdering};
//!
//! assert!("apple".equals("apple"));
//! assert_eq!(vec![1, 2].compare(&vec![1, 3]), Ordering::Less);
//! assert_eq!((5_i32 - 9).to_ordering(), Ordering::Less);
//! ```

mod comparable;
mod equatable;

#[cfg(feature = "iter")]
mod from_seq;
#[cfg(feature = "iter")]
mod into_seq;

pub use comparable::{Comparable, ToOrdering};
pub use equatable::Equatable;

#[cfg(feature = "iter")]
pub use from_seq::FromSeq;
#[cfg(feature = "iter")]
pub use into_seq::{IntoSeq, Iterable};
