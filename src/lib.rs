//! # lazyseq
//!
//! Lazily-evaluated, composable sequence processing for Rust.
//!
//! ## Overview
//!
//! This library provides a small, self-contained iteration toolkit built
//! around explicit primitives:
//!
//! - **Control Primitives**: [`Option`](control::Option),
//!   [`Ordering`](control::Ordering) and
//!   [`ControlFlow`](control::ControlFlow) as plain sum types
//! - **Capabilities**: `Equatable`, `Comparable`, `ToOrdering`, `IntoSeq`,
//!   `Iterable` and `FromSeq`, implemented for host scalar, text and
//!   container types
//! - **Iterators**: the `Iterator` trait with its derived operations, the
//!   `DoubleEndedIterator` extension and lazy adapters such as `Chain`,
//!   `Cycle`, `Flatten`, `Intersperse`, `StepBy` and `Zip`
//!
//! Nothing is evaluated until a value is pulled: building a pipeline only
//! wraps iterators, and `next`, `next_back` or a terminal operation such as
//! `fold` or `collect` drives it.
//!
//! ## Feature Flags
//!
//! - `control`: `Option`, `Ordering`, `ControlFlow`
//! - `typeclass`: capability traits and their host implementations
//! - `iter`: iterators, sources and adapters
//! - `serde`: `Serialize`/`Deserialize` for the control primitives
//! - `smallvec`: `SmallVec` as a `collect` destination
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let values = vec![1, 2, 3, 4, 5];
//! let doubled: Vec<i32> = values
//!     .seq()
//!     .filter(|value| **value % 2 == 1)
//!     .map(|value| value * 2)
//!     .collect();
//! assert_eq!(doubled, vec![2, 6, 10]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the primitives, capability traits and iterator traits.
/// Importing the prelude shadows the standard `Option` and its `Some`/`None`
/// variants with this crate's [`Option`](crate::control::Option).
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(Option::some(1).map(|value| value + 1), Some(2));
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "control")]
    pub use crate::control::Option::{None, Some};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "iter")]
    pub use crate::iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};

    pub use crate::error::SeqError;
}

pub mod error;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "iter")]
pub mod iter;
