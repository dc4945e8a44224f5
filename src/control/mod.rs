//! Control primitives shared by every sequence operation.
//!
//! This module provides the value types the iterator core is built on:
//!
//! - [`Option`]: A value that is either present (`Some`) or absent (`None`)
//! - [`Ordering`]: The result of a three-way comparison
//! - [`ControlFlow`]: The short-circuit signal used by `try_fold`
//!
//! All three are plain sum types; callers distinguish their states with
//! exhaustive pattern matching.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::control::{ControlFlow, Option, Ordering};
//!
//! let present = Option::some(10);
//! assert_eq!(present.map(|value| value * 2), Option::Some(20));
//!
//! assert!(Ordering::from_sign(-7).is_less());
//!
//! let flow: ControlFlow<&str, i32> = Option::some(1).branch().map_break(|_| "empty");
//! assert_eq!(flow.continue_value(), Option::Some(1));
//! ```

mod control_flow;
mod option;
mod ordering;

pub use control_flow::ControlFlow;
pub use option::Option;
pub use ordering::Ordering;
