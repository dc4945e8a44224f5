//! `ControlFlow` - the signal that tells a traversal to keep going or stop.
//!
//! `try_fold` and its relatives thread a `ControlFlow` through every step:
//! `Continue(accumulator)` asks for the next element, `Break(result)` ends
//! the traversal immediately with `result`.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::control::{ControlFlow, Option};
//!
//! let flow: ControlFlow<&str, i32> = ControlFlow::Continue(3);
//! assert_eq!(flow.map_continue(|value| value + 1), ControlFlow::Continue(4));
//!
//! let stop: ControlFlow<&str, i32> = ControlFlow::Break("done");
//! assert_eq!(stop.break_value(), Option::Some("done"));
//! ```

use super::Option;

/// Tells a traversal whether to continue with a new accumulator or to stop
/// with a final result.
///
/// # Type Parameters
///
/// * `B` - The type carried by `Break`
/// * `C` - The type carried by `Continue` (unit by default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlFlow<B, C = ()> {
    /// Move on to the next step with this value.
    Continue(C),
    /// Stop now with this value.
    Break(B),
}

impl<B, C> ControlFlow<B, C> {
    /// Returns `true` if this is a `Continue`.
    #[inline]
    pub const fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// Returns `true` if this is a `Break`.
    #[inline]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::Break(_))
    }

    /// Projects the `Continue` payload into an [`Option`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::control::{ControlFlow, Option};
    ///
    /// assert_eq!(ControlFlow::<(), i32>::Continue(1).continue_value(), Option::Some(1));
    /// assert_eq!(ControlFlow::<(), i32>::Break(()).continue_value(), Option::None);
    /// ```
    #[inline]
    pub fn continue_value(self) -> Option<C> {
        match self {
            Self::Continue(value) => Option::Some(value),
            Self::Break(_) => Option::None,
        }
    }

    /// Projects the `Break` payload into an [`Option`].
    #[inline]
    pub fn break_value(self) -> Option<B> {
        match self {
            Self::Continue(_) => Option::None,
            Self::Break(value) => Option::Some(value),
        }
    }

    /// Transforms the `Continue` payload, leaving a `Break` untouched.
    #[inline]
    pub fn map_continue<T, F>(self, function: F) -> ControlFlow<B, T>
    where
        F: FnOnce(C) -> T,
    {
        match self {
            Self::Continue(value) => ControlFlow::Continue(function(value)),
            Self::Break(value) => ControlFlow::Break(value),
        }
    }

    /// Transforms the `Break` payload, leaving a `Continue` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::control::ControlFlow;
    ///
    /// let flow: ControlFlow<i32, ()> = ControlFlow::Break(2);
    /// assert_eq!(flow.map_break(|value| value * 10), ControlFlow::Break(20));
    ///
    /// let flow: ControlFlow<i32, ()> = ControlFlow::Continue(());
    /// assert_eq!(flow.map_break(|value| value * 10), ControlFlow::Continue(()));
    /// ```
    #[inline]
    pub fn map_break<T, F>(self, function: F) -> ControlFlow<T, C>
    where
        F: FnOnce(B) -> T,
    {
        match self {
            Self::Continue(value) => ControlFlow::Continue(value),
            Self::Break(value) => ControlFlow::Break(function(value)),
        }
    }
}

impl<T> ControlFlow<T, T> {
    /// Extracts the payload when both variants carry the same type.
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Self::Continue(value) | Self::Break(value) => value,
        }
    }
}
