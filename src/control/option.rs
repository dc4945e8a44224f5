//! Option type - a value that may or may not be present.
//!
//! `Option<T>` is the return type of every operation that may not produce
//! a value: pulling from an exhausted iterator, searching with `find`,
//! reducing an empty sequence, and so on.
//!
//! Absence is its own variant rather than a shared marker value, so two
//! `None`s are equal by construction and `Some` payloads compare with the
//! payload's own equality.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::control::Option;
//!
//! let present = Option::some(10);
//! let absent: Option<i32> = Option::none();
//!
//! assert!(present.is_some());
//! assert!(absent.is_none());
//!
//! assert_eq!(present.and_then(|value| Option::some(value * 2)), Option::Some(20));
//! assert_eq!(absent.unwrap_or(5), 5);
//! ```

use std::fmt;

use super::ControlFlow;
use crate::error::SeqError;

/// A value that is either present (`Some`) or absent (`None`).
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use lazyseq::control::Option;
///
/// let mut slot = Option::some("lookahead");
/// assert_eq!(slot.take(), Option::Some("lookahead"));
/// assert_eq!(slot.take(), Option::None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Option<T> {
    /// No value.
    None,
    /// Some value of type `T`.
    Some(T),
}

impl<T> Option<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an `Option` holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an empty `Option`.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::control::Option;
    ///
    /// assert!(Option::some(10).is_some());
    /// assert!(!Option::<i32>::none().is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns `true` if a value is present and satisfies `predicate`.
    #[inline]
    pub fn is_some_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    // =========================================================================
    // Reference Access
    // =========================================================================

    /// Converts from `&Option<T>` to `Option<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    /// Converts from `&mut Option<T>` to `Option<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Returns `other` if a value is present, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::control::Option;
    ///
    /// assert_eq!(Option::some(10).and(Option::some(20)), Option::Some(20));
    /// assert_eq!(Option::<i32>::none().and(Option::some(20)), Option::None);
    /// ```
    #[inline]
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Option::None,
        }
    }

    /// Applies `function` to the contained value and returns its result,
    /// or `None` if no value is present.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Option::None,
        }
    }

    /// Returns `self` if a value is present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns `self` if a value is present, otherwise the result of
    /// `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::control::Option;
    ///
    /// assert_eq!(Option::some(10).or_else(|| Option::some(20)), Option::Some(10));
    /// assert_eq!(Option::none().or_else(|| Option::some(20)), Option::Some(20));
    /// ```
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => function(),
        }
    }

    /// Transforms the contained value, leaving `None` untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Option::Some(function(value)),
            Self::None => Option::None,
        }
    }

    /// Keeps the contained value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Some(value) = self
            && predicate(&value)
        {
            return Self::Some(value);
        }
        Self::None
    }

    /// Converts into a [`ControlFlow`]: a present value continues, absence
    /// breaks with the empty option.
    ///
    /// This is the bridge short-circuiting folds use to stop at the first
    /// missing value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::control::{ControlFlow, Option};
    ///
    /// assert_eq!(Option::some(3).branch(), ControlFlow::Continue(3));
    /// assert_eq!(Option::<i32>::none().branch(), ControlFlow::Break(Option::None));
    /// ```
    #[inline]
    pub fn branch(self) -> ControlFlow<Self, T> {
        match self {
            Self::Some(value) => ControlFlow::Continue(value),
            Self::None => ControlFlow::Break(Self::None),
        }
    }

    // =========================================================================
    // In-place Mutation
    // =========================================================================

    /// Takes the value out, leaving `None` in its place.
    ///
    /// Calling `take` on an empty option is a no-op returning `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::control::Option;
    ///
    /// let mut empty: Option<i32> = Option::none();
    /// assert_eq!(empty.take(), Option::None);
    /// assert_eq!(empty.take(), Option::None);
    /// ```
    #[inline]
    pub const fn take(&mut self) -> Self {
        std::mem::replace(self, Self::None)
    }

    /// Stores `value`, returning the previous state.
    #[inline]
    pub const fn replace(&mut self, value: T) -> Self {
        std::mem::replace(self, Self::Some(value))
    }

    /// Stores `value` and returns a mutable reference to it.
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Self::None;
        self.get_or_insert_with(|| value)
    }

    /// Returns a mutable reference to the contained value, first storing the
    /// result of `function` if the option is empty.
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, function: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.is_none() {
            *self = Self::Some(function());
        }
        match self {
            Self::Some(value) => value,
            Self::None => unreachable!(),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with [`SeqError::UnwrapNone`] if no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::control::Option;
    ///
    /// assert_eq!(Option::some(10).unwrap(), 10);
    /// ```
    ///
    /// ```should_panic
    /// use lazyseq::control::Option;
    ///
    /// Option::<i32>::none().unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{}", SeqError::UnwrapNone),
        }
    }

    /// Returns the contained value, or [`SeqError::UnwrapNone`].
    #[inline]
    pub fn try_unwrap(self) -> Result<T, SeqError> {
        self.ok_or(SeqError::UnwrapNone)
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value or computes one from `function`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => function(),
        }
    }

    /// Converts into a `Result`, mapping `None` to `Err(error)`.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(error),
        }
    }

    /// Converts into the standard library's option.
    #[inline]
    pub fn into_std(self) -> std::option::Option<T> {
        self.into()
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Option<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Option<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Option<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<std::option::Option<T>> for Option<T> {
    #[inline]
    fn from(option: std::option::Option<T>) -> Self {
        match option {
            std::option::Option::Some(value) => Self::Some(value),
            std::option::Option::None => Self::None,
        }
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Option::Some(value) => Self::Some(value),
            Option::None => Self::None,
        }
    }
}
