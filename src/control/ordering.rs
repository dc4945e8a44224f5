//! Ordering type - the result of a three-way comparison.
//!
//! An `Ordering` is a signed trichotomy value: `Less` is `-1`, `Equal` is
//! `0` and `Greater` is `1`. Every predicate is derived from that sign, so
//! exactly one of `is_less`, `is_equal` and `is_greater` holds for any
//! value.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::control::Ordering;
//!
//! let ordering = Ordering::from_sign(3 - 5);
//! assert_eq!(ordering, Ordering::Less);
//! assert!(ordering.is_less_equal());
//! assert!(!ordering.is_greater_equal());
//! ```

use std::cmp;

/// The result of comparing two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum Ordering {
    /// The left value is smaller.
    Less = -1,
    /// Both values are equal.
    Equal = 0,
    /// The left value is greater.
    Greater = 1,
}

impl Ordering {
    /// Returns [`Ordering::Less`].
    #[inline]
    pub const fn less() -> Self {
        Self::Less
    }

    /// Returns [`Ordering::Equal`].
    #[inline]
    pub const fn equal() -> Self {
        Self::Equal
    }

    /// Returns [`Ordering::Greater`].
    #[inline]
    pub const fn greater() -> Self {
        Self::Greater
    }

    /// Classifies a signed difference: negative is `Less`, zero is `Equal`,
    /// positive is `Greater`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::control::Ordering;
    ///
    /// assert_eq!(Ordering::from_sign(-42), Ordering::Less);
    /// assert_eq!(Ordering::from_sign(0), Ordering::Equal);
    /// assert_eq!(Ordering::from_sign(7), Ordering::Greater);
    /// ```
    #[inline]
    pub const fn from_sign(difference: i64) -> Self {
        if difference < 0 {
            Self::Less
        } else if difference == 0 {
            Self::Equal
        } else {
            Self::Greater
        }
    }

    /// Returns the signed value of this ordering (`-1`, `0` or `1`).
    #[inline]
    pub const fn as_sign(self) -> i8 {
        self as i8
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` for `Less`.
    #[inline]
    pub const fn is_less(self) -> bool {
        self.as_sign() < 0
    }

    /// Returns `true` for `Less` or `Equal`.
    #[inline]
    pub const fn is_less_equal(self) -> bool {
        self.is_less() || self.is_equal()
    }

    /// Returns `true` for `Equal`.
    #[inline]
    pub const fn is_equal(self) -> bool {
        self.as_sign() == 0
    }

    /// Returns `true` for `Greater`.
    #[inline]
    pub const fn is_greater(self) -> bool {
        self.as_sign() > 0
    }

    /// Returns `true` for `Greater` or `Equal`.
    #[inline]
    pub const fn is_greater_equal(self) -> bool {
        self.is_greater() || self.is_equal()
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Swaps `Less` and `Greater`.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Equal => Self::Equal,
            Self::Greater => Self::Less,
        }
    }

    /// Returns `self` unless it is `Equal`, in which case `other` decides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::control::Ordering;
    ///
    /// assert_eq!(Ordering::Equal.then(Ordering::Less), Ordering::Less);
    /// assert_eq!(Ordering::Greater.then(Ordering::Less), Ordering::Greater);
    /// ```
    #[inline]
    #[must_use]
    pub const fn then(self, other: Self) -> Self {
        match self {
            Self::Equal => other,
            _ => self,
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl From<cmp::Ordering> for Ordering {
    #[inline]
    fn from(ordering: cmp::Ordering) -> Self {
        match ordering {
            cmp::Ordering::Less => Self::Less,
            cmp::Ordering::Equal => Self::Equal,
            cmp::Ordering::Greater => Self::Greater,
        }
    }
}

impl From<Ordering> for cmp::Ordering {
    #[inline]
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}
