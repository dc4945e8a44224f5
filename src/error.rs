//! Error types for precondition violations.
//!
//! Operations that require a value to be present, such as
//! [`Option::unwrap`](crate::control::Option::unwrap) or a seedless `sum`
//! over a sequence, panic with the message of a [`SeqError`]. Their
//! fallible twins (`try_unwrap`, `try_sum`, `try_product`) return the error
//! instead.

/// Represents a violated precondition of a sequence or option operation.
///
/// # Examples
///
/// ```rust
/// use lazyseq::error::SeqError;
///
/// let error = SeqError::EmptySequence { operation: "sum" };
/// assert_eq!(format!("{error}"), "sum() on an empty sequence");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeqError {
    /// A value was required from an option holding `None`.
    UnwrapNone,
    /// A reduction without an identity element was applied to an empty
    /// sequence.
    EmptySequence {
        /// The name of the operation that required at least one element.
        operation: &'static str,
    },
}

impl std::fmt::Display for SeqError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnwrapNone => write!(formatter, "unwrap() on a None value"),
            Self::EmptySequence { operation } => {
                write!(formatter, "{operation}() on an empty sequence")
            }
        }
    }
}

impl std::error::Error for SeqError {}
