//! FromSeq - destinations for `collect`.
//!
//! Each destination is built by folding the sequence into an empty
//! container. Sets and maps deduplicate as they normally do (for maps, the
//! last value for a key wins); a `BTreeMap<String, V>` serves as a plain
//! field/value record.
//!
//! Collecting `Option<A>` elements into `Option<C>` stops at the first
//! `None` and yields `None`; otherwise it yields `Some` of the collected
//! values.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//! use std::collections::HashSet;
//!
//! let values = [1, 2, 2, 3];
//! let unique: HashSet<i32> = values.seq().cloned().collect();
//! assert_eq!(unique.len(), 3);
//!
//! let halves: Option<Vec<i32>> = values
//!     .seq()
//!     .map(|value| if value % 2 == 0 { Some(value / 2) } else { None })
//!     .collect();
//! assert_eq!(halves, None);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use super::IntoSeq;
use crate::control::ControlFlow;
use crate::control::Option::{self, None, Some};
use crate::iter::Iterator;

/// Construction of a value from a sequence of `A`.
pub trait FromSeq<A>: Sized {
    /// Builds `Self` by draining `iterable`.
    fn from_seq<I: IntoSeq<Item = A>>(iterable: I) -> Self;
}

// =============================================================================
// Linear Buffers
// =============================================================================

impl<T> FromSeq<T> for Vec<T> {
    fn from_seq<I: IntoSeq<Item = T>>(iterable: I) -> Self {
        iterable.into_seq().fold(Self::new(), |mut values, value| {
            values.push(value);
            values
        })
    }
}

impl<T> FromSeq<T> for VecDeque<T> {
    fn from_seq<I: IntoSeq<Item = T>>(iterable: I) -> Self {
        iterable.into_seq().fold(Self::new(), |mut values, value| {
            values.push_back(value);
            values
        })
    }
}

#[cfg(feature = "smallvec")]
impl<T, const N: usize> FromSeq<T> for smallvec::SmallVec<[T; N]> {
    fn from_seq<I: IntoSeq<Item = T>>(iterable: I) -> Self {
        iterable.into_seq().fold(Self::new(), |mut values, value| {
            values.push(value);
            values
        })
    }
}

// =============================================================================
// Sets and Maps
// =============================================================================

impl<T: Eq + Hash, S: BuildHasher + Default> FromSeq<T> for HashSet<T, S> {
    fn from_seq<I: IntoSeq<Item = T>>(iterable: I) -> Self {
        iterable
            .into_seq()
            .fold(Self::with_hasher(S::default()), |mut members, member| {
                members.insert(member);
                members
            })
    }
}

impl<T: Ord> FromSeq<T> for BTreeSet<T> {
    fn from_seq<I: IntoSeq<Item = T>>(iterable: I) -> Self {
        iterable.into_seq().fold(Self::new(), |mut members, member| {
            members.insert(member);
            members
        })
    }
}

impl<K: Eq + Hash, V, S: BuildHasher + Default> FromSeq<(K, V)> for HashMap<K, V, S> {
    fn from_seq<I: IntoSeq<Item = (K, V)>>(iterable: I) -> Self {
        iterable.into_seq().fold(
            Self::with_hasher(S::default()),
            |mut entries, (key, value)| {
                entries.insert(key, value);
                entries
            },
        )
    }
}

impl<K: Ord, V> FromSeq<(K, V)> for BTreeMap<K, V> {
    fn from_seq<I: IntoSeq<Item = (K, V)>>(iterable: I) -> Self {
        iterable
            .into_seq()
            .fold(Self::new(), |mut entries, (key, value)| {
                entries.insert(key, value);
                entries
            })
    }
}

// =============================================================================
// Text
// =============================================================================

impl FromSeq<char> for String {
    fn from_seq<I: IntoSeq<Item = char>>(iterable: I) -> Self {
        iterable.into_seq().fold(Self::new(), |mut text, character| {
            text.push(character);
            text
        })
    }
}

impl<'a> FromSeq<&'a char> for String {
    fn from_seq<I: IntoSeq<Item = &'a char>>(iterable: I) -> Self {
        iterable.into_seq().fold(Self::new(), |mut text, character| {
            text.push(*character);
            text
        })
    }
}

impl<'a> FromSeq<&'a str> for String {
    fn from_seq<I: IntoSeq<Item = &'a str>>(iterable: I) -> Self {
        iterable.into_seq().fold(Self::new(), |mut text, piece| {
            text.push_str(piece);
            text
        })
    }
}

impl FromSeq<String> for String {
    fn from_seq<I: IntoSeq<Item = String>>(iterable: I) -> Self {
        iterable.into_seq().fold(Self::new(), |mut text, piece| {
            text.push_str(&piece);
            text
        })
    }
}

// =============================================================================
// Option
// =============================================================================

/// Yields the payloads of `Some` elements and stops at the first `None`,
/// recording that it did.
struct UntilNone<'a, I> {
    iter: I,
    found_none: &'a mut bool,
}

impl<A, I> Iterator for UntilNone<'_, I>
where
    I: Iterator<Item = Option<A>>,
{
    type Item = A;

    fn next(&mut self) -> Option<A> {
        if *self.found_none {
            return None;
        }
        match self.iter.next() {
            Some(element) => match element.branch() {
                ControlFlow::Continue(value) => Some(value),
                ControlFlow::Break(_) => {
                    *self.found_none = true;
                    None
                }
            },
            None => None,
        }
    }
}

impl<A, C: FromSeq<A>> FromSeq<Option<A>> for Option<C> {
    fn from_seq<I: IntoSeq<Item = Option<A>>>(iterable: I) -> Self {
        let mut found_none = false;
        let collected = C::from_seq(UntilNone {
            iter: iterable.into_seq(),
            found_none: &mut found_none,
        });
        if found_none { None } else { Some(collected) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Iterable;
    use rstest::rstest;

    #[rstest]
    fn test_collect_preserves_order() {
        let values = [3, 1, 2];
        let vector: Vec<i32> = values.seq().cloned().collect();
        let deque: VecDeque<i32> = values.seq().cloned().collect();
        assert_eq!(vector, vec![3, 1, 2]);
        assert_eq!(deque, VecDeque::from([3, 1, 2]));
    }

    #[rstest]
    fn test_sets_deduplicate() {
        let values = [3, 1, 3, 2, 1];
        let ordered: BTreeSet<i32> = values.seq().cloned().collect();
        let hashed: HashSet<i32> = values.seq().cloned().collect();
        assert_eq!(ordered, BTreeSet::from([1, 2, 3]));
        assert_eq!(hashed.len(), 3);
    }

    #[rstest]
    fn test_maps_keep_last_value_for_key() {
        let entries = [("a", 1), ("b", 2), ("a", 3)];
        let ordered: BTreeMap<&str, i32> = entries.seq().cloned().collect();
        let hashed: HashMap<&str, i32> = entries.seq().cloned().collect();
        assert_eq!(ordered, BTreeMap::from([("a", 3), ("b", 2)]));
        assert_eq!(hashed.get("a"), std::option::Option::Some(&3));
    }

    #[rstest]
    fn test_record_from_field_value_pairs() {
        let fields = ["name", "role"];
        let values = ["ada", "engineer"];
        let record: BTreeMap<String, &str> = fields
            .seq()
            .map(|field| (*field).to_string())
            .zip(values.seq().cloned())
            .collect();
        assert_eq!(record.get("role"), std::option::Option::Some(&"engineer"));
    }

    #[rstest]
    fn test_text_destinations() {
        let letters = ['l', 'a', 'z', 'y'];
        let from_chars: String = letters.seq().collect();
        let from_pieces: String = ["se", "q"].seq().cloned().collect();
        let from_strings: String = ["a", "b"].seq().map(|piece| piece.to_uppercase()).collect();
        assert_eq!(from_chars, "lazy");
        assert_eq!(from_pieces, "seq");
        assert_eq!(from_strings, "AB");
    }

    #[rstest]
    #[case(vec![Some(1), Some(2)], Some(vec![1, 2]))]
    #[case(vec![Some(1), None, Some(3)], None)]
    #[case(vec![], Some(vec![]))]
    fn test_collect_options(
        #[case] elements: Vec<Option<i32>>,
        #[case] expected: Option<Vec<i32>>,
    ) {
        let collected: Option<Vec<i32>> = elements.into_seq().collect();
        assert_eq!(collected, expected);
    }

    #[rstest]
    fn test_collect_options_stops_at_first_none() {
        let elements = [Some(1), None, Some(3)];
        let mut iter = elements.seq().cloned();
        let collected: Option<Vec<i32>> = iter.by_ref().collect();
        assert_eq!(collected, None);
        assert_eq!(iter.next(), Some(Some(3)));
    }

    #[cfg(feature = "smallvec")]
    #[rstest]
    fn test_smallvec_destination() {
        let values = [1, 2, 3];
        let small: smallvec::SmallVec<[i32; 4]> = values.seq().cloned().collect();
        assert!(!small.spilled());
        assert_eq!(small.as_slice(), &[1, 2, 3]);
    }
}
