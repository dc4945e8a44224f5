//! Lexicographic pairwise traversal shared by `cmp_by` and `eq_by`.

use super::Iterator;
use crate::control::Option::{None, Some};
use crate::control::{ControlFlow, Ordering};

/// Walks `left` and `right` in lockstep, handing each pair to `compare`.
///
/// A `Break` from `compare` ends the walk with `Break(value)`. Otherwise the
/// result is `Continue` with the length ordering: `Greater` as soon as
/// `right` runs out first, and once `left` is exhausted `right` is probed a
/// single time: `Less` if it still has an element, `Equal` if not.
pub(super) fn iter_compare<A, B, F, T>(
    mut left: A,
    mut right: B,
    mut compare: F,
) -> ControlFlow<T, Ordering>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> ControlFlow<T>,
{
    let flow = left.try_for_each(|left_item| match right.next() {
        None => ControlFlow::Break(ControlFlow::Continue(Ordering::Greater)),
        Some(right_item) => compare(left_item, right_item).map_break(ControlFlow::Break),
    });

    match flow {
        ControlFlow::Continue(()) => ControlFlow::Continue(match right.next() {
            None => Ordering::Equal,
            Some(_) => Ordering::Less,
        }),
        ControlFlow::Break(result) => result,
    }
}
