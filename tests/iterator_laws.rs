//! Property-based tests for the Iterator trait and its adapters.
//!
//! Each property checks an adapter or terminal operation against the
//! equivalent computation over a plain `Vec`.

#![cfg(feature = "iter")]

use lazyseq::control::Ordering;
use lazyseq::iter::{DoubleEndedIterator, Iterator};
use lazyseq::typeclass::{IntoSeq, Iterable};
use proptest::prelude::*;
use std::iter::Iterator as _;

// =============================================================================
// Strategy Definitions
// =============================================================================

fn arb_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000..1000_i32, 0..24)
}

fn arb_nested() -> impl Strategy<Value = Vec<Vec<i32>>> {
    prop::collection::vec(prop::collection::vec(-100..100_i32, 0..5), 0..8)
}

// =============================================================================
// Adapter Laws
// =============================================================================

proptest! {
    /// map preserves length and applies the function in order.
    #[test]
    fn prop_map_matches_vec(values in arb_values()) {
        let mapped: Vec<i32> = values.seq().map(|value| value * 2).collect();
        let expected: Vec<i32> = values.iter().map(|value| value * 2).collect();
        prop_assert_eq!(mapped, expected);
    }

    /// filter keeps exactly the passing elements.
    #[test]
    fn prop_filter_matches_vec(values in arb_values()) {
        let kept: Vec<i32> = values.seq().cloned().filter(|value| value % 3 == 0).collect();
        let expected: Vec<i32> = values.iter().copied().filter(|value| value % 3 == 0).collect();
        prop_assert_eq!(kept, expected);
    }

    /// skip(n) followed by take(n) from the same iterator partitions it.
    #[test]
    fn prop_take_then_rest_reassembles(values in arb_values(), n in 0..30_usize) {
        let mut iter = values.seq().cloned();
        let mut head: Vec<i32> = iter.by_ref().take(n).collect();
        let tail: Vec<i32> = iter.collect();
        prop_assert_eq!(head.len(), n.min(values.len()));
        head.extend(tail);
        prop_assert_eq!(head, values);
    }

    /// skip(n) yields the suffix after the first n elements.
    #[test]
    fn prop_skip_matches_slice(values in arb_values(), n in 0..30_usize) {
        let skipped: Vec<i32> = values.seq().cloned().skip(n).collect();
        let expected = values.get(n..).map_or_else(Vec::new, <[i32]>::to_vec);
        prop_assert_eq!(skipped, expected);
    }

    /// chain's length is the sum of both lengths.
    #[test]
    fn prop_chain_concatenates(left in arb_values(), right in arb_values()) {
        let chained: Vec<i32> = left.seq().chain(right.seq()).cloned().collect();
        let expected = [left.clone(), right.clone()].concat();
        prop_assert_eq!(chained, expected);
    }

    /// zip stops at the shorter side.
    #[test]
    fn prop_zip_length_is_minimum(left in arb_values(), right in arb_values()) {
        prop_assert_eq!(left.seq().zip(right.seq()).count(), left.len().min(right.len()));
    }

    /// flatten visits every inner element in order.
    #[test]
    fn prop_flatten_concatenates(nested in arb_nested()) {
        let flat: Vec<i32> = nested.clone().into_seq().flatten().collect();
        prop_assert_eq!(flat, nested.concat());
    }

    /// step_by(k) yields every k-th element starting with the first.
    #[test]
    fn prop_step_by_matches_std(values in arb_values(), step in 1..6_usize) {
        let stepped: Vec<i32> = values.seq().cloned().step_by(step).collect();
        let expected: Vec<i32> = values.iter().copied().step_by(step).collect();
        prop_assert_eq!(stepped, expected);
    }

    /// intersperse places a separator between neighbours only.
    #[test]
    fn prop_intersperse_length(values in arb_values()) {
        let interspersed = values.seq().cloned().intersperse(0).count();
        prop_assert_eq!(interspersed, (values.len() * 2).saturating_sub(1));
    }

    /// enumerate indices count up from zero.
    #[test]
    fn prop_enumerate_indices(values in arb_values()) {
        let indices: Vec<usize> = values.seq().enumerate().map(|(index, _)| index).collect();
        let expected: Vec<usize> = (0..values.len()).collect();
        prop_assert_eq!(indices, expected);
    }

    /// take_while and skip_while split the sequence at the same point.
    #[test]
    fn prop_take_while_and_skip_while_split(values in arb_values()) {
        let mut head: Vec<i32> = values.seq().cloned().take_while(|value| *value < 500).collect();
        let tail: Vec<i32> = values.seq().cloned().skip_while(|value| *value < 500).collect();
        head.extend(tail);
        prop_assert_eq!(head, values);
    }
}

// =============================================================================
// Double-Ended Laws
// =============================================================================

proptest! {
    /// rev yields the elements back to front.
    #[test]
    fn prop_rev_reverses(values in arb_values()) {
        let reversed: Vec<i32> = values.seq().rev().cloned().collect();
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(reversed, expected);
    }

    /// rfold sees the same elements as fold, in the opposite order.
    #[test]
    fn prop_rfold_mirrors_fold(values in arb_values()) {
        let forward = values.seq().fold(Vec::new(), |mut seen, value| {
            seen.push(*value);
            seen
        });
        let mut backward = values.seq().rfold(Vec::new(), |mut seen, value| {
            seen.push(*value);
            seen
        });
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    /// Alternating next and next_back visits every element exactly once.
    #[test]
    fn prop_both_ends_visit_once(values in arb_values()) {
        let mut iter = values.seq();
        let mut visited = 0;
        let mut from_front = true;
        loop {
            let pulled = if from_front { iter.next() } else { iter.next_back() };
            if pulled.is_none() {
                break;
            }
            visited += 1;
            from_front = !from_front;
        }
        prop_assert_eq!(visited, values.len());
    }
}

// =============================================================================
// Terminal Operation Laws
// =============================================================================

proptest! {
    /// cmp agrees with the lexicographic order of Vec.
    #[test]
    fn prop_cmp_matches_vec_order(left in arb_values(), right in arb_values()) {
        let expected = Ordering::from(Ord::cmp(&left, &right));
        prop_assert_eq!(left.seq().cmp(right.seq()), expected);
        prop_assert_eq!(left.seq().lt(right.seq()), left < right);
        prop_assert_eq!(left.seq().ge(right.seq()), left >= right);
    }

    /// eq is reflexive and agrees with Vec equality.
    #[test]
    fn prop_eq_matches_vec_equality(left in arb_values(), right in arb_values()) {
        prop_assert!(left.seq().eq(left.seq()));
        prop_assert_eq!(left.seq().eq(right.seq()), left == right);
        prop_assert_eq!(left.seq().ne(right.seq()), left != right);
    }

    /// sum and fold agree.
    #[test]
    fn prop_sum_matches_fold(values in arb_values()) {
        prop_assume!(!values.is_empty());
        let total: i32 = values.clone().into_seq().sum();
        prop_assert_eq!(total, values.seq().fold(0, |total, value| total + value));
    }

    /// max and min agree with the std extremes on values.
    #[test]
    fn prop_max_min_match_std(values in arb_values()) {
        let max = values.seq().max().map(|value| *value).into_std();
        let min = values.seq().min().map(|value| *value).into_std();
        prop_assert_eq!(max, values.iter().copied().max());
        prop_assert_eq!(min, values.iter().copied().min());
    }

    /// A sorted vector is sorted; is_sorted agrees with slice::is_sorted.
    #[test]
    fn prop_is_sorted_matches_slice(values in arb_values()) {
        prop_assert_eq!(values.seq().is_sorted(), values.is_sorted());
        let mut sorted = values.clone();
        sorted.sort_unstable();
        prop_assert!(sorted.seq().is_sorted());
    }

    /// partition splits without losing elements.
    #[test]
    fn prop_partition_conserves(values in arb_values()) {
        let (even, odd): (Vec<i32>, Vec<i32>) =
            values.clone().into_seq().partition(|value| value % 2 == 0);
        prop_assert_eq!(even.len() + odd.len(), values.len());
        prop_assert!(even.seq().all(|value| value % 2 == 0));
        prop_assert!(odd.seq().all(|value| value % 2 != 0));
    }

    /// position finds the first match that Vec reports.
    #[test]
    fn prop_position_matches_std(values in arb_values(), target in -5..5_i32) {
        let found = values.seq().position(|value| *value == target).into_std();
        prop_assert_eq!(found, values.iter().position(|value| *value == target));
    }

    /// count never pulls more than the elements present.
    #[test]
    fn prop_cycle_take_count(values in arb_values(), n in 0..50_usize) {
        let count = values.seq().cycle().take(n).count();
        let expected = if values.is_empty() { 0 } else { n };
        prop_assert_eq!(count, expected);
    }
}
