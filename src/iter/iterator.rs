//! The `Iterator` trait.
//!
//! An iterator is anything with a `next` method that yields `Some(item)`
//! until it is exhausted and `None` afterwards. Everything else in this
//! trait is derived from `next`: adapter constructors that wrap `self` in a
//! new lazy iterator, and terminal operations that drain it.
//!
//! Terminal operations that may stop early (`all`, `any`, `find`,
//! `position`, comparisons, ...) are built on [`Iterator::try_fold`] and
//! leave the iterator positioned right after the element that decided the
//! result.

use std::ops::{Add, Mul};

use super::adapters::{
    Chain, Cloned, Cycle, Enumerate, Filter, FilterMap, FlatMap, Flatten, Fuse, Intersperse, Map,
    MapWhile, Skip, SkipWhile, StepBy, Take, TakeWhile, Zip,
};
use super::compare::iter_compare;
use super::into_std::IntoStd;
use crate::control::Option::{self, None, Some};
use crate::control::{ControlFlow, Ordering};
use crate::error::SeqError;
use crate::typeclass::{Comparable, Equatable, FromSeq, IntoSeq, ToOrdering};

/// A lazy sequence of values pulled one at a time.
///
/// Only [`next`](Iterator::next) is required. Implementors may override the
/// provided methods when they can do better (a slice can skip elements
/// without touching them, a reversed iterator folds from the back).
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// struct Countdown(u32);
///
/// impl Iterator for Countdown {
///     type Item = u32;
///
///     fn next(&mut self) -> Option<u32> {
///         if self.0 == 0 {
///             None
///         } else {
///             self.0 -= 1;
///             Some(self.0 + 1)
///         }
///     }
/// }
///
/// let collected: Vec<u32> = Countdown(3).collect();
/// assert_eq!(collected, vec![3, 2, 1]);
/// assert_eq!(Countdown(4).fold(0, |sum, value| sum + value), 10);
/// ```
pub trait Iterator {
    /// The type of the elements being iterated over.
    type Item;

    /// Pulls the next element, or `None` once the iterator is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    // =========================================================================
    // Core drivers
    // =========================================================================

    /// Discards up to `n` elements.
    ///
    /// Returns `true` if all `n` elements existed. When fewer remain, the
    /// iterator is drained and `false` is returned.
    fn advance_by(&mut self, n: usize) -> bool {
        for _ in 0..n {
            if self.next().is_none() {
                return false;
            }
        }
        true
    }

    /// Returns the `n`th remaining element (zero-based), consuming it and
    /// every element before it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let values = [1, 2, 3];
    /// let mut iter = values.seq();
    /// assert_eq!(iter.nth(1), Some(&2));
    /// assert_eq!(iter.nth(1), None);
    /// ```
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if self.advance_by(n) { self.next() } else { None }
    }

    /// Applies `function` to an accumulator and each element until the
    /// function returns `Break` or the iterator runs out.
    ///
    /// Returns `Break(result)` when stopped early (the iterator stays
    /// positioned after the deciding element) and `Continue(accumulator)`
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let values = [1, 2, 3, 4];
    /// let mut iter = values.seq();
    /// let flow = iter.try_fold(0, |sum, value| {
    ///     if *value == 3 { ControlFlow::Break(sum) } else { ControlFlow::Continue(sum + value) }
    /// });
    /// assert_eq!(flow, ControlFlow::Break(3));
    /// assert_eq!(iter.next(), Some(&4));
    /// ```
    fn try_fold<B, F, R>(&mut self, init: B, mut function: F) -> ControlFlow<R, B>
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> ControlFlow<R, B>,
    {
        let mut accumulator = init;
        while let Some(item) = self.next() {
            match function(accumulator, item) {
                ControlFlow::Continue(next) => accumulator = next,
                ControlFlow::Break(result) => return ControlFlow::Break(result),
            }
        }
        ControlFlow::Continue(accumulator)
    }

    /// Calls `function` on each element until it returns `Break`.
    fn try_for_each<F, R>(&mut self, mut function: F) -> ControlFlow<R>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        self.try_fold((), |(), item| function(item))
    }

    /// Folds every element into an accumulator, draining the iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let values = [1, 2, 3];
    /// assert_eq!(values.seq().fold(0, |sum, value| sum + value), 6);
    /// ```
    fn fold<B, F>(mut self, init: B, mut function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut accumulator = init;
        while let Some(item) = self.next() {
            accumulator = function(accumulator, item);
        }
        accumulator
    }

    // =========================================================================
    // Searches and predicates
    // =========================================================================

    /// Returns `true` if `predicate` holds for every element.
    ///
    /// Stops at the first failing element; vacuously `true` when empty.
    fn all<F>(&mut self, mut predicate: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool,
    {
        self.try_fold((), |(), item| {
            if predicate(item) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_continue()
    }

    /// Returns `true` if `predicate` holds for some element.
    ///
    /// Stops at the first passing element; `false` when empty.
    fn any<F>(&mut self, mut predicate: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool,
    {
        self.try_fold((), |(), item| {
            if predicate(item) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(&mut self, mut predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.try_fold((), |(), item| {
            if predicate(&item) {
                ControlFlow::Break(item)
            } else {
                ControlFlow::Continue(())
            }
        })
        .break_value()
    }

    /// Returns the first `Some` produced by `function`.
    fn find_map<B, F>(&mut self, mut function: F) -> Option<B>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        self.try_fold((), |(), item| match function(item) {
            Some(value) => ControlFlow::Break(value),
            None => ControlFlow::Continue(()),
        })
        .break_value()
    }

    /// Returns the index of the first element satisfying `predicate`.
    fn position<P>(&mut self, mut predicate: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        self.try_fold(0, |index, item| {
            if predicate(item) {
                ControlFlow::Break(index)
            } else {
                ControlFlow::Continue(index + 1)
            }
        })
        .break_value()
    }

    // =========================================================================
    // Adapter constructors
    // =========================================================================

    /// Borrows the iterator so an adapter can consume part of it while the
    /// caller keeps the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let values = [1, 2, 3, 4];
    /// let mut iter = values.seq();
    /// let head: Vec<&i32> = iter.by_ref().take(2).collect();
    /// assert_eq!(head, vec![&1, &2]);
    /// assert_eq!(iter.next(), Some(&3));
    /// ```
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Yields every element of `self`, then every element of `other`.
    fn chain<U>(self, other: U) -> Chain<Self, U::IntoSeq>
    where
        Self: Sized,
        U: IntoSeq<Item = Self::Item>,
    {
        Chain::new(self, other.into_seq())
    }

    /// Clones each borrowed element.
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sized + Iterator<Item = &'a T>,
        T: Clone + 'a,
    {
        Cloned::new(self)
    }

    /// Repeats the iterator endlessly by restarting a clone of its initial
    /// state. An empty iterator cycles to nothing.
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized + Clone,
    {
        Cycle::new(self)
    }

    /// Pairs each element with its zero-based index.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Yields only the elements satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Maps each element through `function`, keeping the `Some` results.
    fn filter_map<B, F>(self, function: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        FilterMap::new(self, function)
    }

    /// Maps each element to something iterable and yields the results one
    /// level flattened.
    fn flat_map<U, F>(self, function: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        U: IntoSeq,
        F: FnMut(Self::Item) -> U,
    {
        Flatten::new(self.map(function))
    }

    /// Flattens one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let nested = vec![vec![1, 2], vec![], vec![3]];
    /// let flat: Vec<i32> = nested.into_seq().flatten().collect();
    /// assert_eq!(flat, vec![1, 2, 3]);
    /// ```
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: IntoSeq,
    {
        Flatten::new(self)
    }

    /// Guarantees `None` forever after the first `None`.
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Places a clone of `separator` between adjacent elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let joined: String = "abc".seq().intersperse('-').collect();
    /// assert_eq!(joined, "a-b-c");
    /// ```
    fn intersperse(self, separator: Self::Item) -> Intersperse<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Intersperse::new(self, separator)
    }

    /// Transforms each element with `function`.
    fn map<B, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, function)
    }

    /// Maps elements while `predicate` returns `Some`; the first `None` ends
    /// the iterator for good.
    fn map_while<B, P>(self, predicate: P) -> MapWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(Self::Item) -> Option<B>,
    {
        MapWhile::new(self, predicate)
    }

    /// Skips the first `n` elements.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// Skips elements while `predicate` holds, then yields the rest
    /// unfiltered.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Yields the first element, then every `step`th element after it.
    ///
    /// A `step` of zero behaves like one.
    fn step_by(self, step: usize) -> StepBy<Self>
    where
        Self: Sized,
    {
        StepBy::new(self, step)
    }

    /// Yields at most `n` elements.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Yields elements while `predicate` holds; the first failure ends the
    /// iterator for good.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Pairs elements of `self` and `other` until either runs out.
    fn zip<U>(self, other: U) -> Zip<Self, U::IntoSeq>
    where
        Self: Sized,
        U: IntoSeq,
    {
        Zip::new(self, other.into_seq())
    }

    /// Hands the iterator to the host so it can drive a `for` loop or any
    /// `std::iter` API.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut total = 0;
    /// for value in [1, 2, 3].seq().map(|value| value * 10).into_std() {
    ///     total += value;
    /// }
    /// assert_eq!(total, 60);
    /// ```
    fn into_std(self) -> IntoStd<Self>
    where
        Self: Sized,
    {
        IntoStd::new(self)
    }

    // =========================================================================
    // Terminal operations
    // =========================================================================

    /// Builds a collection from the remaining elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    /// use std::collections::BTreeMap;
    ///
    /// let pairs = [("first", 1), ("second", 2)];
    /// let record: BTreeMap<&str, i32> = pairs.seq().cloned().collect();
    /// assert_eq!(record.get("second"), std::option::Option::Some(&2));
    /// ```
    fn collect<B>(self) -> B
    where
        Self: Sized,
        B: FromSeq<Self::Item>,
    {
        B::from_seq(self)
    }

    /// Counts the remaining elements, draining the iterator.
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |count, _| count + 1)
    }

    /// Calls `function` on each element.
    fn for_each<F>(self, mut function: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.fold((), |(), item| function(item));
    }

    /// Returns the final element.
    fn last(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.fold(None, |_, item| Some(item))
    }

    /// Folds the elements into one using the first element as the initial
    /// accumulator. `None` when empty.
    fn reduce<F>(mut self, function: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        match self.next() {
            Some(first) => Some(self.fold(first, function)),
            None => None,
        }
    }

    /// Splits the elements into those satisfying `predicate` and those that
    /// do not, preserving order within each side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let (even, odd): (Vec<i32>, Vec<i32>) =
    ///     [1, 2, 3, 4].seq().cloned().partition(|value| value % 2 == 0);
    /// assert_eq!(even, vec![2, 4]);
    /// assert_eq!(odd, vec![1, 3]);
    /// ```
    fn partition<B, F>(self, mut predicate: F) -> (B, B)
    where
        Self: Sized,
        B: Default + Extend<Self::Item>,
        F: FnMut(&Self::Item) -> bool,
    {
        let mut passing = B::default();
        let mut failing = B::default();
        self.for_each(|item| {
            if predicate(&item) {
                passing.extend(std::iter::once(item));
            } else {
                failing.extend(std::iter::once(item));
            }
        });
        (passing, failing)
    }

    /// Splits an iterator of pairs into two collections.
    fn unzip<A, B, FromA, FromB>(self) -> (FromA, FromB)
    where
        Self: Sized + Iterator<Item = (A, B)>,
        FromA: Default + Extend<A>,
        FromB: Default + Extend<B>,
    {
        let mut left = FromA::default();
        let mut right = FromB::default();
        self.for_each(|(a, b)| {
            left.extend(std::iter::once(a));
            right.extend(std::iter::once(b));
        });
        (left, right)
    }

    /// Returns `true` if every element satisfying `predicate` precedes every
    /// element that does not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// assert!([2, 4, 1, 3].seq().is_partitioned(|value| value % 2 == 0));
    /// assert!(![2, 1, 4].seq().is_partitioned(|value| value % 2 == 0));
    /// ```
    fn is_partitioned<P>(mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        // `all` stops on the first failing element; the rest must all fail.
        self.all(&mut predicate) || !self.any(predicate)
    }

    /// Sums the elements, seeding the total with the first one.
    ///
    /// # Panics
    ///
    /// Panics with [`SeqError::EmptySequence`] if the iterator is empty. Use
    /// [`try_sum`](Iterator::try_sum) to handle that case.
    #[track_caller]
    fn sum<S>(self) -> S
    where
        Self: Sized,
        S: From<Self::Item> + Add<Self::Item, Output = S>,
    {
        match self.try_sum() {
            Ok(total) => total,
            Err(error) => panic!("{error}"),
        }
    }

    /// Sums the elements.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::EmptySequence`] if the iterator is empty.
    fn try_sum<S>(mut self) -> Result<S, SeqError>
    where
        Self: Sized,
        S: From<Self::Item> + Add<Self::Item, Output = S>,
    {
        match self.next() {
            Some(first) => Ok(self.fold(S::from(first), |total, item| total + item)),
            None => Err(SeqError::EmptySequence { operation: "sum" }),
        }
    }

    /// Multiplies the elements, seeding the product with the first one.
    ///
    /// # Panics
    ///
    /// Panics with [`SeqError::EmptySequence`] if the iterator is empty.
    #[track_caller]
    fn product<S>(self) -> S
    where
        Self: Sized,
        S: From<Self::Item> + Mul<Self::Item, Output = S>,
    {
        match self.try_product() {
            Ok(product) => product,
            Err(error) => panic!("{error}"),
        }
    }

    /// Multiplies the elements.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::EmptySequence`] if the iterator is empty.
    fn try_product<S>(mut self) -> Result<S, SeqError>
    where
        Self: Sized,
        S: From<Self::Item> + Mul<Self::Item, Output = S>,
    {
        match self.next() {
            Some(first) => Ok(self.fold(S::from(first), |product, item| product * item)),
            None => Err(SeqError::EmptySequence {
                operation: "product",
            }),
        }
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Lexicographically compares `self` with `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// assert_eq!([1, 2].seq().cmp([1, 2, 3].seq()), Ordering::Less);
    /// assert_eq!([1, 2].seq().cmp([1, 2].seq()), Ordering::Equal);
    /// assert_eq!([1, 2].seq().cmp([1].seq()), Ordering::Greater);
    /// ```
    fn cmp<I>(self, other: I) -> Ordering
    where
        Self: Sized,
        I: IntoSeq<Item = Self::Item>,
        Self::Item: Comparable,
    {
        self.cmp_by(other, |left, right| Comparable::compare(&left, &right))
    }

    /// Lexicographically compares `self` with `other` using `compare`.
    ///
    /// The comparator may return anything convertible with [`ToOrdering`],
    /// such as a signed difference.
    fn cmp_by<I, F, R>(self, other: I, mut compare: F) -> Ordering
    where
        Self: Sized,
        I: IntoSeq,
        F: FnMut(Self::Item, I::Item) -> R,
        R: ToOrdering,
    {
        iter_compare(self, other.into_seq(), |left, right| {
            match compare(left, right).to_ordering() {
                Ordering::Equal => ControlFlow::Continue(()),
                ordering => ControlFlow::Break(ordering),
            }
        })
        .into_value()
    }

    /// Returns `true` if `self` and `other` have equal elements in the same
    /// order and the same length.
    fn eq<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoSeq<Item = Self::Item>,
        Self::Item: Equatable,
    {
        self.eq_by(other, |left, right| Equatable::equals(&left, &right))
    }

    /// Like [`eq`](Iterator::eq) with a custom equality.
    fn eq_by<I, F>(self, other: I, mut equals: F) -> bool
    where
        Self: Sized,
        I: IntoSeq,
        F: FnMut(Self::Item, I::Item) -> bool,
    {
        match iter_compare(self, other.into_seq(), |left, right| {
            if equals(left, right) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        }) {
            ControlFlow::Continue(ordering) => ordering.is_equal(),
            ControlFlow::Break(()) => false,
        }
    }

    /// Negation of [`eq`](Iterator::eq).
    fn ne<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoSeq<Item = Self::Item>,
        Self::Item: Equatable,
    {
        !self.eq(other)
    }

    /// Returns `true` if `self` orders before `other`.
    fn lt<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoSeq<Item = Self::Item>,
        Self::Item: Comparable,
    {
        self.cmp(other).is_less()
    }

    /// Returns `true` if `self` orders before or equal to `other`.
    fn le<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoSeq<Item = Self::Item>,
        Self::Item: Comparable,
    {
        self.cmp(other).is_less_equal()
    }

    /// Returns `true` if `self` orders after `other`.
    fn gt<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoSeq<Item = Self::Item>,
        Self::Item: Comparable,
    {
        self.cmp(other).is_greater()
    }

    /// Returns `true` if `self` orders after or equal to `other`.
    fn ge<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoSeq<Item = Self::Item>,
        Self::Item: Comparable,
    {
        self.cmp(other).is_greater_equal()
    }

    // =========================================================================
    // Extremes
    // =========================================================================

    /// Returns the greatest element; among equals, the last one.
    fn max(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Comparable,
    {
        self.max_by(|left, right| Comparable::compare(left, right))
    }

    /// Returns the greatest element according to `compare`; among equals,
    /// the last one.
    fn max_by<F, R>(self, mut compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> R,
        R: ToOrdering,
    {
        self.reduce(|current, candidate| {
            if compare(&current, &candidate).to_ordering().is_greater() {
                current
            } else {
                candidate
            }
        })
    }

    /// Returns the element whose key is greatest; among equal keys, the last
    /// one. `key` runs once per element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let words = ["kiwi", "fig", "plum"];
    /// assert_eq!(words.seq().max_by_key(|word| word.len()), Some(&"plum"));
    /// assert_eq!(words.seq().min_by_key(|word| word.len()), Some(&"fig"));
    /// ```
    fn max_by_key<K, F>(self, mut key: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: Comparable,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|item| (key(&item), item))
            .max_by(|(left, _), (right, _)| left.compare(right))
            .map(|(_, item)| item)
    }

    /// Returns the least element; among equals, the first one.
    fn min(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Comparable,
    {
        self.min_by(|left, right| Comparable::compare(left, right))
    }

    /// Returns the least element according to `compare`; among equals, the
    /// first one.
    fn min_by<F, R>(self, mut compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> R,
        R: ToOrdering,
    {
        self.reduce(|current, candidate| {
            if compare(&current, &candidate).to_ordering().is_greater() {
                candidate
            } else {
                current
            }
        })
    }

    /// Returns the element whose key is least; among equal keys, the first
    /// one. `key` runs once per element.
    fn min_by_key<K, F>(self, mut key: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: Comparable,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|item| (key(&item), item))
            .min_by(|(left, _), (right, _)| left.compare(right))
            .map(|(_, item)| item)
    }

    // =========================================================================
    // Sortedness
    // =========================================================================

    /// Returns `true` if the elements are in non-decreasing order.
    fn is_sorted(self) -> bool
    where
        Self: Sized,
        Self::Item: Comparable,
    {
        self.is_sorted_by(|left, right| Comparable::compare(left, right).is_less_equal())
    }

    /// Returns `true` if `in_order` holds for every adjacent pair.
    fn is_sorted_by<F>(mut self, mut in_order: F) -> bool
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        let mut last = match self.next() {
            Some(first) => first,
            None => return true,
        };
        self.all(move |current| {
            if in_order(&last, &current) {
                last = current;
                true
            } else {
                false
            }
        })
    }

    /// Returns `true` if the keys extracted by `key` are in non-decreasing
    /// order.
    fn is_sorted_by_key<K, F>(self, key: F) -> bool
    where
        Self: Sized,
        K: Comparable,
        F: FnMut(Self::Item) -> K,
    {
        self.map(key).is_sorted()
    }
}

impl<I: Iterator + ?Sized> Iterator for &mut I {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn advance_by(&mut self, n: usize) -> bool {
        (**self).advance_by(n)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        (**self).nth(n)
    }
}

impl<I: Iterator + ?Sized> Iterator for Box<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn advance_by(&mut self, n: usize) -> bool {
        (**self).advance_by(n)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        (**self).nth(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::DoubleEndedIterator;
    use crate::typeclass::Iterable;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(3, true)]
    #[case(4, false)]
    fn test_advance_by_reports_shortfall(#[case] n: usize, #[case] expected: bool) {
        let values = [1, 2, 3];
        let mut iter = values.seq();
        assert_eq!(iter.advance_by(n), expected);
    }

    #[rstest]
    fn test_advance_by_past_end_drains() {
        let values = [1, 2, 3];
        let mut iter = values.seq();
        assert!(!iter.advance_by(10));
        assert_eq!(iter.next(), None);
    }

    #[rstest]
    fn test_all_stops_at_first_failure() {
        let values = [2, 4, 5, 6];
        let mut iter = values.seq();
        assert!(!iter.all(|value| value % 2 == 0));
        assert_eq!(iter.next(), Some(&6));
    }

    #[rstest]
    fn test_any_stops_at_first_success() {
        let values = [1, 3, 4, 5];
        let mut iter = values.seq();
        assert!(iter.any(|value| value % 2 == 0));
        assert_eq!(iter.next(), Some(&5));
    }

    #[rstest]
    fn test_empty_predicates() {
        let values: [i32; 0] = [];
        assert!(values.seq().all(|_| false));
        assert!(!values.seq().any(|_| true));
    }

    #[rstest]
    fn test_find_and_position() {
        let values = [1, 2, 3, 4];
        assert_eq!(values.seq().find(|value| **value > 2), Some(&3));
        assert_eq!(values.seq().position(|value| *value > 2), Some(2));
        assert_eq!(values.seq().position(|value| *value > 9), None);
    }

    #[rstest]
    fn test_find_map_returns_first_some() {
        let words = ["a", "12", "b", "7"];
        let parsed = words
            .seq()
            .find_map(|word| Option::from(word.parse::<i32>().ok()));
        assert_eq!(parsed, Some(12));
    }

    #[rstest]
    fn test_count_and_last() {
        let values = [1, 2, 3];
        assert_eq!(values.seq().count(), 3);
        assert_eq!(values.seq().last(), Some(&3));
        assert_eq!([0_u8; 0].seq().last(), None);
    }

    #[rstest]
    fn test_reduce() {
        let values = [1, 2, 3, 4];
        assert_eq!(values.seq().cloned().reduce(|left, right| left * right), Some(24));
        assert_eq!([0_i32; 0].seq().cloned().reduce(|left, right| left + right), None);
    }

    #[rstest]
    fn test_sum_and_product() {
        let values = [1, 2, 3, 4];
        assert_eq!(values.seq().cloned().sum::<i32>(), 10);
        assert_eq!(values.seq().cloned().product::<i32>(), 24);
        assert_eq!([1.5_f64, 2.5].seq().cloned().sum::<f64>(), 4.0);
    }

    #[rstest]
    fn test_try_sum_on_empty_is_error() {
        let empty: [i32; 0] = [];
        assert_eq!(
            empty.seq().cloned().try_sum::<i32>(),
            Err(SeqError::EmptySequence { operation: "sum" })
        );
        assert_eq!(
            empty.seq().cloned().try_product::<i32>(),
            Err(SeqError::EmptySequence {
                operation: "product"
            })
        );
    }

    #[rstest]
    #[should_panic(expected = "sum() on an empty sequence")]
    fn test_sum_on_empty_panics() {
        let empty: [i32; 0] = [];
        let _ = empty.seq().cloned().sum::<i32>();
    }

    #[rstest]
    #[case(&[1, 2], &[1, 2, 3], Ordering::Less)]
    #[case(&[1, 2], &[1, 2], Ordering::Equal)]
    #[case(&[1, 2], &[1], Ordering::Greater)]
    #[case(&[1, 3], &[1, 2, 9], Ordering::Greater)]
    #[case(&[], &[], Ordering::Equal)]
    fn test_cmp(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: Ordering) {
        assert_eq!(left.seq().cmp(right.seq()), expected);
    }

    #[rstest]
    fn test_cmp_by_accepts_signed_difference() {
        let left = [1, 2, 3];
        let right = [1, 2, 4];
        assert_eq!(
            left.seq().cmp_by(right.seq(), |a, b| a - b),
            Ordering::Less
        );
    }

    #[rstest]
    fn test_relational_operations() {
        let short = [1, 2];
        let long = [1, 2, 3];
        assert!(short.seq().lt(long.seq()));
        assert!(short.seq().le(short.seq()));
        assert!(long.seq().gt(short.seq()));
        assert!(long.seq().ge(long.seq()));
        assert!(short.seq().eq(short.seq()));
        assert!(short.seq().ne(long.seq()));
    }

    #[rstest]
    fn test_eq_by_stops_at_mismatch() {
        let left = ["a", "B", "x"];
        let right = ["A", "b", "y"];
        let mut calls = 0;
        let equal = left.seq().eq_by(right.seq(), |a, b| {
            calls += 1;
            a.eq_ignore_ascii_case(b)
        });
        assert!(!equal);
        assert_eq!(calls, 3);
    }

    #[rstest]
    fn test_max_keeps_last_and_min_keeps_first() {
        let pairs = [(1, 'a'), (3, 'b'), (3, 'c'), (1, 'd')];
        assert_eq!(pairs.seq().max_by_key(|pair| pair.0), Some(&(3, 'c')));
        assert_eq!(pairs.seq().min_by_key(|pair| pair.0), Some(&(1, 'a')));
    }

    #[rstest]
    fn test_max_and_min() {
        let values = [4, 9, 1, 7];
        assert_eq!(values.seq().max(), Some(&9));
        assert_eq!(values.seq().min(), Some(&1));
        assert_eq!([0_i32; 0].seq().max(), None);
    }

    #[rstest]
    fn test_max_by_with_reversed_comparator() {
        let values = [4, 9, 1, 7];
        assert_eq!(
            values.seq().max_by(|left, right| Comparable::compare(*right, *left)),
            Some(&1)
        );
    }

    #[rstest]
    #[case(&[], true)]
    #[case(&[1], true)]
    #[case(&[1, 2, 2, 9], true)]
    #[case(&[1, 3, 2], false)]
    fn test_is_sorted(#[case] values: &[i32], #[case] expected: bool) {
        assert_eq!(values.seq().is_sorted(), expected);
    }

    #[rstest]
    fn test_is_sorted_by_key() {
        let words = ["a", "bb", "ccc"];
        assert!(words.seq().is_sorted_by_key(|word| word.len()));
        assert!(!words.seq().rev().is_sorted_by_key(|word| word.len()));
    }

    #[rstest]
    fn test_unzip() {
        let pairs = [(1, 'a'), (2, 'b')];
        let (numbers, letters): (Vec<i32>, Vec<char>) = pairs.seq().cloned().unzip();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(letters, vec!['a', 'b']);
    }

    #[rstest]
    fn test_by_ref_through_mutable_reference() {
        let values = [1, 2, 3, 4, 5];
        let mut iter = values.seq();
        assert_eq!(iter.by_ref().nth(1), Some(&2));
        assert_eq!(iter.by_ref().skip(1).next(), Some(&4));
        assert_eq!(iter.next(), Some(&5));
    }

    #[rstest]
    fn test_boxed_iterator() {
        let values = [1, 2, 3];
        let mut boxed: Box<dyn Iterator<Item = &i32>> = Box::new(values.seq());
        assert_eq!(boxed.next(), Some(&1));
        assert_eq!(boxed.count(), 2);
    }
}
