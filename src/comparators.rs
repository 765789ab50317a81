//! Comparators for [`Collate`](crate::Collate).
//!
//! Implement [`Comparator`] for a custom ordering or let the builder wrap a
//! closure or key function via [`min_by_func`](crate::Builder::min_by_func)
//! and friends. [`Chain::new`] combines two comparators into a
//! then-by ordering.
//!
//! Equal elements never need a tie-breaker here: the collation keeps
//! sources that tie in the order they were supplied, so stability falls out
//! of the engine itself.

use std::cmp::Ordering;

/// Trait used to compare the elements being collated.
///
/// Implementations should produce a consistent total ordering, see [`Ord`]
/// for details. An inconsistent ordering makes the collation yield elements
/// in the wrong order, never anything worse: each pull performs a bounded
/// number of comparisons regardless of what the comparator answers.
pub trait Comparator<T> {
    /// Compares two elements.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, C> Comparator<T> for &C
where
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        C::compare(self, a, b)
    }
}

/// Comparator that uses [`Ord`], the default ordering.
///
/// # Examples
///
/// ```
/// use seq_collate::comparators::{ByOrd, Comparator};
///
/// assert!(ByOrd.compare(&1, &2).is_lt());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByOrd;

impl<T: Ord> Comparator<T> for ByOrd {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        Ord::cmp(a, b)
    }
}

/// Comparator that reverses another one.
///
/// The engine always yields its smallest head first; swapping the operands
/// handed to the inner comparator turns that into largest-first.
#[derive(Debug, Clone)]
pub struct MaxFirst<C>(pub(crate) C);

impl<T, C> Comparator<T> for MaxFirst<C>
where
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Comparator that uses a function returning an [`Ordering`].
///
/// Construct via [`min_by_func`](crate::Builder::min_by_func) or
/// [`max_by_func`](crate::Builder::max_by_func).
#[derive(Debug, Clone)]
pub struct ByFunc<F>(pub(crate) F);

impl<T, F> Comparator<T> for ByFunc<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0(a, b)
    }
}

/// Comparator that compares the keys extracted from each element.
///
/// Construct via [`min_by_key`](crate::Builder::min_by_key) or
/// [`max_by_key`](crate::Builder::max_by_key).
#[derive(Debug, Clone)]
pub struct ByKey<F>(pub(crate) F);

impl<T, F, K> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0(a).cmp(&self.0(b))
    }
}

/// Calls the second comparator when the first one answers [`Ordering::Equal`].
///
/// Similar to [`Ordering::then_with`].
#[derive(Debug, Clone)]
pub struct Chain<C1, C2> {
    first: C1,
    next: C2,
}

impl<C1, C2> Chain<C1, C2> {
    /// Compares with `first`, falling back to `next` on equality.
    pub const fn new<T>(first: C1, next: C2) -> Self
    where
        C1: Comparator<T>,
        C2: Comparator<T>,
    {
        Self { first, next }
    }
}

impl<T, C1, C2> Comparator<T> for Chain<C1, C2>
where
    C1: Comparator<T>,
    C2: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.first.compare(a, b) {
            Ordering::Equal => self.next.compare(a, b),
            decided => decided,
        }
    }
}
