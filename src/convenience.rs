#![allow(clippy::type_complexity)]
use std::cmp::Ordering;

use crate::collate::{Builder, Collate};
use crate::comparators::{ByFunc, ByKey, ByOrd};
use crate::source::{from_iter, IterSource};

/// Collates pre-sorted collections with default parameters:
/// * Elements are compared by their [`Ord`] implementation, smallest first
/// * Collections that tie yield in the order they were supplied
///
/// # Examples
///
/// ```
/// use seq_collate::collate;
///
/// let v = collate([vec![1, 3, 5], vec![2, 4, 6]]).try_into_vec()?;
/// assert_eq!(v, vec![1, 2, 3, 4, 5, 6]);
/// # Ok::<(), seq_collate::Error>(())
/// ```
pub fn collate<T>(
    inputs: T,
) -> Collate<IterSource<<T::Item as IntoIterator>::IntoIter>, ByOrd>
where
    T: IntoIterator,
    T::Item: IntoIterator,
    <T::Item as IntoIterator>::Item: Ord,
{
    Builder::new(inputs.into_iter().map(from_iter)).build()
}

/// Collates pre-sorted collections, comparing elements with `func`,
/// smallest first. Collections that tie yield in the order they were
/// supplied.
pub fn collate_by<T, F>(
    inputs: T,
    func: F,
) -> Collate<IterSource<<T::Item as IntoIterator>::IntoIter>, ByFunc<F>>
where
    T: IntoIterator,
    T::Item: IntoIterator,
    F: Fn(&<T::Item as IntoIterator>::Item, &<T::Item as IntoIterator>::Item) -> Ordering,
{
    Builder::new(inputs.into_iter().map(from_iter))
        .min_by_func(func)
        .build()
}

/// Collates pre-sorted collections, comparing elements by the keys `func`
/// extracts, smallest key first. Collections that tie yield in the order
/// they were supplied.
pub fn collate_by_key<T, F, K>(
    inputs: T,
    func: F,
) -> Collate<IterSource<<T::Item as IntoIterator>::IntoIter>, ByKey<F>>
where
    T: IntoIterator,
    T::Item: IntoIterator,
    F: Fn(&<T::Item as IntoIterator>::Item) -> K,
    K: Ord,
{
    Builder::new(inputs.into_iter().map(from_iter))
        .min_by_key(func)
        .build()
}
