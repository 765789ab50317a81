use std::cmp::Ordering;

use crate::collate::Collate;
use crate::comparators::{ByFunc, ByKey, ByOrd, Comparator, MaxFirst};
use crate::source::Source;

/// Builder for [`Collate`].
///
/// Collects the sources to collate and configures how their elements are
/// compared. By default elements are compared with [`Ord`], smallest first;
/// sources that tie yield in the order they were supplied.
///
/// # Examples
///
/// ```
/// use seq_collate::{from_iter, Builder};
///
/// let v = Builder::new([from_iter([1, 3]), from_iter([2, 4])])
///     .build()
///     .try_into_vec()?;
/// assert_eq!(v, vec![1, 2, 3, 4]);
/// # Ok::<(), seq_collate::Error>(())
/// ```
#[derive(Debug)]
pub struct Builder<S, C = ByOrd> {
    sources: Vec<S>,
    comparator: C,
}

impl<S: Source> Builder<S> {
    /// Creates a builder over `sources`.
    ///
    /// Zero sources is fine: the built collation just reports exhaustion
    /// on the first pull.
    pub fn new<T>(sources: T) -> Self
    where
        T: IntoIterator<Item = S>,
    {
        Self {
            sources: sources.into_iter().collect(),
            comparator: ByOrd,
        }
    }
}

impl<S: Source> Default for Builder<S> {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

impl<S: Source, C> Builder<S, C> {
    /// Adds another source to collate, after the ones already collected.
    pub fn push(mut self, source: S) -> Self {
        self.sources.push(source);
        self
    }

    /// Compares elements with `comparator`, yielding the smallest first.
    pub fn min_by<O: Comparator<S::Item>>(self, comparator: O) -> Builder<S, O> {
        Builder {
            sources: self.sources,
            comparator,
        }
    }

    /// Compares elements with `comparator`, yielding the largest first.
    pub fn max_by<O: Comparator<S::Item>>(self, comparator: O) -> Builder<S, MaxFirst<O>> {
        self.min_by(MaxFirst(comparator))
    }

    /// Compares elements with `func`, yielding the smallest first.
    pub fn min_by_func<F>(self, func: F) -> Builder<S, ByFunc<F>>
    where
        F: Fn(&S::Item, &S::Item) -> Ordering,
    {
        self.min_by(ByFunc(func))
    }

    /// Compares elements with `func`, yielding the largest first.
    pub fn max_by_func<F>(self, func: F) -> Builder<S, MaxFirst<ByFunc<F>>>
    where
        F: Fn(&S::Item, &S::Item) -> Ordering,
    {
        self.max_by(ByFunc(func))
    }

    /// Compares elements by the keys `func` extracts, smallest key first.
    pub fn min_by_key<F, K>(self, func: F) -> Builder<S, ByKey<F>>
    where
        F: Fn(&S::Item) -> K,
        K: Ord,
    {
        self.min_by(ByKey(func))
    }

    /// Compares elements by the keys `func` extracts, largest key first.
    pub fn max_by_key<F, K>(self, func: F) -> Builder<S, MaxFirst<ByKey<F>>>
    where
        F: Fn(&S::Item) -> K,
        K: Ord,
    {
        self.max_by(ByKey(func))
    }
}

impl<S, C> Builder<S, C>
where
    S: Source,
    C: Comparator<S::Item>,
{
    /// Builds the [`Collate`].
    ///
    /// Every source is wrapped in a cursor by pulling its first element;
    /// empty sources are dropped and the rest sorted by head value. A
    /// source that fails that first pull is dropped too, and its failure
    /// is delivered by the first pulls of the collation.
    pub fn build(self) -> Collate<S, C> {
        Collate::new(self.comparator, self.sources)
    }
}
