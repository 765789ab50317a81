//! Single-pass combinators over [`Source`]s.
//!
//! [`Map`] and [`Filter`] are returned by the corresponding [`Source`]
//! methods; [`chain`] and [`map_many`] take an explicit collection of
//! sources and work through it in order. All of them are lazy: nothing is
//! pulled from an inner source until the combinator itself is pulled.

use std::collections::VecDeque;

use crate::error::Error;
use crate::source::Source;

/// Source returned by [`Source::map`].
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    source: S,
    transform: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(source: S, transform: F) -> Self {
        Self { source, transform }
    }
}

impl<S, F, U> Source for Map<S, F>
where
    S: Source,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    #[inline]
    fn pull(&mut self) -> Result<Option<U>, Error> {
        Ok(self.source.pull()?.map(&mut self.transform))
    }
}

/// Source returned by [`Source::filter`].
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Source for Filter<S, P>
where
    S: Source,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Result<Option<S::Item>, Error> {
        while let Some(item) = self.source.pull()? {
            if (self.predicate)(&item) {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }
}

/// Source returned by [`chain`]: exhausts each inner source in turn.
#[derive(Debug, Clone)]
pub struct Chained<S> {
    sources: VecDeque<S>,
}

impl<S: Source> Source for Chained<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Result<Option<S::Item>, Error> {
        while let Some(front) = self.sources.front_mut() {
            match front.pull()? {
                Some(item) => return Ok(Some(item)),
                None => {
                    self.sources.pop_front();
                }
            }
        }
        Ok(None)
    }
}

/// Concatenates `sources` into one source, exhausting each in turn.
///
/// # Examples
///
/// ```
/// use seq_collate::{combinators::chain, from_iter, Source};
///
/// let joined = chain([from_iter(vec![1, 2]), from_iter(vec![3])]);
/// let all: Result<Vec<_>, _> = joined.items().collect();
/// assert_eq!(all?, vec![1, 2, 3]);
/// # Ok::<(), seq_collate::Error>(())
/// ```
pub fn chain<T>(sources: T) -> Chained<T::Item>
where
    T: IntoIterator,
    T::Item: Source,
{
    Chained {
        sources: sources.into_iter().collect(),
    }
}

/// Maps every element of every source through one shared transform.
///
/// The typed replacement for a variadic map: one fixed transform, one
/// explicit collection of sources, exhausted in the order supplied.
///
/// # Examples
///
/// ```
/// use seq_collate::{combinators::map_many, from_iter, Source};
///
/// let doubled = map_many([from_iter(vec![1, 2]), from_iter(vec![3])], |x| x * 2);
/// let all: Result<Vec<_>, _> = doubled.items().collect();
/// assert_eq!(all?, vec![2, 4, 6]);
/// # Ok::<(), seq_collate::Error>(())
/// ```
pub fn map_many<T, F, U>(sources: T, transform: F) -> Map<Chained<T::Item>, F>
where
    T: IntoIterator,
    T::Item: Source,
    F: FnMut(<T::Item as Source>::Item) -> U,
{
    chain(sources).map(transform)
}
