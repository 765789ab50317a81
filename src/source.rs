//! The [`Source`] abstraction and the adapters that feed it.
//!
//! A source is a pull-based, single-pass, possibly-infinite producer of
//! values. Everything in this crate consumes and produces sources:
//! in-memory collections come in through [`IterSource`], readers through
//! [`Lines`] and [`Blocks`], directories through [`DirEntries`], numeric
//! ranges through [`StepRange`], and [`Collate`](crate::Collate) itself is a
//! source again, so its output composes into further combinators (including
//! another collation).

use crate::combinators::{Filter, Map};
use crate::error::Error;

mod blocks;
mod dir;
mod lines;
mod range;

pub use blocks::{Blocks, DEFAULT_BLOCK_SIZE};
pub use dir::DirEntries;
pub use lines::{LineOptions, Lines};
pub use range::StepRange;

/// A pull-based producer of values.
///
/// `pull` returns `Ok(Some(value))` for the next element, `Ok(None)` once
/// the source is exhausted, and `Err` when the underlying producer failed.
/// Sources are single-pass: there is no rewinding, and implementations are
/// expected to keep reporting `Ok(None)` once exhausted.
pub trait Source {
    /// Type of the produced elements.
    type Item;

    /// Pulls the next element out of the source.
    ///
    /// # Errors
    ///
    /// Propagates the underlying producer's failure. After an error the
    /// source counts as exhausted; implementations in this crate answer
    /// further pulls with `Ok(None)` instead of hitting the dead producer
    /// again.
    fn pull(&mut self) -> Result<Option<Self::Item>, Error>;

    /// Lazily transforms every element with `transform`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_collate::{from_iter, Source};
    ///
    /// let mut doubled = from_iter([1, 2, 3]).map(|x| x * 2);
    /// assert_eq!(doubled.pull()?, Some(2));
    /// # Ok::<(), seq_collate::Error>(())
    /// ```
    fn map<F, U>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, transform)
    }

    /// Lazily keeps only the elements satisfying `predicate`.
    ///
    /// A single pull keeps consuming the underlying source until a matching
    /// element (or the end) is found.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Stops pulling at the first element that doesn't; an empty source is
    /// all-satisfying.
    ///
    /// # Errors
    ///
    /// Propagates the first upstream failure encountered while deciding.
    fn all<P>(&mut self, mut predicate: P) -> Result<bool, Error>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.pull()? {
            if !predicate(&item) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns `true` if any element satisfies `predicate`.
    ///
    /// Stops pulling at the first element that does.
    ///
    /// # Errors
    ///
    /// Propagates the first upstream failure encountered while deciding.
    fn any<P>(&mut self, mut predicate: P) -> Result<bool, Error>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.pull()? {
            if predicate(&item) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns `true` if no element satisfies `predicate`.
    ///
    /// # Errors
    ///
    /// Propagates the first upstream failure encountered while deciding.
    fn none<P>(&mut self, predicate: P) -> Result<bool, Error>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Ok(!self.any(predicate)?)
    }

    /// Adapts the source into an [`Iterator`] of `Result`s.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_collate::{LineOptions, Lines, Source};
    ///
    /// let reader = std::io::Cursor::new("b\na\n");
    /// let mut options = LineOptions::default();
    /// options.ignore_newlines = true;
    /// for line in Lines::new(reader, options).items() {
    ///     println!("{}", line?);
    /// }
    /// # Ok::<(), seq_collate::Error>(())
    /// ```
    fn items(self) -> Items<Self>
    where
        Self: Sized,
    {
        Items(self)
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    type Item = S::Item;

    #[inline]
    fn pull(&mut self) -> Result<Option<Self::Item>, Error> {
        (**self).pull()
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    type Item = S::Item;

    #[inline]
    fn pull(&mut self) -> Result<Option<Self::Item>, Error> {
        (**self).pull()
    }
}

/// Source over any [`IntoIterator`]. Never fails.
///
/// This is how plain collections enter the crate; see [`from_iter`].
#[derive(Debug, Clone)]
pub struct IterSource<I>(I);

impl<I: Iterator> IterSource<I> {
    /// Wraps `collection` in a source.
    pub fn new<T>(collection: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self(collection.into_iter())
    }
}

impl<I: Iterator> Source for IterSource<I> {
    type Item = I::Item;

    #[inline]
    fn pull(&mut self) -> Result<Option<Self::Item>, Error> {
        Ok(self.0.next())
    }
}

/// Wraps any [`IntoIterator`] in an infallible [`Source`].
///
/// # Examples
///
/// ```
/// use seq_collate::{from_iter, Source};
///
/// let mut source = from_iter(vec!["a", "b"]);
/// assert_eq!(source.pull()?, Some("a"));
/// assert_eq!(source.pull()?, Some("b"));
/// assert_eq!(source.pull()?, None);
/// # Ok::<(), seq_collate::Error>(())
/// ```
pub fn from_iter<I: IntoIterator>(collection: I) -> IterSource<I::IntoIter> {
    IterSource(collection.into_iter())
}

/// Iterator adapter returned by [`Source::items`].
#[derive(Debug, Clone)]
pub struct Items<S>(S);

impl<S: Source> Iterator for Items<S> {
    type Item = Result<S::Item, Error>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pull().transpose()
    }
}
