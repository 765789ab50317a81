//! Implementation of [`Collate`].

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use log::warn;

use crate::comparators::Comparator;
use crate::error::Error;
use crate::source::Source;

mod builder;
mod cursor;

pub use builder::Builder;
use cursor::Cursor;

/// K-way lazy merge of pre-sorted sources.
///
/// Every input is wrapped in a cursor holding exactly one element of
/// lookahead. The cursors are sorted once by their head element at
/// construction; each pull then yields the front head, advances only that
/// cursor, and lets it sink back to its place with adjacent swaps. A source
/// that runs dry is removed and never visited again.
///
/// The caller guarantees each input is non-decreasing under the comparator
/// in use; the collated output is then globally sorted. Equal elements from
/// different sources come out in the order the sources were supplied.
///
/// `Collate` is itself a [`Source`], so collations compose with the
/// combinators and with further collations. It also implements
/// [`Iterator`], yielding `Result`s: a source failure is delivered as an
/// `Err` at the pull boundary (see [`Error`]), after which collation
/// continues over the remaining sources.
pub struct Collate<S: Source, C> {
    active: Vec<Cursor<S>>,
    comparator: C,
    pending: VecDeque<Error>,
}

impl<S, C> fmt::Debug for Collate<S, C>
where
    S: Source + fmt::Debug,
    S::Item: fmt::Debug,
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collate")
            .field("active", &self.active)
            .field("comparator", &self.comparator)
            .field("pending", &self.pending)
            .finish()
    }
}

impl<S, C> Collate<S, C>
where
    S: Source,
    C: Comparator<S::Item>,
{
    pub(crate) fn new<T>(comparator: C, sources: T) -> Self
    where
        T: IntoIterator<Item = S>,
    {
        let sources = sources.into_iter();
        let mut active = Vec::with_capacity(sources.size_hint().0);
        let mut pending = VecDeque::new();
        for source in sources {
            match Cursor::prime(source) {
                Ok(Some(cursor)) => active.push(cursor),
                // an empty input contributes nothing and is never visited
                Ok(None) => {}
                Err(err) => {
                    warn!("dropping source that failed while priming: {err}");
                    pending.push_back(err);
                }
            }
        }
        // stable: sources with equal heads keep the order they came in
        active.sort_by(|a, b| comparator.compare(a.head(), b.head()));
        Self {
            active,
            comparator,
            pending,
        }
    }

    /// Returns a reference to the next element without consuming it.
    ///
    /// `None` once every source is exhausted. A failure queued by an
    /// earlier pull is still reported (as `Err`) before the peeked element
    /// is yielded.
    #[inline]
    pub fn peek(&self) -> Option<&S::Item> {
        self.active.first().map(Cursor::head)
    }

    /// Drains the collation into a [`Vec`].
    ///
    /// # Errors
    ///
    /// Stops at the first failure, dropping the elements collected so far.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_collate::collate;
    ///
    /// let v = collate([vec![1, 3], vec![2, 4]]).try_into_vec()?;
    /// assert_eq!(v, vec![1, 2, 3, 4]);
    /// # Ok::<(), seq_collate::Error>(())
    /// ```
    pub fn try_into_vec(mut self) -> Result<Vec<S::Item>, Error> {
        let mut items = Vec::new();
        while let Some(item) = self.pull()? {
            items.push(item);
        }
        Ok(items)
    }

    /// Lets the front cursor sink to its place after its head changed.
    ///
    /// One adjacent-swap walk is enough, and only because nothing but the
    /// front changed since the last sorted state: every other pair still
    /// holds its order, so the walk stops at the first pair already in
    /// order. Advancing more than one cursor per step would break this.
    fn restore_order(&mut self) {
        let mut i = 0;
        while i + 1 < self.active.len() {
            let ordering = self
                .comparator
                .compare(self.active[i].head(), self.active[i + 1].head());
            if ordering != Ordering::Greater {
                break;
            }
            self.active.swap(i, i + 1);
            i += 1;
        }
    }
}

impl<S, C> Source for Collate<S, C>
where
    S: Source,
    C: Comparator<S::Item>,
{
    type Item = S::Item;

    fn pull(&mut self) -> Result<Option<S::Item>, Error> {
        if let Some(err) = self.pending.pop_front() {
            return Err(err);
        }
        if self.active.is_empty() {
            return Ok(None);
        }
        let item = match self.active[0].advance() {
            Ok(Some(item)) => {
                self.restore_order();
                item
            }
            Ok(None) => self.active.remove(0).into_head(),
            Err(err) => {
                // the failed source is done; its last element is still due
                // now, the failure on the pull after it
                warn!("dropping source that failed mid-collation: {err}");
                self.pending.push_back(err);
                self.active.remove(0).into_head()
            }
        };
        Ok(Some(item))
    }
}

impl<S, C> Iterator for Collate<S, C>
where
    S: Source,
    C: Comparator<S::Item>,
{
    type Item = Result<S::Item, Error>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pull().transpose()
    }
}

// Exhaustion is final: with no cursors left and no queued failures, every
// further pull answers None.
impl<S, C> FusedIterator for Collate<S, C>
where
    S: Source,
    C: Comparator<S::Item>,
{
}
