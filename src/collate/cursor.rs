use std::mem;

use crate::error::Error;
use crate::source::Source;

/// A source plus one eagerly pulled element of lookahead.
///
/// A cursor exists only while it has a head: [`Cursor::prime`] answers
/// `None` for an already-empty source, and the engine removes a cursor the
/// moment its source runs dry. `head` is always the next unconsumed element
/// of `source`, so no cursor ever buffers more than one element.
#[derive(Debug)]
pub(crate) struct Cursor<S: Source> {
    head: S::Item,
    source: S,
}

impl<S: Source> Cursor<S> {
    /// Wraps `source`, pulling its first element.
    ///
    /// # Errors
    ///
    /// Propagates the source's failure to produce that first element; the
    /// source is dropped with it.
    pub(crate) fn prime(mut source: S) -> Result<Option<Self>, Error> {
        Ok(source.pull()?.map(|head| Self { head, source }))
    }

    #[inline]
    pub(crate) fn head(&self) -> &S::Item {
        &self.head
    }

    /// Pulls the next element into the lookahead slot, handing back the
    /// previous head.
    ///
    /// `Ok(None)` once the source is exhausted; the final head stays in
    /// place for [`into_head`](Self::into_head). On `Err` the head is
    /// likewise untouched, so the element owed to the caller survives the
    /// failure.
    pub(crate) fn advance(&mut self) -> Result<Option<S::Item>, Error> {
        Ok(self
            .source
            .pull()?
            .map(|next| mem::replace(&mut self.head, next)))
    }

    /// Consumes the cursor, releasing its head element.
    #[inline]
    pub(crate) fn into_head(self) -> S::Item {
        self.head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::from_iter;
    use crate::test_util::Flaky;

    #[test]
    fn prime_skips_empty_sources() {
        assert!(Cursor::prime(from_iter(Vec::<i32>::new()))
            .unwrap()
            .is_none());
    }

    #[test]
    fn prime_reports_a_failing_first_pull() {
        assert!(Cursor::prime(Flaky::new(Vec::<i32>::new())).is_err());
    }

    #[test]
    fn advance_walks_the_source() {
        let mut cursor = Cursor::prime(from_iter([1, 2, 3])).unwrap().unwrap();
        assert_eq!(cursor.head(), &1);
        assert_eq!(cursor.advance().unwrap(), Some(1));
        assert_eq!(cursor.head(), &2);
        assert_eq!(cursor.advance().unwrap(), Some(2));
        assert_eq!(cursor.advance().unwrap(), None);
        // the final element is still owed to the caller
        assert_eq!(cursor.into_head(), 3);
    }

    #[test]
    fn advance_failure_keeps_the_head() {
        let mut cursor = Cursor::prime(Flaky::new(vec![1])).unwrap().unwrap();
        assert_eq!(cursor.head(), &1);
        assert!(cursor.advance().is_err());
        assert_eq!(cursor.into_head(), 1);
    }
}
