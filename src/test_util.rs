//! Shared helpers for the unit tests.

use std::cell::Cell;
use std::io;
use std::rc::Rc;

use crate::error::Error;
use crate::source::Source;

/// Yields the given items, fails the following pull with a broken-pipe
/// error, then reports exhaustion.
pub(crate) struct Flaky<T> {
    items: std::vec::IntoIter<T>,
    tripped: bool,
}

impl<T> Flaky<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
            tripped: false,
        }
    }
}

impl<T> Source for Flaky<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Option<T>, Error> {
        match self.items.next() {
            Some(item) => Ok(Some(item)),
            None if !self.tripped => {
                self.tripped = true;
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "flaky source").into())
            }
            None => Ok(None),
        }
    }
}

/// Counts how many times the wrapped source was pulled.
pub(crate) struct Counted<S> {
    inner: S,
    pulls: Rc<Cell<usize>>,
}

impl<S> Counted<S> {
    pub(crate) fn new(inner: S) -> (Self, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        (
            Self {
                inner,
                pulls: Rc::clone(&pulls),
            },
            pulls,
        )
    }
}

impl<S: Source> Source for Counted<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Result<Option<S::Item>, Error> {
        self.pulls.set(self.pulls.get() + 1);
        self.inner.pull()
    }
}
