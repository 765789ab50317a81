//! The error type shared by sources, combinators and [`Collate`](crate::Collate).

use std::io;

/// Error produced while constructing a source or pulling an element from one.
///
/// Failures are never swallowed or retried by this crate: every error
/// surfaces exactly at the construction or pull call that encountered it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A constructor was handed a parameter it cannot work with.
    ///
    /// Returned instead of adjusting the parameter and continuing with
    /// degraded behavior; the caller has to handle the misconfiguration
    /// explicitly.
    #[error("invalid configuration: {0}")]
    Config(&'static str),

    /// An underlying reader or generator failed to produce its next element.
    ///
    /// The failing source counts as exhausted afterwards: adapters in this
    /// crate stop pulling from a dead reader, and
    /// [`Collate`](crate::Collate) removes the source from its working set.
    #[error("failed to pull the next element")]
    Upstream(#[from] io::Error),
}
