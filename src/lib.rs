//! Lazy sequence combinators with a k-way collation core.
//!
//! This crate provides [`Source`], a pull-based abstraction over lazy
//! sequences (in-memory collections, readers, directory listings, numeric
//! ranges), a set of single-pass combinators over it, and [`Collate`]: a
//! k-way lazy merge of pre-sorted sources that yields a globally sorted
//! sequence while buffering exactly one element of lookahead per input.
//!
//! # Quick start
//!
//! ```
//! use seq_collate::collate;
//!
//! let a = vec![1, 3, 5];
//! let b = vec![2, 4, 6];
//! let merged = collate([a, b]).try_into_vec()?;
//! assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
//! # Ok::<(), seq_collate::Error>(())
//! ```
//!
//! Each input must already be sorted under the comparator in use; only the
//! next element of every source is ever considered. Feeding unsorted inputs
//! produces unsorted output (never a crash):
//!
//! ```
//! use seq_collate::collate;
//!
//! let merged = collate([vec![2, 1, 5], vec![4, 3, 6]]).try_into_vec()?;
//! assert_eq!(merged, vec![2, 1, 4, 3, 5, 6]);
//! # Ok::<(), seq_collate::Error>(())
//! ```
//!
//! # Custom comparator
//!
//! Use the [`Builder`] to pick the ordering (min/max by comparison function,
//! by key, or by [`Ord`]). Implement [`Comparator`](comparators::Comparator)
//! for full control.
//!
//! ```
//! use seq_collate::{from_iter, Builder};
//!
//! // Collate by descending value
//! let res = Builder::new([from_iter([5, 3]), from_iter([4, 1])])
//!     .max_by_key(|&x: &i32| x)
//!     .build()
//!     .try_into_vec()?;
//! assert_eq!(res, vec![5, 4, 3, 1]);
//! # Ok::<(), seq_collate::Error>(())
//! ```
//!
//! # Heterogeneous sources
//!
//! Differently-typed sources collate through `Box<dyn Source>`:
//!
//! ```
//! use seq_collate::{from_iter, Builder, Source, StepRange};
//!
//! let sources: Vec<Box<dyn Source<Item = i64>>> = vec![
//!     Box::new(StepRange::new(0, 40, 10)?),
//!     Box::new(from_iter(vec![5, 15, 25])),
//! ];
//! let merged = Builder::new(sources).build().try_into_vec()?;
//! assert_eq!(merged, vec![0, 5, 10, 15, 20, 25, 30, 40]);
//! # Ok::<(), seq_collate::Error>(())
//! ```
//!
//! # Failure handling
//!
//! Pulling is fallible: a source backed by I/O reports its failure as
//! [`Error`] exactly at the pull that encountered it. [`Collate`] drops a
//! failed source (it is never retried) and keeps collating the remaining
//! ones; the failure itself is delivered to the caller on the next pull.
//! Comparators are infallible by signature; a panicking comparator
//! propagates at the triggering pull, and the engine mutates nothing before
//! a comparison completes.
//!
//! # Laziness
//!
//! Everything is pull-driven: no element beyond the one-element lookahead of
//! each live source is computed until demanded, so infinite sources work
//! fine as long as the caller stops pulling. Dropping a [`Collate`] drops
//! every source it owns, releasing readers and file handles exactly once.

pub mod collate;
pub mod combinators;
pub mod comparators;
pub mod error;
pub mod source;

pub use collate::{Builder, Collate};
pub use error::Error;
pub use source::{
    from_iter, Blocks, DirEntries, IterSource, Items, LineOptions, Lines, Source, StepRange,
    DEFAULT_BLOCK_SIZE,
};

mod convenience;
pub use convenience::*;

#[cfg(test)]
pub(crate) mod test_util;

#[doc(hidden)]
#[doc = include_str!("../README.md")]
struct _ReadmeTest;
