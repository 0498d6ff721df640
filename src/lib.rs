#![cfg_attr(not(test), no_std)]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/growvec/0.1.0")]

//! A growable array that reports allocation failure instead of aborting.
//!
//! The central type is [`Vec`], a contiguous buffer of `T` that grows on
//! demand. It differs from `alloc::vec::Vec` in a few deliberate ways:
//!
//! * Running out of memory is never fatal. [`Vec::push`] hands the element
//!   back, [`Vec::reserve`] and [`Vec::resize`] return a [`ReserveError`],
//!   and constructors yield an empty vector. The vector is unchanged after
//!   any failed operation.
//! * Element handling is chosen at compile time by a [`Policy`]: the
//!   default [`Cloned`] works with any `T: Clone`, while [`Bitwise`] (see
//!   [`PodVec`]) grows plain-old-data buffers in place with `realloc`.
//! * Growth follows a [`Growth`] policy, doubling up to a threshold and
//!   then growing by a fixed increment.
//! * Erasure and cursors work with index-like [`Position`]s.
//!
//! ```
//! use growvec::{PodVec, ReserveError};
//!
//! let mut vec = PodVec::<u32>::new();
//! for i in 0..10 {
//!     vec.push(i).unwrap();
//! }
//! assert_eq!(vec.capacity(), 16);
//!
//! let next = vec.erase_range(vec.position_at(2), vec.position_at(8));
//! assert_eq!(vec, [0, 1, 8, 9]);
//! assert_eq!(next.index(), 2);
//!
//! assert_eq!(vec.reserve(1), Err(ReserveError::BelowLength { requested: 1, len: 4 }));
//! ```
//!
//! The [`ostream`] module adds a small chainable formatter for writing
//! padded and rounded values to any [`core::fmt::Write`] sink.
//!
//! # Feature flags
//!
//! * `test-utils` exposes [`AllocBehaviour`] and [`Vec::change_behaviour`]
//!   for injecting allocation failures in downstream tests.
//! * `unstable` enables the nightly-only benchmarks.

extern crate alloc;

mod error;
pub mod growth;
pub mod ostream;
pub mod policy;
pub mod position;
pub mod source;
mod storage;
pub mod vec;

#[cfg(test)]
mod test_utils;

pub use crate::error::ReserveError;
pub use crate::growth::{DefaultGrowth, Growth};
pub use crate::policy::{Bitwise, Cloned, Policy};
pub use crate::position::{Cursor, Position};
pub use crate::vec::{IntoIter, PodVec, Vec};

#[cfg(any(test, feature = "test-utils"))]
pub use crate::storage::AllocBehaviour;
