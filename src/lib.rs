#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! vclock-core: compact, mergeable vector clocks.
//!
//! A [`VClock`] records one counter per actor and tells apart clocks that
//! descend from one another from clocks with divergent (concurrent)
//! histories. Clocks can be merged, pruned under a [`TruncatePolicy`], and
//! stored in a dense binary format (see [`codec`]).
//!
//! ```
//! use vclock_core::{Relation, VClock};
//!
//! let mut a = VClock::new();
//! a.update("replica-a", 0);
//!
//! let mut b = a.clone();
//! b.update("replica-b", 0);
//! assert!(a.compare(&b, Relation::DESCENDANT));
//!
//! a.update("replica-a", 0);
//! assert!(a.compare(&b, Relation::CONCURRENT));
//!
//! a.merge(&b);
//! assert!(b.compare(&a, Relation::DESCENDANT));
//!
//! let bytes = a.to_bytes();
//! assert_eq!(VClock::from_bytes(&bytes).unwrap(), a);
//! ```
//!
//! Clocks are plain values with no internal locking; share them as
//! immutable snapshots or behind one mutable owner.

// Actor ids and clock entries.
pub mod primitives;

// OR-able causal relation flags.
pub mod relation;

// Clock state, comparison engine and truncation policy.
pub mod time;

// Binary encoding.
pub mod codec;

// Decoding and reconstruction errors.
pub mod error;

pub use error::{DecodeError, ReprError};
pub use primitives::{ActorId, Entry};
pub use relation::Relation;
pub use time::{TruncatePolicy, VClock};
