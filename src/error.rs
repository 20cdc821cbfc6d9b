//!
//! Defines error types for vector clock decoding and reconstruction.

use crate::primitives::ActorId;

/// Errors produced while decoding the binary clock format.
///
/// Each field error covers both a varint that runs off the end of the input
/// and one whose value does not fit in 64 bits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The header byte has bits set other than the timestamp flag.
    #[error("bad vclock header: {0:#04x}")]
    BadHeader(u8),
    /// The counter varint is truncated, oversized, or nothing follows it.
    #[error("bad vclock data (counter)")]
    BadCounter,
    /// The timestamp varint is truncated or oversized.
    #[error("bad vclock data (timestamp)")]
    BadTimestamp,
    /// The actor id length varint is truncated or oversized.
    #[error("bad vclock data (id length)")]
    BadIdLength,
    /// The actor id length claims more bytes than the input holds.
    #[error("bad vclock data (id): declared {declared} bytes, {remaining} remaining")]
    BadIdBytes {
        /// Length announced by the id length field
        declared: u64,
        /// Bytes actually left in the input
        remaining: usize,
    },
}

/// Errors produced when rebuilding a clock from its structured representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReprError {
    /// The same actor appears in more than one entry.
    #[error("duplicate actor in vclock: {0}")]
    DuplicateActor(ActorId),
    /// An entry carries a zero counter; absent actors are simply left out.
    #[error("zero counter for actor {0}")]
    ZeroCounter(ActorId),
}
