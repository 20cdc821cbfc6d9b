//!
//! Dense binary format for vector clocks.
//!
//! ```text
//! [header:1] ( varint counter [varint last_update] varint id_len id_bytes )*
//! ```
//!
//! The header has a single defined bit, `0x01`, set when the clock carries
//! update times; every entry then includes its `last_update`. All other bits
//! are reserved and must be zero. The empty clock encodes to no bytes at all.
//! Entries are written in storage order. Integers are big-endian varints:
//! 7 bits per byte, high bit set on every byte but the last.

pub(crate) mod varint;

use crate::error::DecodeError;
use crate::time::VClock;
use varint::VarintError;

/// Header bit announcing per-entry update times.
pub const HEADER_TIMESTAMPS: u8 = 0x01;

/// Encodes `vc` into its binary form.
pub fn encode(vc: &VClock) -> Vec<u8> {
    if vc.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(encoded_len(vc));
    out.push(if vc.has_timestamps { HEADER_TIMESTAMPS } else { 0 });
    for entry in &vc.entries {
        varint::encode(entry.counter, &mut out);
        if vc.has_timestamps {
            varint::encode(entry.last_update, &mut out);
        }
        varint::encode(entry.actor.len() as u64, &mut out);
        out.extend_from_slice(entry.actor.as_bytes());
    }
    out
}

/// Exact size of `encode(vc)`.
pub fn encoded_len(vc: &VClock) -> usize {
    if vc.is_empty() {
        return 0;
    }
    let body: usize = vc
        .entries
        .iter()
        .map(|e| {
            let time = if vc.has_timestamps { varint::encoded_len(e.last_update) } else { 0 };
            varint::encoded_len(e.counter) + time + varint::encoded_len(e.actor.len() as u64) + e.actor.len()
        })
        .sum();
    body + 1
}

/// Rebuilds a clock from bytes produced by [`encode`].
///
/// Entries are inserted the way updates are, so an actor that appears twice
/// has its counters summed rather than being rejected.
pub fn decode(bytes: &[u8]) -> Result<VClock, DecodeError> {
    let mut vc = VClock::new();
    let Some((&header, _)) = bytes.split_first() else {
        return Ok(vc);
    };
    if header & !HEADER_TIMESTAMPS != 0 {
        tracing::debug!(header, "rejecting vclock with reserved header bits");
        return Err(DecodeError::BadHeader(header));
    }
    vc.has_timestamps = header & HEADER_TIMESTAMPS != 0;

    let mut reader = Reader { buf: bytes, pos: 1 };
    while !reader.at_end() {
        let entry_start = reader.pos;
        reader.read_entry(&mut vc).inspect_err(|err| {
            tracing::debug!(offset = entry_start, error = %err, "rejecting malformed vclock entry");
        })?;
    }
    Ok(vc)
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl Reader<'_> {
    fn at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn varint(&mut self, on_error: DecodeError) -> Result<u64, DecodeError> {
        match varint::decode(&self.buf[self.pos..]) {
            Ok((value, len)) => {
                self.pos += len;
                Ok(value)
            }
            Err(VarintError::NotEnoughBytes | VarintError::Overflow) => Err(on_error),
        }
    }

    fn read_entry(&mut self, vc: &mut VClock) -> Result<(), DecodeError> {
        let counter = self.varint(DecodeError::BadCounter)?;
        // A counter with nothing after it, or a zero counter, is not an entry.
        if counter == 0 || self.at_end() {
            return Err(DecodeError::BadCounter);
        }
        let when = if vc.has_timestamps { self.varint(DecodeError::BadTimestamp)? } else { 0 };
        let id_len = self.varint(DecodeError::BadIdLength)?;

        let remaining = self.remaining();
        let id_len = match usize::try_from(id_len) {
            Ok(n) if n <= remaining => n,
            _ => return Err(DecodeError::BadIdBytes { declared: id_len, remaining }),
        };
        let actor = &self.buf[self.pos..self.pos + id_len];
        self.pos += id_len;

        vc.update_item(actor, counter, when);
        Ok(())
    }
}

impl VClock {
    /// Binary form of this clock; see the [`codec`](crate::codec) module.
    pub fn to_bytes(&self) -> Vec<u8> {
        encode(self)
    }

    /// Reads a clock back from [`VClock::to_bytes`] output.
    pub fn from_bytes(bytes: &[u8]) -> Result<VClock, DecodeError> {
        decode(bytes)
    }
}

impl TryFrom<&[u8]> for VClock {
    type Error = DecodeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        decode(bytes)
    }
}
