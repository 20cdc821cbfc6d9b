//! Big-endian base-128 integers.
//!
//! Each byte carries 7 bits, most significant group first. The high bit of
//! every byte but the last is set to flag that more bytes follow, and the
//! encoding never starts with an empty group: `0` is `[0x00]`, `127` is
//! `[0x7f]` and `128` is `[0x81, 0x00]`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VarintError {
    /// The input ended before a byte with the high bit clear.
    NotEnoughBytes,
    /// The value does not fit in 64 bits.
    Overflow,
}

/// Number of bytes `value` encodes to.
#[inline]
pub(crate) fn encoded_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}

/// Appends the encoding of `value` to `out`.
pub(crate) fn encode(value: u64, out: &mut Vec<u8>) {
    let len = encoded_len(value);
    for group in (1..len).rev() {
        out.push(((value >> (7 * group)) as u8 & 0x7f) | 0x80);
    }
    out.push(value as u8 & 0x7f);
}

/// Decodes one integer from the front of `buf`, returning it with the
/// number of bytes consumed.
pub(crate) fn decode(buf: &[u8]) -> Result<(u64, usize), VarintError> {
    let mut value: u64 = 0;
    for (i, &byte) in buf.iter().enumerate() {
        if value >> 57 != 0 {
            return Err(VarintError::Overflow);
        }
        value = (value << 7) | u64::from(byte & 0x7f);
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(VarintError::NotEnoughBytes)
}
