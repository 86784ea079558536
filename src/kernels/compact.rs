//! This module contains the pure, stateless kernels for the compact (LEB128-style)
//! variable-length integer form.
//!
//! Values are split into 7-bit groups, least-significant group first. Every byte
//! but the last has its high bit set. Signed values are encoded through their
//! unsigned bit pattern, so small negative numbers are large on the wire; callers
//! wanting otherwise should zig-zag first. It is fully panic-free.

use num_traits::{PrimInt, Zero};

use crate::cursor::{ByteReader, ByteSink};
use crate::error::{truncated, Result};
use crate::traits::{Integral, UnsignedBits};

const GROUP_BITS: u32 = 7;
const GROUP_MASK: u8 = 0x7F;
const CONTINUATION_BIT: u8 = 0x80;

//==================================================================================
// 1. Public API for Single-Value Operations
//==================================================================================

/// Number of bytes `encode` will emit for `value`, without encoding it.
pub fn encoded_len<T: Integral>(value: T) -> usize {
    let bits = value.to_unsigned();
    let significant = <T::Unsigned as UnsignedBits>::BITS - bits.leading_zeros();
    (significant.div_ceil(GROUP_BITS) as usize).max(1)
}

/// Writes the compact form of `value` and returns the sink position after the
/// last byte. Always writes at least one byte and never a superfluous trailing
/// group.
pub fn encode<T, S>(value: T, sink: &mut S) -> usize
where
    T: Integral,
    S: ByteSink + ?Sized,
{
    let mask = T::Unsigned::from_byte(GROUP_MASK);
    let mut bits = value.to_unsigned();

    loop {
        let group = (bits & mask).low_byte();
        bits = bits >> GROUP_BITS as usize;
        if bits.is_zero() {
            sink.put_u8(group);
            break;
        }
        sink.put_u8(group | CONTINUATION_BIT);
    }
    sink.position()
}

/// Encodes a single value into a fresh buffer.
pub fn encode_to_vec<T: Integral>(value: T) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(value));
    encode(value, &mut out);
    out
}

/// Reads one compact-encoded `T` from `reader`.
///
/// Decoding stops at the first byte with a clear high bit. Data bits that fall at
/// or beyond the width of `T` are dropped. If the end bound is reached before a
/// terminal byte, fails with `TruncatedInput` and leaves the reader untouched.
pub fn decode<T: Integral>(reader: &mut ByteReader<'_>) -> Result<T> {
    let mut probe = *reader;
    let mut bits = T::Unsigned::zero();
    let mut shift: u32 = 0;

    loop {
        let byte = probe
            .next_byte()
            .ok_or_else(|| truncated("compact::decode", reader.position(), 1))?;

        bits = bits | T::Unsigned::from_byte(byte & GROUP_MASK).shl_or_zero(shift);
        shift = shift.saturating_add(GROUP_BITS);

        if byte & CONTINUATION_BIT == 0 {
            *reader = probe;
            return Ok(T::from_unsigned(bits));
        }
    }
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
