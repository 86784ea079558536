//! This module contains the pure, stateless kernels for the fixed-width
//! little-endian integer form.
//!
//! A value of width `W` is always exactly `W/8` bytes, least-significant byte
//! first. Nothing else is written: no tag, no length. It is fully panic-free.

use num_traits::Zero;

use crate::cursor::{ByteReader, ByteSink};
use crate::error::{truncated, Result};
use crate::traits::{Integral, UnsignedBits};

//==================================================================================
// 1. Public API for Single-Value Operations
//==================================================================================

/// Size of the fixed-width encoding of `T`, in bytes.
#[inline]
pub const fn encoded_len<T: Integral>() -> usize {
    T::BYTES
}

/// Writes `value` as `T::BYTES` little-endian bytes and returns the sink
/// position after the last byte.
pub fn encode<T, S>(value: T, sink: &mut S) -> usize
where
    T: Integral,
    S: ByteSink + ?Sized,
{
    let bits = value.to_unsigned();
    for i in 0..T::BYTES {
        // Shift is at most W - 8, so it never reaches the width.
        sink.put_u8((bits >> (8 * i)).low_byte());
    }
    sink.position()
}

/// Encodes a single value into a fresh buffer.
pub fn encode_to_vec<T: Integral>(value: T) -> Vec<u8> {
    let mut out = Vec::with_capacity(T::BYTES);
    encode(value, &mut out);
    out
}

/// Reads one `T` from `reader`.
///
/// Fails with `TruncatedInput` as soon as a required byte lies at or past the
/// end bound. On failure the reader is left untouched.
pub fn decode<T: Integral>(reader: &mut ByteReader<'_>) -> Result<T> {
    let mut probe = *reader;
    let mut bits = T::Unsigned::zero();

    for i in 0..T::BYTES {
        let byte = probe
            .next_byte()
            .ok_or_else(|| truncated("fixed::decode", reader.position(), T::BYTES - i))?;
        bits = bits | (T::Unsigned::from_byte(byte) << (8 * i));
    }

    *reader = probe;
    Ok(T::from_unsigned(bits))
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn test_fixed_layout_is_little_endian() {
        assert_eq!(encode_to_vec(0x0102_0304u32), vec![0x04, 0x03, 0x02, 0x01]);
        assert_eq!(encode_to_vec(-2i16), vec![0xFE, 0xFF]);
        assert_eq!(encode_to_vec(0xABu8), vec![0xAB]);
        assert_eq!(encode_to_vec(1u64), vec![1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_returns_sink_position() {
        let mut sink = vec![0xEEu8; 3];
        assert_eq!(encode(7i32, &mut sink), 7);
        assert_eq!(encode(7u8, &mut sink), 8);
    }

    #[test]
    fn test_fixed_roundtrip_extremes() {
        macro_rules! check {
            ($($t:ty),+) => {
                $(
                    for v in [<$t>::MIN, <$t>::MAX, 0 as $t, 1 as $t] {
                        let bytes = encode_to_vec(v);
                        assert_eq!(bytes.len(), encoded_len::<$t>());
                        let mut reader = ByteReader::new(&bytes);
                        assert_eq!(decode::<$t>(&mut reader).unwrap(), v);
                        assert!(reader.is_exhausted());
                    }
                )+
            };
        }
        check!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);
    }

    #[test]
    fn test_decode_truncated_leaves_reader_untouched() {
        let bytes = encode_to_vec(0xDEAD_BEEFu32);
        let mut reader = ByteReader::new(&bytes[..3]);
        let err = decode::<u32>(&mut reader).unwrap_err();
        assert_eq!(
            err,
            CodecError::TruncatedInput {
                position: 0,
                needed: 1
            }
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_decode_respects_end_bound_not_buffer_length() {
        // The buffer physically holds a full u16, but the window only exposes one byte.
        let bytes = [0x34u8, 0x12];
        let mut reader = ByteReader::with_end(&bytes, 1);
        assert!(decode::<u16>(&mut reader).unwrap_err().is_truncated());

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(decode::<u16>(&mut reader).unwrap(), 0x1234);
    }

    #[test]
    fn test_decode_empty_input() {
        let mut reader = ByteReader::new(&[]);
        let err = decode::<i64>(&mut reader).unwrap_err();
        assert_eq!(
            err,
            CodecError::TruncatedInput {
                position: 0,
                needed: 8
            }
        );
    }
}
