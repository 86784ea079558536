//! This module applies the fixed-width kernel across ordered sequences.
//!
//! The element count is never written. A fixed-width sequence of `n` elements of
//! width `W` is exactly `n * W/8` bytes back to back, and the reader has to know
//! `n` from somewhere else.

use crate::cursor::{ByteReader, ByteSink};
use crate::error::Result;
use crate::kernels::fixed;
use crate::traits::Integral;
use crate::utils::native_le_bytes;

/// Fixed-width encodes every element of `values` in order and returns the final
/// sink position.
pub fn encode_n<T, I, S>(values: I, sink: &mut S) -> usize
where
    T: Integral,
    I: IntoIterator<Item = T>,
    S: ByteSink + ?Sized,
{
    for value in values {
        fixed::encode(value, sink);
    }
    sink.position()
}

/// Same bytes as `encode_n`, but copies the slice in one go where the native
/// layout already matches the wire format.
pub fn encode_slice<T, S>(values: &[T], sink: &mut S) -> usize
where
    T: Integral,
    S: ByteSink + ?Sized,
{
    match native_le_bytes(values) {
        Some(bytes) => {
            sink.put_slice(bytes);
            sink.position()
        }
        None => encode_n(values.iter().copied(), sink),
    }
}

/// Decodes exactly `n` fixed-width elements, appending them to `out` in order.
///
/// Stops at the first element that fails with `TruncatedInput`. Elements decoded
/// before that point stay in `out`, but the call as a whole has failed and the
/// reader is not advanced.
pub fn decode_n<T: Integral>(
    reader: &mut ByteReader<'_>,
    n: usize,
    out: &mut Vec<T>,
) -> Result<()> {
    let mut probe = *reader;
    out.reserve(n.min(probe.remaining() / T::BYTES));

    for _ in 0..n {
        out.push(fixed::decode(&mut probe)?);
    }

    log_metric!(
        "kernel" = "sequence::decode_n",
        "type" = std::any::type_name::<T>(),
        "elements" = n,
        "bytes" = probe.position() - reader.position()
    );

    *reader = probe;
    Ok(())
}
