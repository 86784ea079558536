//! This module applies the compact kernel across ordered sequences.
//!
//! Unlike the fixed-width sequence form, the length travels with the data: a
//! compact `u64` element count followed by that many compact elements.

use crate::config::{CodecConfig, DEFAULT_PREALLOCATE_LIMIT};
use crate::cursor::{ByteReader, ByteSink};
use crate::error::Result;
use crate::kernels::compact;
use crate::traits::Integral;

/// Writes the element count followed by every element, all compact-encoded, and
/// returns the final sink position.
pub fn encode<T, I, S>(values: I, sink: &mut S) -> usize
where
    T: Integral,
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
    S: ByteSink + ?Sized,
{
    let values = values.into_iter();
    compact::encode(values.len() as u64, sink);
    for value in values {
        compact::encode(value, sink);
    }
    sink.position()
}

/// Encodes a sequence into a fresh buffer.
pub fn encode_to_vec<T: Integral>(values: &[T]) -> Vec<u8> {
    let mut out = Vec::new();
    encode(values.iter().copied(), &mut out);
    out
}

/// Decodes a length-prefixed compact sequence, appending the elements to `out`.
///
/// Fails with `TruncatedInput` if the count or any element runs past the end
/// bound. Elements decoded before the failure stay in `out`; the reader is not
/// advanced.
pub fn decode<T: Integral>(reader: &mut ByteReader<'_>, out: &mut Vec<T>) -> Result<()> {
    decode_inner(reader, out, DEFAULT_PREALLOCATE_LIMIT)
}

/// `decode` with the up-front reservation capped by
/// `config.preallocate_limit`.
pub fn decode_with_config<T: Integral>(
    reader: &mut ByteReader<'_>,
    out: &mut Vec<T>,
    config: &CodecConfig,
) -> Result<()> {
    decode_inner(reader, out, config.preallocate_limit)
}

fn decode_inner<T: Integral>(
    reader: &mut ByteReader<'_>,
    out: &mut Vec<T>,
    preallocate_limit: usize,
) -> Result<()> {
    let mut probe = *reader;
    let count: u64 = compact::decode(&mut probe)?;

    // Every element occupies at least one byte, so the remaining input bounds
    // how many can actually follow.
    let hint = usize::try_from(count)
        .unwrap_or(usize::MAX)
        .min(probe.remaining())
        .min(preallocate_limit);
    out.reserve(hint);

    for _ in 0..count {
        out.push(compact::decode(&mut probe)?);
    }

    log_metric!(
        "kernel" = "compact_sequence::decode",
        "type" = std::any::type_name::<T>(),
        "elements" = count,
        "bytes" = probe.position() - reader.position()
    );

    *reader = probe;
    Ok(())
}
