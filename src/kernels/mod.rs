//! The codec kernels.
//!
//! - `fixed`: one integer as `W/8` little-endian bytes.
//! - `sequence`: `fixed` over a sequence whose length is known out of band.
//! - `compact`: one integer as 7-bit groups with a continuation bit.
//! - `compact_sequence`: a compact count followed by compact elements.
//!
//! All kernels are stateless. Encoders append to a `ByteSink`; decoders read from a
//! `ByteReader` and only advance it once a whole value (or sequence) has decoded.

pub mod compact;
pub mod compact_sequence;
pub mod fixed;
pub mod sequence;
