//! Read and write positions over byte streams.
//!
//! Decoding walks a `ByteReader`: a borrowed buffer plus a position and an end
//! bound. The end bound is the only limit a decoder ever honours, so a reader can
//! describe a window into a larger buffer and nothing past the window is touched.
//!
//! Encoding appends to anything implementing `ByteSink`.

//==================================================================================
// 1. Output Sink
//==================================================================================

/// An appendable byte destination. Sinks are assumed to be unbounded.
pub trait ByteSink {
    /// Appends a single byte.
    fn put_u8(&mut self, byte: u8);

    /// Appends a run of bytes.
    fn put_slice(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put_u8(byte);
        }
    }

    /// Number of bytes held by the sink, i.e. the position just past the last
    /// byte written.
    fn position(&self) -> usize;
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn put_u8(&mut self, byte: u8) {
        self.push(byte);
    }

    #[inline]
    fn put_slice(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    #[inline]
    fn position(&self) -> usize {
        self.len()
    }
}

//==================================================================================
// 2. Input Reader
//==================================================================================

/// A position-plus-bound view over a borrowed byte buffer.
///
/// `ByteReader` is `Copy`. Kernels decode through a copy and only write it back
/// once the whole value has been read, so a failed decode leaves the caller's
/// reader exactly where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> ByteReader<'a> {
    /// A reader over the whole of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            end: buf.len(),
        }
    }

    /// A reader over `buf[start..end]`. Both bounds are clamped to the buffer, and
    /// `start` is clamped to `end`.
    pub fn with_bounds(buf: &'a [u8], start: usize, end: usize) -> Self {
        let end = end.min(buf.len());
        Self {
            buf,
            pos: start.min(end),
            end,
        }
    }

    /// A reader over `buf[..end]`.
    pub fn with_end(buf: &'a [u8], end: usize) -> Self {
        Self::with_bounds(buf, 0, end)
    }

    /// Offset of the next unread byte within the underlying buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The end bound.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos == self.end
    }

    /// The unread bytes between the position and the end bound.
    pub fn remaining_slice(&self) -> &'a [u8] {
        self.buf.get(self.pos..self.end).unwrap_or(&[])
    }

    /// Takes the next byte, or `None` at the end bound.
    #[inline]
    pub(crate) fn next_byte(&mut self) -> Option<u8> {
        if self.pos >= self.end {
            return None;
        }
        let byte = self.buf.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_stops_at_end_bound() {
        let data = [1u8, 2, 3, 4];
        let mut reader = ByteReader::with_end(&data, 2);
        assert_eq!(reader.next_byte(), Some(1));
        assert_eq!(reader.next_byte(), Some(2));
        assert!(reader.is_exhausted());
        assert_eq!(reader.next_byte(), None);
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn test_bounds_are_clamped() {
        let data = [0u8; 3];
        let reader = ByteReader::with_bounds(&data, 10, 20);
        assert_eq!(reader.position(), 3);
        assert_eq!(reader.end(), 3);
        assert_eq!(reader.remaining(), 0);
        assert!(reader.remaining_slice().is_empty());
    }

    #[test]
    fn test_remaining_slice_is_window() {
        let data = [9u8, 8, 7, 6, 5];
        let reader = ByteReader::with_bounds(&data, 1, 4);
        assert_eq!(reader.remaining_slice(), &[8, 7, 6]);
        assert_eq!(reader.remaining(), 3);
    }

    #[test]
    fn test_vec_sink_position_tracks_length() {
        let mut sink = vec![0xAAu8];
        sink.put_u8(1);
        sink.put_slice(&[2, 3]);
        assert_eq!(sink.position(), 4);
        assert_eq!(sink, vec![0xAA, 1, 2, 3]);
    }
}
