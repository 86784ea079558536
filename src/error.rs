// In: src/error.rs

//! This module defines the single, unified error type for the intcodec library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Encoding never fails, so every variant here describes a decode failure. There is
//! only one: a compact run that never terminates before the end bound is reported
//! exactly like a buffer that was cut short.

use thiserror::Error;

/// The result type used by every decode kernel.
pub type Result<T, E = CodecError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The decoder needed more bytes than remain before the reader's end bound.
    ///
    /// `position` is where the failed value started; `needed` is the smallest
    /// number of additional bytes that would have let decoding continue.
    #[error("Unexpected end of input: value at offset {position} needs at least {needed} more byte(s)")]
    TruncatedInput { position: usize, needed: usize },
}

impl CodecError {
    /// Returns `true` if this is a `TruncatedInput` error.
    pub fn is_truncated(&self) -> bool {
        matches!(self, CodecError::TruncatedInput { .. })
    }
}

/// Builds a `TruncatedInput` error and traces which kernel hit the end bound.
pub(crate) fn truncated(kernel: &'static str, position: usize, needed: usize) -> CodecError {
    log::trace!(
        "{}: input ended for value at offset {} (needs {} more byte(s))",
        kernel,
        position,
        needed
    );
    CodecError::TruncatedInput { position, needed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_display_mentions_offset() {
        let err = CodecError::TruncatedInput {
            position: 7,
            needed: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("Unexpected end of input"));
        assert!(msg.contains("offset 7"));
        assert!(err.is_truncated());
    }
}
