//! Shared, low-level helpers for moving between typed slices and raw bytes.

use crate::traits::Integral;

/// Views a typed slice as its fixed-width wire bytes without copying.
///
/// Only possible when the target's native layout already is little-endian;
/// returns `None` otherwise and the caller must encode element by element.
#[inline]
pub fn native_le_bytes<T: Integral>(data: &[T]) -> Option<&[u8]> {
    if cfg!(target_endian = "little") {
        Some(bytemuck::cast_slice(data))
    } else {
        None
    }
}
