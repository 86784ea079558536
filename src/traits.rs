//! This module defines the integer abstraction shared by every kernel.
//!
//! A kernel never works on a signed value directly. It asks the value for its
//! unsigned bit pattern of the same width, does all of its shifting and masking
//! there, and converts back at the end. Two's-complement reinterpretation keeps
//! the bit pattern unchanged, so signed values round-trip for free.

use num_traits::{PrimInt, Unsigned};

/// An unsigned primitive integer viewed as a raw bit pattern.
pub trait UnsignedBits: PrimInt + Unsigned + bytemuck::Pod {
    /// Width of the type in bits.
    const BITS: u32;

    /// The least-significant byte of the pattern.
    fn low_byte(self) -> u8;

    /// Zero-extends a byte into this width.
    fn from_byte(byte: u8) -> Self;

    /// `self << shift`, or zero once the shift reaches the type's width.
    fn shl_or_zero(self, shift: u32) -> Self;
}

/// A fixed-size integer with an unsigned bit-pattern view.
pub trait Integral: Copy + bytemuck::Pod {
    /// The unsigned type of the same width.
    type Unsigned: UnsignedBits;

    /// Encoded size of the fixed-width form, in bytes.
    const BYTES: usize;

    fn to_unsigned(self) -> Self::Unsigned;

    fn from_unsigned(bits: Self::Unsigned) -> Self;
}

macro_rules! impl_unsigned_bits {
    ($($U:ty),+ $(,)?) => {
        $(
            impl UnsignedBits for $U {
                const BITS: u32 = <$U>::BITS;

                #[inline]
                fn low_byte(self) -> u8 {
                    self as u8
                }

                #[inline]
                fn from_byte(byte: u8) -> Self {
                    byte as $U
                }

                #[inline]
                fn shl_or_zero(self, shift: u32) -> Self {
                    <$U>::checked_shl(self, shift).unwrap_or(0)
                }
            }
        )+
    };
}

// Implement the traits for all primitive integer types.
macro_rules! impl_integral_pair {
    ($S:ty, $U:ty) => {
        impl Integral for $U {
            type Unsigned = $U;
            const BYTES: usize = std::mem::size_of::<$U>();

            #[inline]
            fn to_unsigned(self) -> $U {
                self
            }

            #[inline]
            fn from_unsigned(bits: $U) -> Self {
                bits
            }
        }

        impl Integral for $S {
            type Unsigned = $U;
            const BYTES: usize = std::mem::size_of::<$S>();

            #[inline]
            fn to_unsigned(self) -> $U {
                self as $U
            }

            #[inline]
            fn from_unsigned(bits: $U) -> Self {
                bits as $S
            }
        }
    };
}

impl_unsigned_bits!(u8, u16, u32, u64, u128, usize);

impl_integral_pair!(i8, u8);
impl_integral_pair!(i16, u16);
impl_integral_pair!(i32, u32);
impl_integral_pair!(i64, u64);
impl_integral_pair!(i128, u128);
impl_integral_pair!(isize, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_bit_pattern_is_preserved() {
        assert_eq!((-1i8).to_unsigned(), 0xFF);
        assert_eq!(i8::from_unsigned(0x80), i8::MIN);
        assert_eq!((-2i32).to_unsigned(), 0xFFFF_FFFE);
        assert_eq!(i64::from_unsigned(u64::MAX), -1);
    }

    #[test]
    fn test_byte_widths() {
        assert_eq!(<u8 as Integral>::BYTES, 1);
        assert_eq!(<i16 as Integral>::BYTES, 2);
        assert_eq!(<i32 as Integral>::BYTES, 4);
        assert_eq!(<u64 as Integral>::BYTES, 8);
        assert_eq!(<i128 as Integral>::BYTES, 16);
        assert_eq!(<u32 as UnsignedBits>::BITS, 32);
    }

    #[test]
    fn test_shl_or_zero_saturates_at_width() {
        assert_eq!(1u8.shl_or_zero(7), 0x80);
        assert_eq!(1u8.shl_or_zero(8), 0);
        assert_eq!(0x7Fu16.shl_or_zero(14), 0xC000);
        assert_eq!(0x7Fu64.shl_or_zero(70), 0);
    }
}
