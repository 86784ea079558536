//! This file is the root of the `intcodec` Rust crate.
//!
//! `intcodec` turns integers, and ordered sequences of them, into bytes and back
//! using two wire forms:
//!
//! - **fixed-width**: exactly `W/8` bytes, little-endian (`kernels::fixed`,
//!   `kernels::sequence`);
//! - **compact**: 7 data bits per byte with a continuation flag, least-significant
//!   group first (`kernels::compact`, `kernels::compact_sequence`).
//!
//! Neither form carries headers, tags or checksums. Decoding reads through a
//! `ByteReader` whose end bound is never crossed, and the only failure is
//! `CodecError::TruncatedInput`.
//!
//! ```
//! use intcodec::{kernels::compact, ByteReader};
//!
//! let mut buf = Vec::new();
//! compact::encode(300u32, &mut buf);
//! assert_eq!(buf, [0xAC, 0x02]);
//!
//! let mut reader = ByteReader::new(&buf);
//! assert_eq!(compact::decode::<u32>(&mut reader).unwrap(), 300);
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod config;
pub mod cursor;
pub mod error;
pub mod kernels;
pub mod traits;

mod utils;

//==================================================================================
// 2. Re-exports
//==================================================================================
pub use config::CodecConfig;
pub use cursor::{ByteReader, ByteSink};
pub use error::{CodecError, Result};
pub use observability::{init_logging, init_logging_from};
pub use traits::{Integral, UnsignedBits};
