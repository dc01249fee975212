#![doc(html_root_url = "https://docs.rs/bitreflect/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

//! # bitreflect - Bit Reflection for Checksums
//!
//! `bitreflect` provides the bit-reversal primitive that reflected CRC
//! variants are built on. Many CRC parameter sets (CRC-32/ISO-HDLC,
//! CRC-16/ARC, CRC-64/XZ, ...) process data least-significant bit first,
//! which is expressed as "RefIn" and "RefOut" flags. Both boil down to
//! reversing the order of the low `width` bits of a value, and that has to
//! be bit-exact.
//!
//! The crate does not compute checksums itself. A CRC engine calls into it
//! whenever its parameters ask for reflection.
//!
//! ## Features
//!
//! - Width-bounded reversal of any value up to 64 bits
//! - Explicit [`ReflectError::InvalidWidth`] for widths outside `1..=64`
//! - Typed reversal for `u8`, `u16`, `u32` and `u64`
//! - Compile-time byte reflection table for RefIn processing
//! - [`ReflectConfig`] carrying a CRC's width/RefIn/RefOut settings
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bitreflect = "0.1.0"
//! ```
//!
//! ### Reversing Bits
//!
//! ```rust
//! use bitreflect::reverse_bits;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Only the low 3 bits take part
//!     assert_eq!(reverse_bits(0b100, 3)?, 0b001);
//!
//!     // Reflected form of the CRC-32 polynomial
//!     assert_eq!(reverse_bits(0x04C1_1DB7, 32)?, 0xEDB8_8320);
//!
//!     // Widths outside 1..=64 are rejected
//!     assert!(reverse_bits(1, 0).is_err());
//!     Ok(())
//! }
//! ```
//!
//! ### Applying CRC Reflection Settings
//!
//! ```rust
//! use bitreflect::ReflectConfig;
//!
//! let config = ReflectConfig::CRC32_ISO_HDLC;
//! let input: Vec<u8> = b"123".iter().map(|&b| config.reflect_input_byte(b)).collect();
//! assert_eq!(input, [0x8C, 0x4C, 0xCC]);
//!
//! // Final register, reflected before the output XOR
//! assert_eq!(config.reflect_output_value(0x0000_0001), 0x8000_0000);
//! ```
//!
//! ## Module Overview
//!
//! - `utils`: the reflection primitives
//!   - Width-bounded reversal and masks
//!   - The [`Reflect`] trait and [`BitField`] type
//!   - Byte reflection table
//!
//! - `config`: CRC reflection settings and their text format
//!
//! - `error`: Error handling types and utilities
//!   - [`ReflectError`] covering width and settings failures
//!   - Result type alias for convenience
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: rejected
//! widths and parsed settings at `debug`, ignored settings at `warn`. No
//! logger is installed; that is left to the application.

/// Bit reflection primitives
pub mod utils;

/// CRC reflection settings
pub mod config;

/// Error types and utilities
pub mod error;

pub use config::ReflectConfig;
pub use error::{ReflectError, Result};
pub use utils::{
    reflect_byte, reflect_bytes, reverse_bits, width_mask, BitField, Reflect, MAX_WIDTH,
    REFLECT_BYTE_TABLE,
};
