//! # Reflection Primitives
//!
//! This module holds the bit-reversal building blocks that reflected CRC
//! variants depend on:
//!
//! - Width-bounded reversal of a `u64` value
//! - Typed reversal for `u8`/`u16`/`u32`/`u64` via the [`Reflect`] trait
//! - The [`BitField`] value type
//! - A compile-time byte reflection table
//!
//! ## Reversing a value
//!
//! ```rust
//! use bitreflect::utils::reverse_bits;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reflect the CRC-32 polynomial into its LSB-first form
//! let reflected = reverse_bits(0x04C1_1DB7, 32)?;
//! assert_eq!(reflected, 0xEDB8_8320);
//! # Ok(())
//! # }
//! ```
//!
//! ## Reflecting input bytes
//!
//! ```rust
//! use bitreflect::utils::reflect_byte;
//!
//! # fn main() {
//! let data = b"123456789";
//! let reflected: Vec<u8> = data.iter().map(|&b| reflect_byte(b)).collect();
//! assert_eq!(reflected[0], 0x8C);
//! # }
//! ```

/// Width-bounded bit reversal
pub mod bits;

/// Byte reflection lookup table
pub mod table;

// Re-export commonly used items
pub use bits::*;
pub use table::{reflect_byte, reflect_bytes, REFLECT_BYTE_TABLE};
