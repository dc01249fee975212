use std::fmt;

use log::debug;

use crate::error::{ReflectError, Result};

/// Largest width accepted by [`reverse_bits`] and [`width_mask`].
pub const MAX_WIDTH: u32 = u64::BITS;

fn check_width(width: u32, max: u32) -> Result<()> {
    if width == 0 || width > max {
        debug!("Rejecting reflection width {} (max {})", width, max);
        return Err(ReflectError::InvalidWidth { width, max });
    }
    Ok(())
}

/// Reverses the low `width` bits of `value`. Caller guarantees `1 <= width <= 64`.
pub(crate) fn reverse_within(value: u64, width: u32) -> u64 {
    debug_assert!((1..=MAX_WIDTH).contains(&width));
    value.reverse_bits() >> (MAX_WIDTH - width)
}

/// Mask of the low `width` bits. Caller guarantees `1 <= width <= 64`.
pub(crate) fn mask_within(width: u32) -> u64 {
    debug_assert!((1..=MAX_WIDTH).contains(&width));
    u64::MAX >> (MAX_WIDTH - width)
}

/// Returns a mask with the low `width` bits set.
///
/// Returns error if `width` is 0 or greater than 64.
///
/// Example:
/// ```
/// use bitreflect::width_mask;
///
/// assert_eq!(width_mask(12).unwrap(), 0x0FFF);
/// assert_eq!(width_mask(64).unwrap(), u64::MAX);
/// ```
pub fn width_mask(width: u32) -> Result<u64> {
    check_width(width, MAX_WIDTH)?;
    Ok(mask_within(width))
}

/// Reverses the order of the low `width` bits of `value`.
///
/// Bit `i` of the result is bit `width - 1 - i` of `value`. Input bits at
/// positions `>= width` are ignored and the matching output bits are zero.
/// This is the reflection step CRC parameter sets call RefIn/RefOut.
///
/// Returns [`ReflectError::InvalidWidth`] if `width` is 0 or greater than 64.
///
/// Example:
/// ```
/// use bitreflect::reverse_bits;
///
/// assert_eq!(reverse_bits(0b0000_0001, 8).unwrap(), 0b1000_0000);
/// assert_eq!(reverse_bits(0b100, 3).unwrap(), 0b001);
///
/// // Bits above the width are not read
/// assert_eq!(reverse_bits(0xF0_01, 8).unwrap(), 0x80);
///
/// assert!(reverse_bits(1, 0).is_err());
/// assert!(reverse_bits(1, 65).is_err());
/// ```
pub fn reverse_bits(value: u64, width: u32) -> Result<u64> {
    check_width(width, MAX_WIDTH)?;
    Ok(reverse_within(value, width))
}

/// Width-bounded bit reflection for the fixed-size unsigned integers.
///
/// `reflect` accepts widths up to the bit size of the type, so a `u16`
/// register can be reflected over 12 bits but not over 17.
pub trait Reflect: Sized + Copy {
    /// Bit capacity of the type.
    const BITS: u32;

    /// Reverses the low `width` bits, zeroing everything above them.
    fn reflect(self, width: u32) -> Result<Self>;

    /// Reverses all [`Reflect::BITS`] bits.
    fn reflect_all(self) -> Self;
}

macro_rules! impl_reflect {
    ($($t:ty),*) => {
        $(
            impl Reflect for $t {
                const BITS: u32 = <$t>::BITS;

                fn reflect(self, width: u32) -> Result<Self> {
                    check_width(width, Self::BITS)?;
                    Ok(self.reverse_bits() >> (Self::BITS - width))
                }

                fn reflect_all(self) -> Self {
                    self.reverse_bits()
                }
            }
        )*
    };
}

impl_reflect!(u8, u16, u32, u64);

/// An unsigned value together with the number of its low bits that matter.
///
/// Construction masks the value down to `width` bits, so a `BitField` never
/// carries stray high bits.
///
/// Example:
/// ```
/// use bitreflect::BitField;
///
/// let field = BitField::new(0b1101, 4).unwrap();
/// assert_eq!(field.reversed().value(), 0b1011);
/// assert_eq!(field.to_string(), "1101");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitField {
    value: u64,
    width: u32,
}

impl BitField {
    /// Creates a BitField, discarding bits of `value` above `width`.
    ///
    /// Returns error if `width` is 0 or greater than 64.
    pub fn new(value: u64, width: u32) -> Result<Self> {
        let mask = width_mask(width)?;
        Ok(BitField {
            value: value & mask,
            width,
        })
    }

    /// Returns the masked value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns the number of significant bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the field with its bit order reversed over the same width.
    pub fn reversed(&self) -> Self {
        BitField {
            value: reverse_within(self.value, self.width),
            width: self.width,
        }
    }

    /// Returns bit `index` (0 = least significant), or None past the width.
    pub fn bit(&self, index: u32) -> Option<bool> {
        if index >= self.width {
            return None;
        }
        Some((self.value >> index) & 1 == 1)
    }

    /// True when the bit pattern reads the same in both directions.
    pub fn is_palindrome(&self) -> bool {
        self.reversed() == *self
    }
}

impl fmt::Display for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.value, width = self.width as usize)
    }
}
