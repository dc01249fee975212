/// Byte reflection lookup table.
///
/// Entry `b` holds `b` with its eight bits in reverse order. CRC variants with
/// RefIn set push every input byte through this table before it reaches the
/// shift register. Built at compile time with the same shift loop as
/// [`reverse_bits`](crate::reverse_bits), so there is nothing to initialize at
/// runtime.
pub const REFLECT_BYTE_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0usize;
    while i < 256 {
        let mut byte = i as u8;
        let mut reflected = 0u8;
        let mut bit = 8u32;
        while bit > 0 {
            bit -= 1;
            reflected |= (byte & 1) << bit;
            byte >>= 1;
        }
        table[i] = reflected;
        i += 1;
    }
    table
};

/// Reverses the bit order of a single byte.
///
/// # Examples
///
/// ```
/// use bitreflect::utils::reflect_byte;
///
/// assert_eq!(reflect_byte(0x01), 0x80);
/// assert_eq!(reflect_byte(0x31), 0x8C);
/// ```
#[inline]
pub fn reflect_byte(byte: u8) -> u8 {
    REFLECT_BYTE_TABLE[byte as usize]
}

/// Reflects every byte of `data` in place.
///
/// Byte order is preserved; only the bits inside each byte are reversed.
///
/// # Examples
///
/// ```
/// use bitreflect::utils::reflect_bytes;
///
/// let mut data = *b"12";
/// reflect_bytes(&mut data);
/// assert_eq!(data, [0x8C, 0x4C]);
/// ```
pub fn reflect_bytes(data: &mut [u8]) {
    for byte in data.iter_mut() {
        *byte = reflect_byte(*byte);
    }
}
