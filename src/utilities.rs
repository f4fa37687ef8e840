//! Lookup tables and bit helpers shared by the UTF-8 and UTF-16 codecs.

/// Largest Unicode scalar value.
pub(crate) const MAX_SCALAR: u32 = 0x10_FFFF;

/// Sequence length announced by a leading byte, indexed by its top five bits.
///
/// `0` marks a byte that cannot start a sequence: continuation bytes and `0xF8..=0xFF`.
pub(crate) const UTF8_UNIT_CLASS: [u8; 32] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, //
    0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 2, 3, 3, 4, 0,
];

/// Smallest scalar that may be encoded with a given number of bytes.
///
/// Index 0 belongs to invalid leading bytes and is larger than anything four bytes can
/// carry, so an invalid leader always looks overlong.
pub(crate) const UTF8_MIN_SCALAR: [u32; 5] = [0x40_0000, 0, 0x80, 0x800, 0x1_0000];

/// Mask of the value bits of a leading byte, indexed by sequence length.
pub(crate) const UTF8_LEAD_MASK: [u8; 5] = [0x00, 0x7F, 0x1F, 0x0F, 0x07];

/// Mask of the value bits of a continuation byte.
pub(crate) const CONT_MASK: u8 = 0b0011_1111;

/// Marker bits of continuation and leading bytes.
pub(crate) const TAG_CONT: u8 = 0b1000_0000;
pub(crate) const TAG_TWO: u8 = 0b1100_0000;
pub(crate) const TAG_THREE: u8 = 0b1110_0000;
pub(crate) const TAG_FOUR: u8 = 0b1111_0000;

/// Returns the sequence length announced by `lead`, or `0` if it cannot start one.
#[inline]
pub(crate) const fn utf8_class(lead: u8) -> usize {
    UTF8_UNIT_CLASS[(lead >> 3) as usize] as usize
}

#[inline]
pub(crate) const fn is_continuation(byte: u8) -> bool {
    byte & !CONT_MASK == TAG_CONT
}

#[inline]
pub(crate) const fn utf8_acc_cont_byte(scalar: u32, byte: u8) -> u32 {
    (scalar << 6) | (byte & CONT_MASK) as u32
}

#[inline]
pub(crate) const fn is_surrogate(value: u32) -> bool {
    value >> 11 == 0x1B
}

#[inline]
pub(crate) const fn is_leading_surrogate(code_unit: u16) -> bool {
    code_unit & 0xFC00 == 0xD800
}

#[inline]
pub(crate) const fn is_trailing_surrogate(code_unit: u16) -> bool {
    code_unit & 0xFC00 == 0xDC00
}

/// Combines a surrogate pair into the scalar it encodes.
///
/// # Safety
///
/// `leading` must satisfy [`is_leading_surrogate`] and `trailing` must satisfy
/// [`is_trailing_surrogate`].
#[inline]
pub(crate) const unsafe fn decode_surrogates(leading: u16, trailing: u16) -> char {
    let scalar = ((((leading & 0x3FF) as u32) << 10) | (trailing & 0x3FF) as u32) + 0x1_0000;
    // SAFETY: ten bits from each surrogate plus 0x10000 lands in 0x10000..=0x10FFFF.
    unsafe { char::from_u32_unchecked(scalar) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_class() {
        assert_eq!(utf8_class(0x00), 1);
        assert_eq!(utf8_class(0x7F), 1);
        assert_eq!(utf8_class(0x80), 0);
        assert_eq!(utf8_class(0xBF), 0);
        assert_eq!(utf8_class(0xC0), 2);
        assert_eq!(utf8_class(0xDF), 2);
        assert_eq!(utf8_class(0xE0), 3);
        assert_eq!(utf8_class(0xEF), 3);
        assert_eq!(utf8_class(0xF0), 4);
        assert_eq!(utf8_class(0xF7), 4);
        assert_eq!(utf8_class(0xF8), 0);
        assert_eq!(utf8_class(0xFF), 0);
    }

    #[test]
    fn test_is_surrogate() {
        assert!(!is_surrogate(0xD7FF));
        assert!(is_surrogate(0xD800));
        assert!(is_surrogate(0xDBFF));
        assert!(is_surrogate(0xDC00));
        assert!(is_surrogate(0xDFFF));
        assert!(!is_surrogate(0xE000));
    }

    #[test]
    fn test_decode_surrogates() {
        assert_eq!(unsafe { decode_surrogates(0xD801, 0xDC37) }, '\u{10437}');
        assert_eq!(unsafe { decode_surrogates(0xD800, 0xDC00) }, '\u{10000}');
        assert_eq!(unsafe { decode_surrogates(0xDBFF, 0xDFFF) }, '\u{10FFFF}');
    }
}
