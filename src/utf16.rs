//! Decoding and encoding of a single scalar value as UTF-16.

use core::mem;

use byteorder::ByteOrder;

use crate::utilities::{
    MAX_SCALAR, decode_surrogates, is_leading_surrogate, is_trailing_surrogate,
};
use crate::{Decoded, Error, Result};

/// Decodes one scalar, possibly a surrogate pair, from the front of `cursor`.
///
/// On success `cursor` is advanced past the consumed code units; on failure it is left as
/// it was.  Unlike [`decode_utf8`](crate::decode_utf8) an empty input is an error.
///
/// # Examples
///
/// ```
/// use unicope::{Decoded, Error, decode_utf16};
///
/// let mut cursor: &[u16] = &[0xD801, 0xDC37, 0x0041];
/// assert_eq!(
///     decode_utf16(&mut cursor),
///     Ok(Decoded { scalar: '\u{10437}', len: 2 })
/// );
/// assert_eq!(decode_utf16(&mut cursor), Ok(Decoded { scalar: 'A', len: 1 }));
/// assert!(cursor.is_empty());
///
/// let mut lone: &[u16] = &[0xDC37];
/// assert_eq!(decode_utf16(&mut lone), Err(Error::UnpairedSurrogate(0xDC37)));
/// ```
pub fn decode_utf16(cursor: &mut &[u16]) -> Result<Decoded> {
    let units = *cursor;
    let decoded = decode_units(units.len(), |index| units[index])?;
    *cursor = &units[decoded.len..];
    Ok(decoded)
}

/// Decodes one scalar from UTF-16 stored as bytes in the byte order `E`.
///
/// [`Decoded::len`] counts code units, `cursor` is advanced by twice as many bytes.  A
/// dangling odd byte at the end is never consumed.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// use byteorder::{BE, LE};
/// use unicope::decode_utf16_bytes;
///
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut le: &[u8] = b"\x01\xD8\x37\xDC";
/// let mut be: &[u8] = b"\xD8\x01\xDC\x37";
///
/// assert_eq!(decode_utf16_bytes::<LE>(&mut le)?.scalar, '\u{10437}');
/// assert_eq!(decode_utf16_bytes::<BE>(&mut be)?.scalar, '\u{10437}');
/// assert!(le.is_empty() && be.is_empty());
/// #     Ok(())
/// # }
/// ```
pub fn decode_utf16_bytes<E: ByteOrder>(cursor: &mut &[u8]) -> Result<Decoded> {
    let bytes = *cursor;
    let decoded = decode_units(bytes.len() / 2, |index| E::read_u16(&bytes[2 * index..]))?;
    *cursor = &bytes[2 * decoded.len..];
    Ok(decoded)
}

#[inline]
fn decode_units(available: usize, unit_at: impl Fn(usize) -> u16) -> Result<Decoded> {
    if available == 0 {
        return Err(Error::Truncated {
            needed: 1,
            available,
        });
    }

    let first = unit_at(0);
    if is_leading_surrogate(first) {
        if available < 2 {
            return Err(Error::Truncated {
                needed: 2,
                available,
            });
        }
        let second = unit_at(1);
        if !is_trailing_surrogate(second) {
            return Err(Error::UnpairedSurrogate(first));
        }

        // SAFETY: both halves were checked above.
        let scalar = unsafe { decode_surrogates(first, second) };
        return Ok(Decoded { scalar, len: 2 });
    }

    // Only a trailing surrogate without its leading half is left to reject here.
    match char::from_u32(first as u32) {
        Some(scalar) => Ok(Decoded { scalar, len: 1 }),
        None => Err(Error::UnpairedSurrogate(first)),
    }
}

/// Returns the number of code units needed to encode `scalar` as UTF-16.
pub fn len_utf16(scalar: u32) -> Result<usize> {
    match scalar {
        0..0xD800 | 0xE000..0x1_0000 => Ok(1),
        0xD800..=0xDFFF => Err(Error::Surrogate(scalar)),
        0x1_0000..=MAX_SCALAR => Ok(2),
        _ => Err(Error::OutOfRange(scalar)),
    }
}

/// Writes `scalar` as UTF-16 to the front of `cursor`.
///
/// Returns the number of code units written and advances `cursor` past them.  Nothing is
/// written on failure.
pub fn encode_utf16(cursor: &mut &mut [u16], scalar: u32) -> Result<usize> {
    let len = len_utf16(scalar)?;
    if len > cursor.len() {
        return Err(Error::BufferTooSmall {
            needed: len,
            available: cursor.len(),
        });
    }

    let (dst, rest) = mem::take(cursor).split_at_mut(len);
    if len == 1 {
        dst[0] = scalar as u16;
    } else {
        // Supplementary planes break into surrogates.
        let offset = scalar - 0x1_0000;
        dst[0] = 0xD800 | (offset >> 10) as u16;
        dst[1] = 0xDC00 | (offset as u16 & 0x3FF);
    }
    *cursor = rest;

    Ok(len)
}
