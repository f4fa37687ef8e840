//! Decoding and encoding of a single scalar value as UTF-8.
//!
//! Two decoders live here.  [`decode_utf8`] looks at no more bytes than the input has and
//! checks every condition one after the other.  [`decode_utf8_word`] always reads four bytes
//! and folds all checks into one bit accumulator, see
//! <https://nullprogram.com/blog/2017/10/06/>.  Both accept and reject exactly the same
//! inputs and report the same [`Error`] for them.

use core::mem;

use crate::utilities::{
    CONT_MASK, MAX_SCALAR, TAG_CONT, TAG_FOUR, TAG_THREE, TAG_TWO, UTF8_LEAD_MASK,
    UTF8_MIN_SCALAR, is_continuation, is_surrogate, utf8_acc_cont_byte, utf8_class,
};
use crate::{Decoded, Error, Result};

/// Right shift that drops the unused continuation slots of a four byte word, by length.
const WORD_SHIFT: [u32; 5] = [0, 18, 12, 6, 0];

/// Right shift that drops the continuation checks of unused slots, by length.
const ERROR_SHIFT: [u32; 5] = [0, 6, 4, 2, 0];

/// Expected marker bits of the three continuation slots, two bits each.
const CONT_PATTERN: u32 = 0b10_10_10;

/// Decodes one scalar from the front of `cursor`.
///
/// Returns [`None`] if `cursor` is empty.  On success `cursor` is advanced past the
/// consumed bytes; on failure it is left as it was.
///
/// # Examples
///
/// ```
/// use unicope::{Decoded, decode_utf8};
///
/// let mut cursor = "ä!".as_bytes();
/// let decoded = decode_utf8(&mut cursor).unwrap().unwrap();
///
/// assert_eq!(decoded, Decoded { scalar: 'ä', len: 2 });
/// assert_eq!(cursor, b"!");
/// ```
pub fn decode_utf8(cursor: &mut &[u8]) -> Option<Result<Decoded>> {
    let bytes = *cursor;
    if bytes.is_empty() {
        return None;
    }

    let decoded = decode_checked(bytes).inspect(|decoded| *cursor = &bytes[decoded.len..]);
    Some(decoded)
}

/// Like [`decode_utf8`], but goes through [`decode_utf8_word`] whenever at least four bytes
/// are readable.
///
/// Only the last three bytes of a buffer take the bounds-checked path.
pub fn decode_utf8_fast(cursor: &mut &[u8]) -> Option<Result<Decoded>> {
    let bytes = *cursor;
    let Some(word) = bytes.first_chunk::<4>() else {
        return decode_utf8(cursor);
    };

    let decoded = decode_utf8_word(word).inspect(|decoded| *cursor = &bytes[decoded.len..]);
    Some(decoded)
}

/// Decodes the scalar starting at `word[0]` without branching on its length.
///
/// Bytes past the end of the sequence are read but do not influence the result.
///
/// # Examples
///
/// ```
/// use unicope::{Decoded, Error, decode_utf8_word};
///
/// assert_eq!(
///     decode_utf8_word(&[0xF0, 0x9F, 0xA6, 0x80]),
///     Ok(Decoded { scalar: '🦀', len: 4 })
/// );
/// assert_eq!(
///     decode_utf8_word(&[b'a', 0xFF, 0xFF, 0xFF]),
///     Ok(Decoded { scalar: 'a', len: 1 })
/// );
/// assert_eq!(
///     decode_utf8_word(&[0xC0, 0x80, 0, 0]),
///     Err(Error::Overlong { scalar: 0, len: 2 })
/// );
/// ```
pub fn decode_utf8_word(word: &[u8; 4]) -> Result<Decoded> {
    let len = utf8_class(word[0]);

    // Assemble as if this were a four byte sequence, then shift out the unused slots.
    let mut scalar = ((word[0] & UTF8_LEAD_MASK[len]) as u32) << 18;
    scalar |= ((word[1] & CONT_MASK) as u32) << 12;
    scalar |= ((word[2] & CONT_MASK) as u32) << 6;
    scalar |= (word[3] & CONT_MASK) as u32;
    scalar >>= WORD_SHIFT[len];

    let mut errors = ((scalar > MAX_SCALAR) as u32) << 8;
    errors |= (is_surrogate(scalar) as u32) << 7;
    // An invalid leader has length 0, whose minimum no four byte word reaches.
    errors |= ((scalar < UTF8_MIN_SCALAR[len]) as u32) << 6;
    errors |= ((word[1] >> 6) as u32) << 4;
    errors |= ((word[2] >> 6) as u32) << 2;
    errors |= (word[3] >> 6) as u32;
    errors ^= CONT_PATTERN;
    errors >>= ERROR_SHIFT[len];

    match (errors, char::from_u32(scalar)) {
        (0, Some(scalar)) => Ok(Decoded { scalar, len }),
        _ => Err(diagnose(word)),
    }
}

/// Works out which check a word rejected by [`decode_utf8_word`] failed.
#[cold]
fn diagnose(word: &[u8; 4]) -> Error {
    match decode_checked(word) {
        Err(error) => error,
        Ok(decoded) => unreachable!("{word:02x?} decodes to {decoded:?} but was rejected"),
    }
}

fn decode_checked(bytes: &[u8]) -> Result<Decoded> {
    let lead = bytes[0];
    let len = utf8_class(lead);
    if len == 0 {
        return Err(Error::InvalidLeadingUnit(lead));
    }
    if len > bytes.len() {
        return Err(Error::Truncated {
            needed: len,
            available: bytes.len(),
        });
    }

    let mut scalar = (lead & UTF8_LEAD_MASK[len]) as u32;
    for (offset, &unit) in bytes.iter().enumerate().take(len).skip(1) {
        if !is_continuation(unit) {
            return Err(Error::InvalidContinuation { unit, offset });
        }
        scalar = utf8_acc_cont_byte(scalar, unit);
    }

    if scalar < UTF8_MIN_SCALAR[len] {
        return Err(Error::Overlong { scalar, len });
    }
    match char::from_u32(scalar) {
        Some(scalar) => Ok(Decoded { scalar, len }),
        None if is_surrogate(scalar) => Err(Error::Surrogate(scalar)),
        None => Err(Error::OutOfRange(scalar)),
    }
}

/// Returns the number of bytes needed to encode `scalar` as UTF-8.
///
/// Fails for surrogates and values above `U+10FFFF`.
pub fn len_utf8(scalar: u32) -> Result<usize> {
    match scalar {
        0..0x80 => Ok(1),
        0x80..0x800 => Ok(2),
        0x800..0xD800 | 0xE000..0x1_0000 => Ok(3),
        0xD800..=0xDFFF => Err(Error::Surrogate(scalar)),
        0x1_0000..=MAX_SCALAR => Ok(4),
        _ => Err(Error::OutOfRange(scalar)),
    }
}

/// Writes `scalar` as UTF-8 to the front of `cursor`.
///
/// Returns the number of bytes written and advances `cursor` past them.  Nothing is
/// written if `scalar` is not a scalar value or does not fit.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// use unicope::encode_utf8;
///
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut buf = [0; 8];
/// let mut cursor = &mut buf[..];
///
/// assert_eq!(encode_utf8(&mut cursor, 0x65E5)?, 3);
/// assert_eq!(encode_utf8(&mut cursor, 0x21)?, 1);
/// assert_eq!(cursor.len(), 4);
/// assert!(encode_utf8(&mut cursor, 0xD800).is_err());
///
/// assert_eq!(&buf[..4], "日!".as_bytes());
/// #     Ok(())
/// # }
/// ```
pub fn encode_utf8(cursor: &mut &mut [u8], scalar: u32) -> Result<usize> {
    let len = len_utf8(scalar)?;
    if len > cursor.len() {
        return Err(Error::BufferTooSmall {
            needed: len,
            available: cursor.len(),
        });
    }

    let (dst, rest) = mem::take(cursor).split_at_mut(len);
    match len {
        1 => dst[0] = scalar as u8,
        2 => {
            dst[0] = TAG_TWO | (scalar >> 6) as u8;
            dst[1] = TAG_CONT | (scalar as u8 & CONT_MASK);
        }
        3 => {
            dst[0] = TAG_THREE | (scalar >> 12) as u8;
            dst[1] = TAG_CONT | ((scalar >> 6) as u8 & CONT_MASK);
            dst[2] = TAG_CONT | (scalar as u8 & CONT_MASK);
        }
        _ => {
            dst[0] = TAG_FOUR | (scalar >> 18) as u8;
            dst[1] = TAG_CONT | ((scalar >> 12) as u8 & CONT_MASK);
            dst[2] = TAG_CONT | ((scalar >> 6) as u8 & CONT_MASK);
            dst[3] = TAG_CONT | (scalar as u8 & CONT_MASK);
        }
    }
    *cursor = rest;

    Ok(len)
}
