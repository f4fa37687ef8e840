//! C-callable entry points.
//!
//! These wrap the typed functions of this crate in the classic calling convention: the
//! cursor is a pointer to a pointer, the scalar is written through an out pointer and the
//! return value is negative on error, `0` when a NUL was decoded and the number of code
//! units consumed or written otherwise.  Which error occurred is not reported.

use core::ffi::c_int;
use core::slice;

use crate::{Decoded, decode_utf8, decode_utf8_word, decode_utf16, encode_utf8};

/// `len` passed to [`utf8_cdec`] for a NUL-terminated string, `(size_t)-1` in C.
pub const NUL_TERMINATED: usize = usize::MAX;

const ERROR: c_int = -1;

#[inline]
fn status(decoded: &Decoded) -> c_int {
    if decoded.is_nul() {
        0
    } else {
        decoded.len as c_int
    }
}

/// Number of bytes [`utf8_cdec`] may look at in a NUL-terminated string.
///
/// # Safety
///
/// `start` must point into a NUL-terminated string.
unsafe fn nul_bounded_len(start: *const u8) -> usize {
    let mut len = 0;
    while len < 4 {
        // SAFETY: every byte up to and including the terminator is readable.
        if unsafe { *start.add(len) } == 0 {
            return len.max(1);
        }
        len += 1;
    }
    len
}

/// Decodes one scalar from a UTF-8 string of `len` bytes.
///
/// Returns `0` without touching `*utf8` or `*c` if `len` is zero.
///
/// # Safety
///
/// `utf8` and `c` must be valid for reads and writes.  `*utf8` must point to at least `len`
/// readable bytes, or to a NUL-terminated string if `len` is [`NUL_TERMINATED`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn utf8_cdec(len: usize, utf8: *mut *const u8, c: *mut u32) -> c_int {
    if len == 0 {
        return 0;
    }

    let start = unsafe { *utf8 };
    let readable = if len == NUL_TERMINATED {
        unsafe { nul_bounded_len(start) }
    } else {
        len.min(4)
    };
    let mut bytes = unsafe { slice::from_raw_parts(start, readable) };

    match decode_utf8(&mut bytes) {
        Some(Ok(decoded)) => unsafe {
            *c = decoded.scalar as u32;
            *utf8 = start.add(decoded.len);
            status(&decoded)
        },
        _ => ERROR,
    }
}

/// Decodes one scalar from a UTF-8 string with at least four readable bytes.
///
/// # Safety
///
/// `utf8` and `c` must be valid for reads and writes and `*utf8` must point to at least
/// four readable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn utf8_cdecf(utf8: *mut *const u8, c: *mut u32) -> c_int {
    let start = unsafe { *utf8 };
    let word = unsafe { &*start.cast::<[u8; 4]>() };

    match decode_utf8_word(word) {
        Ok(decoded) => unsafe {
            *c = decoded.scalar as u32;
            *utf8 = start.add(decoded.len);
            status(&decoded)
        },
        Err(_) => ERROR,
    }
}

/// Encodes `c` as UTF-8 into a buffer of `len` writable bytes.
///
/// # Safety
///
/// `utf8` must be valid for reads and writes and `*utf8` must point to at least `len`
/// writable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn utf8_cenc(len: usize, utf8: *mut *mut u8, c: u32) -> c_int {
    if len == 0 {
        return ERROR;
    }

    let start = unsafe { *utf8 };
    let mut dst = unsafe { slice::from_raw_parts_mut(start, len.min(4)) };

    match encode_utf8(&mut dst, c) {
        Ok(written) => unsafe {
            *utf8 = start.add(written);
            written as c_int
        },
        Err(_) => ERROR,
    }
}

/// Decodes one scalar from a UTF-16 string of `len` code units.
///
/// # Safety
///
/// `utf16` and `c` must be valid for reads and writes.  `*utf16` must be aligned and point
/// to at least `len` readable code units.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn utf16_cdec(len: usize, utf16: *mut *const u16, c: *mut u32) -> c_int {
    if len == 0 {
        return ERROR;
    }

    let start = unsafe { *utf16 };
    let mut units = unsafe { slice::from_raw_parts(start, len.min(2)) };

    match decode_utf16(&mut units) {
        Ok(decoded) => unsafe {
            *c = decoded.scalar as u32;
            *utf16 = start.add(decoded.len);
            status(&decoded)
        },
        Err(_) => ERROR,
    }
}
