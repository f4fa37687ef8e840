//! Single scalar transcoding between UTF-8, UTF-16 and Unicode scalar values.
//!
//! This crate does one thing: move exactly one Unicode scalar value between its UTF-8 bytes,
//! its UTF-16 code units and its numeric value.  There is no string type, nothing is
//! allocated and no state is kept between calls.  The caller owns the buffers and hands in a
//! *cursor*, a mutable reference to the slice that is left to read or write.  On success the
//! cursor is moved past the consumed code units, on failure it is left untouched.
//!
//! ```
//! # use std::error::Error;
//! use unicope::{decode_utf8, encode_utf16};
//!
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let mut input = "h€🦀".as_bytes();
//! let mut buf = [0u16; 8];
//! let mut output = &mut buf[..];
//!
//! while let Some(decoded) = decode_utf8(&mut input) {
//!     encode_utf16(&mut output, decoded?.scalar as u32)?;
//! }
//!
//! let written = 8 - output.len();
//! assert_eq!(&buf[..written], &[0x68, 0x20AC, 0xD83E, 0xDD80]);
//! #     Ok(())
//! # }
//! ```
//!
//! # Validation
//!
//! Decoding is strict.  Overlong UTF-8, encoded surrogates, values above `U+10FFFF`,
//! truncated sequences, bad continuation bytes and unpaired UTF-16 surrogates are all
//! rejected with an [`Error`] naming what went wrong.  Encoding rejects anything that is not a
//! scalar value.  What to do about an error, abort, skip a code unit or substitute
//! `U+FFFD`, is up to the caller.
//!
//! # Fast UTF-8 decoding
//!
//! [`decode_utf8_word`] decodes from a four byte window without branching on the sequence
//! length.  It accepts and rejects exactly what [`decode_utf8`] does; [`decode_utf8_fast`]
//! uses it for everything but the last three bytes of a buffer.
//!
//! # C interface
//!
//! The [`ffi`] module exports the same operations with a C calling convention.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    missing_copy_implementations,
    unused_extern_crates,
    unused_qualifications,
    clippy::all
)]

mod error;
pub mod ffi;
mod utf16;
mod utf8;
mod utilities;

pub use error::{Error, Result};
pub use utf8::{decode_utf8, decode_utf8_fast, decode_utf8_word, encode_utf8, len_utf8};
pub use utf16::{decode_utf16, decode_utf16_bytes, encode_utf16, len_utf16};

/// One successfully decoded scalar value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Decoded {
    /// The scalar value.
    pub scalar: char,
    /// Number of code units it was encoded with.
    pub len: usize,
}

impl Decoded {
    /// Returns `true` if the decoded scalar is `U+0000`.
    ///
    /// A NUL still consumes one code unit, [`Decoded::len`] is `1`.
    #[inline]
    pub const fn is_nul(&self) -> bool {
        self.scalar == '\0'
    }
}
