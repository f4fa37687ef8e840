//! The error type shared by every codec in this crate.

use thiserror::Error;

/// Why a single scalar could not be decoded or encoded.
///
/// Every variant is `Copy` and carries the offending value, so callers can decide whether
/// to abort, skip a code unit and resynchronise, or substitute `U+FFFD`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The leading code unit announces more code units than the input has left.
    #[error("sequence needs {needed} code units but only {available} are available")]
    Truncated { needed: usize, available: usize },
    /// The first byte can never start a UTF-8 sequence.
    #[error("invalid leading byte {0:#04x}")]
    InvalidLeadingUnit(u8),
    /// A byte after the leading byte is not of the form `0b10xx_xxxx`.
    #[error("byte {unit:#04x} at offset {offset} is not a continuation byte")]
    InvalidContinuation { unit: u8, offset: usize },
    /// The sequence decodes to a value that fits in fewer code units.
    #[error("overlong {len}-byte encoding of U+{scalar:04X}")]
    Overlong { scalar: u32, len: usize },
    /// The value lies in `U+D800..=U+DFFF`.
    #[error("U+{0:04X} is a surrogate code point")]
    Surrogate(u32),
    /// The value is above `U+10FFFF`.
    #[error("{0:#x} is above U+10FFFF")]
    OutOfRange(u32),
    /// A UTF-16 surrogate without its partner.
    #[error("unpaired surrogate {0:#06x}")]
    UnpairedSurrogate(u16),
    /// The destination cannot hold the encoded scalar.
    #[error("encoding needs {needed} code units but only {available} are writable")]
    BufferTooSmall { needed: usize, available: usize },
}

/// Result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::Truncated {
                needed: 3,
                available: 2
            }
            .to_string(),
            "sequence needs 3 code units but only 2 are available"
        );
        assert_eq!(
            Error::InvalidLeadingUnit(0x80).to_string(),
            "invalid leading byte 0x80"
        );
        assert_eq!(
            Error::Overlong {
                scalar: 0,
                len: 2
            }
            .to_string(),
            "overlong 2-byte encoding of U+0000"
        );
        assert_eq!(
            Error::Surrogate(0xD800).to_string(),
            "U+D800 is a surrogate code point"
        );
        assert_eq!(
            Error::UnpairedSurrogate(0xDC00).to_string(),
            "unpaired surrogate 0xdc00"
        );
    }
}
