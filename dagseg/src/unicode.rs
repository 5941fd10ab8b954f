//! UTF-8 decoder producing codepoint records.
use std::error::Error;
use std::fmt;

/// A decoded codepoint together with its position in the source bytes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Rune {
    codepoint: u32,
    byte_offset: usize,
    byte_len: u8,
    char_offset: usize,
}

impl Rune {
    #[inline(always)]
    pub(crate) const fn new(
        codepoint: u32,
        byte_offset: usize,
        byte_len: u8,
        char_offset: usize,
    ) -> Self {
        Self {
            codepoint,
            byte_offset,
            byte_len,
            char_offset,
        }
    }

    /// Gets the codepoint value.
    #[inline(always)]
    pub const fn codepoint(&self) -> u32 {
        self.codepoint
    }

    /// Gets the offset of the first byte in the source.
    #[inline(always)]
    pub const fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Gets the number of bytes, from 1 to 4.
    #[inline(always)]
    pub const fn byte_len(&self) -> usize {
        self.byte_len as usize
    }

    /// Gets the index of this codepoint in the decoded sequence.
    #[inline(always)]
    pub const fn char_offset(&self) -> usize {
        self.char_offset
    }

    /// Checks if the codepoint is in the ASCII range.
    #[inline(always)]
    pub const fn is_ascii(&self) -> bool {
        self.codepoint < 0x80
    }

    /// Checks if the codepoint is one of `0`-`9`.
    #[inline(always)]
    pub const fn is_ascii_digit(&self) -> bool {
        is_ascii_digit(self.codepoint)
    }
}

/// Checks if `codepoint` is one of `0`-`9`. Other Unicode digits are not recognized.
#[inline(always)]
pub const fn is_ascii_digit(codepoint: u32) -> bool {
    0x30 <= codepoint && codepoint <= 0x39
}

/// Reason of a [`DecodeError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeErrorKind {
    /// A multi-byte sequence is cut off by the end of input.
    Truncated,

    /// The byte cannot start a sequence of 1 to 4 bytes.
    InvalidLeadingByte,

    /// A byte following a leading byte is not of the form `10xxxxxx`.
    InvalidContinuation,
}

/// Error used when the input is not decodable as UTF-8.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecodeError {
    offset: usize,
    kind: DecodeErrorKind,
}

impl DecodeError {
    /// Gets the byte offset of the sequence that failed.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Gets the reason.
    pub const fn kind(&self) -> DecodeErrorKind {
        self.kind
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reason = match self.kind {
            DecodeErrorKind::Truncated => "truncated sequence",
            DecodeErrorKind::InvalidLeadingByte => "invalid leading byte",
            DecodeErrorKind::InvalidContinuation => "invalid continuation byte",
        };
        write!(f, "DecodeError: {} at byte {}", reason, self.offset)
    }
}

impl Error for DecodeError {}

/// Returns the sequence length and the payload bits of a leading byte.
#[inline(always)]
const fn leading_class(b: u8) -> Option<(usize, u32)> {
    if b & 0x80 == 0 {
        Some((1, b as u32))
    } else if b & 0xe0 == 0xc0 {
        Some((2, (b & 0x1f) as u32))
    } else if b & 0xf0 == 0xe0 {
        Some((3, (b & 0x0f) as u32))
    } else if b & 0xf8 == 0xf0 {
        Some((4, (b & 0x07) as u32))
    } else {
        None
    }
}

/// Decodes a UTF-8 byte string into codepoint records.
///
/// Only sequences of 1 to 4 bytes are accepted. On failure no partial result is returned.
///
/// # Errors
///
/// [`DecodeError`] is returned when a sequence is truncated, or a leading or continuation
/// byte is malformed.
pub fn decode(bytes: &[u8]) -> Result<Vec<Rune>, DecodeError> {
    let mut runes = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let (len, mut codepoint) = leading_class(bytes[i]).ok_or(DecodeError {
            offset: i,
            kind: DecodeErrorKind::InvalidLeadingByte,
        })?;
        if bytes.len() - i < len {
            return Err(DecodeError {
                offset: i,
                kind: DecodeErrorKind::Truncated,
            });
        }
        for &b in &bytes[i + 1..i + len] {
            if b & 0xc0 != 0x80 {
                return Err(DecodeError {
                    offset: i,
                    kind: DecodeErrorKind::InvalidContinuation,
                });
            }
            codepoint = (codepoint << 6) | (b & 0x3f) as u32;
        }
        runes.push(Rune::new(codepoint, i, len as u8, runes.len()));
        i += len;
    }
    Ok(runes)
}

/// Decodes a UTF-8 byte string into bare codepoint values.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_codepoints(bytes: &[u8]) -> Result<Vec<u32>, DecodeError> {
    Ok(decode(bytes)?.iter().map(Rune::codepoint).collect())
}
