//! Read-only views of a decoded buffer.
//!
//! [`Decoded`] owns the bytes produced by one [`decode`](crate::decode) call.
//! Its text projections are computed on demand and never re-run the decoder.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::str::Utf8Error;

/// The output of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoded {
    bytes: Vec<u8>,
}

impl Decoded {
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The decoded bytes, unmodified.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Maps every byte to the code point of the same value (ISO-8859-1).
    ///
    /// Borrows when the data is pure ASCII.
    #[must_use]
    pub fn to_latin1_text(&self) -> Cow<'_, str> {
        encoding_rs::mem::decode_latin1(&self.bytes)
    }

    /// Decodes the bytes with the lenient 1/2/3-byte UTF-8 reader used by
    /// historical LZG tools.
    ///
    /// A byte below 0x80 is a code point on its own, a byte in
    /// `0xC0..0xE0` takes one continuation byte, and any other byte takes
    /// two. Continuation bytes are masked, not checked. Values that are not
    /// Unicode scalars, and sequences cut short by the end of the data,
    /// come out as U+FFFD.
    #[must_use]
    pub fn to_utf8_text(&self) -> String {
        let bytes = &self.bytes;
        let mut text = String::with_capacity(bytes.len());
        let mut i = 0;

        while i < bytes.len() {
            let c = bytes[i];
            let (code, width) = if c < 0x80 {
                (Some(u32::from(c)), 1)
            } else if (0xC0..0xE0).contains(&c) {
                let code = continuation(bytes, i + 1)
                    .map(|c2| (u32::from(c & 0x1F) << 6) | c2);
                (code, 2)
            } else {
                let code = continuation(bytes, i + 1)
                    .zip(continuation(bytes, i + 2))
                    .map(|(c2, c3)| (u32::from(c & 0x0F) << 12) | (c2 << 6) | c3);
                (code, 3)
            };

            text.push(
                code.and_then(char::from_u32)
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
            );
            i += width;
        }

        text
    }

    /// Validates the bytes as UTF-8 and borrows them as a `str`.
    pub fn to_utf8_text_strict(&self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(&self.bytes)
    }
}

/// Low six bits of the byte at `index`, if present.
#[inline]
fn continuation(bytes: &[u8], index: usize) -> Option<u32> {
    bytes.get(index).map(|&b| u32::from(b & 0x3F))
}

impl AsRef<[u8]> for Decoded {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Decoded> for Vec<u8> {
    fn from(decoded: Decoded) -> Self {
        decoded.bytes
    }
}
