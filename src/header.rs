use crate::checksum::checksum;
use crate::error::DecodeError;

type Result<T> = core::result::Result<T, DecodeError>;

// --- Constants ---

/// Size of the fixed header preceding every payload.
pub const HEADER_SIZE: usize = 16;

/// ASCII "LZG".
const MAGIC: [u8; 3] = *b"LZG";

/// Offsets of the big-endian fields inside the fixed header.
const DECODED_SIZE_OFFSET: usize = 3;
const ENCODED_SIZE_OFFSET: usize = 7;
const CHECKSUM_OFFSET: usize = 11;
const METHOD_OFFSET: usize = 15;

/// Number of marker bytes that open an LZG1 payload.
const MARKER_COUNT: usize = 4;

/// Payload encoding selected by the method byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Method {
    /// Payload is stored verbatim.
    Copy = 0,
    /// Payload is an LZG1 token stream.
    Lzg1 = 1,
}

impl TryFrom<u8> for Method {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Copy),
            1 => Ok(Self::Lzg1),
            other => Err(DecodeError::UnknownMethod(other)),
        }
    }
}

/// The token type a marker byte introduces inside an LZG1 payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Marker 1: 3-byte token, offsets from 2056 up.
    Distant,
    /// Marker 2: 2-byte token, offsets 8..=2055.
    Medium,
    /// Marker 3: 1-byte token, lengths 3..=6 at offsets 8..=71.
    Short,
    /// Marker 4: 1-byte token, offsets 1..=8.
    Near,
}

/// The four marker bytes stored right after the header of an LZG1 buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSet {
    pub distant: u8,
    pub medium: u8,
    pub short: u8,
    pub near: u8,
}

impl MarkerSet {
    #[must_use]
    pub const fn new(distant: u8, medium: u8, short: u8, near: u8) -> Self {
        Self {
            distant,
            medium,
            short,
            near,
        }
    }

    /// Resolves `byte` against the marker table. `None` means a literal.
    #[inline]
    #[must_use]
    pub const fn classify(&self, byte: u8) -> Option<Marker> {
        if byte == self.distant {
            Some(Marker::Distant)
        } else if byte == self.medium {
            Some(Marker::Medium)
        } else if byte == self.short {
            Some(Marker::Short)
        } else if byte == self.near {
            Some(Marker::Near)
        } else {
            None
        }
    }

    /// The markers in stream order.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; MARKER_COUNT] {
        [self.distant, self.medium, self.short, self.near]
    }
}

/// A validated LZG header.
///
/// Produced by [`Header::parse`], which only succeeds once the magic,
/// checksum and method have all been verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub method: Method,
    /// Present exactly when `method` is [`Method::Lzg1`].
    pub markers: Option<MarkerSet>,
    /// Offset of the first payload byte: 16 for copy, 20 for LZG1.
    pub payload_start: usize,
    pub checksum: u32,
    /// Declared size of the decoded data. Informational only.
    pub decoded_size: u32,
    /// Declared size of everything after the header. Informational only.
    pub encoded_size: u32,
}

impl Header {
    /// Validates the header of `input`.
    ///
    /// Steps run in order and the first failure is returned: length and
    /// magic, checksum over `input[16..]`, method byte, then (LZG1 only) the
    /// presence of the marker table.
    pub fn parse(input: &[u8]) -> Result<Self> {
        if input.len() < HEADER_SIZE || input[..MAGIC.len()] != MAGIC {
            return Err(DecodeError::BadMagic);
        }

        let expected = read_u32_be(input, CHECKSUM_OFFSET);
        let computed = checksum(&input[HEADER_SIZE..]);
        if computed != expected {
            return Err(DecodeError::ChecksumMismatch { expected, computed });
        }

        let method = Method::try_from(input[METHOD_OFFSET])?;

        let (markers, payload_start) = match method {
            Method::Copy => (None, HEADER_SIZE),
            Method::Lzg1 => {
                let table = input
                    .get(HEADER_SIZE..HEADER_SIZE + MARKER_COUNT)
                    .ok_or(DecodeError::CorruptStream {
                        position: HEADER_SIZE,
                    })?;
                let markers = MarkerSet::new(table[0], table[1], table[2], table[3]);
                (Some(markers), HEADER_SIZE + MARKER_COUNT)
            }
        };

        Ok(Self {
            method,
            markers,
            payload_start,
            checksum: expected,
            decoded_size: read_u32_be(input, DECODED_SIZE_OFFSET),
            encoded_size: read_u32_be(input, ENCODED_SIZE_OFFSET),
        })
    }
}

/// Reads a big-endian `u32` at `offset`. The caller guarantees 4 bytes are present.
#[inline]
fn read_u32_be(input: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        input[offset],
        input[offset + 1],
        input[offset + 2],
        input[offset + 3],
    ])
}
