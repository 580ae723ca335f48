use crate::error::DecodeError;
use crate::header::{Header, Marker, MarkerSet, Method};
use crate::output::Decoded;
use alloc::vec::Vec;

type Result<T> = core::result::Result<T, DecodeError>;

// --- Constants ---

/// Maps the 5-bit length code of M1, M2 and M4 tokens to a copy length.
const LENGTH_LUT: [usize; 32] = [
    2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
    27, 28, 29, 35, 48, 72, 128,
];

/// Bits of the first parameter byte holding the length code.
const LENGTH_MASK: u8 = 0x1F;

/// Bits of the first parameter byte carrying the high part of an M1/M2 offset.
const OFFSET_HIGH_MASK: u8 = 0xE0;

/// Smallest offset each token type can express.
const DISTANT_OFFSET_BIAS: usize = 2056;
const MEDIUM_OFFSET_BIAS: usize = 8;
const SHORT_OFFSET_BIAS: usize = 8;

/// Largest output a single payload byte can account for (a 2-byte M4
/// token copying 128 bytes). Caps capacity reservation from the declared size.
const MAX_EXPANSION: usize = 64;

/// Decodes an entire LZG buffer.
///
/// The header is validated first; on success the whole payload is decoded
/// and returned. Nothing is returned on failure.
pub fn decode(input: &[u8]) -> Result<Decoded> {
    let mut output = Vec::new();
    decode_into(input, &mut output)?;
    Ok(Decoded::new(output))
}

/// Decodes an entire LZG buffer, appending the result to `output`.
///
/// Returns the number of bytes appended. Back-references only reach bytes
/// written by this call. On error `output` is restored to its original length.
pub fn decode_into(input: &[u8], output: &mut Vec<u8>) -> Result<usize> {
    let header = Header::parse(input)?;
    let start = output.len();
    let payload_len = input.len() - header.payload_start;

    let heuristic_cap = match header.method {
        Method::Copy => payload_len,
        Method::Lzg1 => (header.decoded_size as usize).min(payload_len.saturating_mul(MAX_EXPANSION)),
    };
    output.reserve(heuristic_cap);

    let result = match header.markers {
        Some(markers) => decode_lzg1_into(input, header.payload_start, markers, output),
        None => {
            decode_copy_into(input, header.payload_start, output);
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(output.len() - start),
        Err(e) => {
            output.truncate(start);
            Err(e)
        }
    }
}

/// Validates the header of `input` and returns the decoded size it declares.
///
/// The value is whatever the encoder wrote; [`decode`] never relies on it.
pub fn decoded_size(input: &[u8]) -> Result<u32> {
    Header::parse(input).map(|header| header.decoded_size)
}

/// Returns the payload of a copy-method buffer verbatim.
#[must_use]
pub fn decode_copy(input: &[u8], payload_start: usize) -> Vec<u8> {
    let mut output = Vec::new();
    decode_copy_into(input, payload_start, &mut output);
    output
}

/// Expands an LZG1 token stream starting at `payload_start`.
pub fn decode_lzg1(input: &[u8], payload_start: usize, markers: MarkerSet) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    decode_lzg1_into(input, payload_start, markers, &mut output)?;
    Ok(output)
}

fn decode_copy_into(input: &[u8], payload_start: usize, output: &mut Vec<u8>) {
    if let Some(payload) = input.get(payload_start..) {
        output.extend_from_slice(payload);
    }
}

/// Main LZG1 loop.
///
/// Every byte is either a literal or one of the four markers. A marker
/// followed by `0` (or by the end of input) stands for itself; otherwise the
/// following byte(s) encode a length/offset pair into the output so far.
fn decode_lzg1_into(
    input: &[u8],
    payload_start: usize,
    markers: MarkerSet,
    output: &mut Vec<u8>,
) -> Result<()> {
    let history_start = output.len();
    let mut in_pos = payload_start;
    let end = input.len();

    while in_pos < end {
        let token_pos = in_pos;
        let symbol = input[in_pos];
        in_pos += 1;

        let Some(marker) = markers.classify(symbol) else {
            output.push(symbol);
            continue;
        };

        // A marker as the final byte reads its parameter as 0.
        let b = input.get(in_pos).copied().unwrap_or(0);
        in_pos += 1;

        if b == 0 {
            output.push(symbol);
            continue;
        }

        let (length, offset) = match marker {
            Marker::Distant => {
                let b2 = next_byte(input, &mut in_pos, token_pos)?;
                let b3 = next_byte(input, &mut in_pos, token_pos)?;
                let offset = ((usize::from(b & OFFSET_HIGH_MASK) << 11)
                    | (usize::from(b2) << 8)
                    | usize::from(b3))
                    + DISTANT_OFFSET_BIAS;
                (length_code(b), offset)
            }
            Marker::Medium => {
                let b2 = next_byte(input, &mut in_pos, token_pos)?;
                let offset = ((usize::from(b & OFFSET_HIGH_MASK) << 3) | usize::from(b2))
                    + MEDIUM_OFFSET_BIAS;
                (length_code(b), offset)
            }
            Marker::Short => (
                usize::from(b >> 6) + 3,
                usize::from(b & 0x3F) + SHORT_OFFSET_BIAS,
            ),
            Marker::Near => (length_code(b), usize::from(b >> 5) + 1),
        };

        apply_match(output, history_start, length, offset).ok_or(DecodeError::CorruptStream {
            position: token_pos,
        })?;
    }

    Ok(())
}

#[inline]
const fn length_code(b: u8) -> usize {
    LENGTH_LUT[(b & LENGTH_MASK) as usize]
}

/// Reads the next parameter byte of the token starting at `token_pos`.
#[inline]
fn next_byte(input: &[u8], in_pos: &mut usize, token_pos: usize) -> Result<u8> {
    let byte = *input.get(*in_pos).ok_or(DecodeError::CorruptStream {
        position: token_pos,
    })?;
    *in_pos += 1;
    Ok(byte)
}

/// Appends `length` bytes copied from `offset` bytes behind the end of `output`.
///
/// Only bytes at or after `history_start` may be referenced. Returns `None`
/// when `offset` reaches past them.
#[inline]
fn apply_match(
    output: &mut Vec<u8>,
    history_start: usize,
    length: usize,
    offset: usize,
) -> Option<()> {
    if offset == 0 || offset > output.len() - history_start {
        return None;
    }

    output.reserve(length);
    let src_pos = output.len() - offset;

    if offset == 1 {
        // Run of the last byte.
        let last_byte = output[src_pos];
        output.resize(output.len() + length, last_byte);
    } else if offset >= length {
        output.extend_from_within(src_pos..src_pos + length);
    } else {
        // Overlapping copy: later bytes read what earlier iterations wrote.
        for k in 0..length {
            let val = output[src_pos + k];
            output.push(val);
        }
    }

    Some(())
}
