//! # LZG Decompression
//!
//! `lzg` is a safe, pure-Rust decoder for buffers produced by liblzg.
//! An LZG buffer is a 16-byte header followed either by the data stored
//! verbatim or by an LZG1 stream, an LZ77 variant that uses four
//! buffer-specific marker bytes instead of flag bits.
//!
//! ## Example
//!
//! ```rust
//! use lzg::decode;
//!
//! // "Hello" stored with the copy method.
//! let buffer = [
//!     b'L', b'Z', b'G',
//!     0x00, 0x00, 0x00, 0x05, // decoded size
//!     0x00, 0x00, 0x00, 0x05, // encoded size
//!     0x05, 0x8C, 0x01, 0xF5, // checksum
//!     0x00,                   // method: copy
//!     b'H', b'e', b'l', b'l', b'o',
//! ];
//!
//! let decoded = decode(&buffer).expect("Decoding failed");
//! assert_eq!(decoded.as_bytes(), b"Hello");
//! assert_eq!(decoded.to_latin1_text(), "Hello");
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod checksum;
pub mod decompress;
pub mod error;
pub mod header;
pub mod output;

pub use checksum::checksum;
pub use decompress::{decode, decode_into, decoded_size};
pub use error::DecodeError;
pub use header::{HEADER_SIZE, Header, MarkerSet, Method};
pub use output::Decoded;
