use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Missing LZG magic or input shorter than the header")]
    BadMagic,

    #[error("Checksum mismatch: header declares {expected:#010x}, payload sums to {computed:#010x}")]
    ChecksumMismatch { expected: u32, computed: u32 },

    #[error("Unknown compression method {0}")]
    UnknownMethod(u8),

    #[error("Corrupt stream at input offset {position}")]
    CorruptStream { position: usize },
}
