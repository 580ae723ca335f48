#![no_main]

use libfuzzer_sys::fuzz_target;
use lzg::{checksum, decode};

/// Wraps `body` in an LZG header with a valid checksum for `method`.
fn frame(method: u8, body: &[u8]) -> Vec<u8> {
    let mut out = b"LZG".to_vec();
    out.extend_from_slice(&[0; 8]);
    out.extend_from_slice(&checksum(body).to_be_bytes());
    out.push(method);
    out.extend_from_slice(body);
    out
}

/// Verifies that the decoder safely handles arbitrary, potentially malformed input.
///
/// Raw fuzz input almost never passes the checksum, so the same bytes are also
/// framed as a valid LZG1 buffer to drive the token decoder itself.
///
/// # Invariant
/// The decoder must return either `Ok(_)` or `Err(_)`. It must **never** panic,
/// regardless of the input data.
fn verify_decode_robustness(data: &[u8]) {
    let _ = decode(data);
    let _ = decode(&frame(1, data));
}

/// Verifies that the copy method reproduces its payload.
///
/// # Invariant
/// `decode(frame(COPY, data)) == data`
///
/// # Panics
/// This function panics if decoding fails or the output does not bit-match the input.
fn verify_copy_identity(data: &[u8]) {
    match decode(&frame(0, data)) {
        Ok(decoded) => {
            if decoded.as_bytes() != data {
                panic!(
                    "Copy mismatch!\nInput len: {}\nDecoded len: {}",
                    data.len(),
                    decoded.len()
                );
            }
        }
        Err(e) => {
            panic!(
                "Copy-method buffer rejected.\nError: {:?}\nInput len: {}",
                e,
                data.len()
            );
        }
    }
}

fuzz_target!(|data: &[u8]| {
    // 1. Robustness: Ensure random noise doesn't crash the decoder.
    verify_decode_robustness(data);

    // 2. Correctness: Ensure stored data survives the copy method.
    verify_copy_identity(data);
});
