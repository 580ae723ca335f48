use lzg::{DecodeError, HEADER_SIZE, checksum, decode};
use proptest::prelude::*;

fn frame(method: u8, body: &[u8]) -> Vec<u8> {
    let mut out = b"LZG".to_vec();
    out.extend_from_slice(&[0; 8]);
    out.extend_from_slice(&checksum(body).to_be_bytes());
    out.push(method);
    out.extend_from_slice(body);
    out
}

/// Reference model of the checksum using wide integers and explicit modulo.
fn checksum_model(data: &[u8]) -> u32 {
    let (mut a, mut b) = (1u64, 0u64);
    for &byte in data {
        a = (a + u64::from(byte)) % 65_536;
        b = (b + a) % 65_536;
    }
    ((b << 16) | a) as u32
}

proptest! {
    #[test]
    fn copy_method_is_identity(payload in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let decoded = decode(&frame(0, &payload)).unwrap();
        prop_assert_eq!(decoded.as_bytes(), &payload[..]);
    }

    #[test]
    fn checksum_matches_model(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
        prop_assert_eq!(checksum(&data), checksum_model(&data));
    }

    #[test]
    fn swapping_distinct_adjacent_bytes_changes_checksum(
        mut data in proptest::collection::vec(any::<u8>(), 2..256),
        index in any::<proptest::sample::Index>(),
    ) {
        let i = index.index(data.len() - 1);
        prop_assume!(data[i] != data[i + 1]);
        let before = checksum(&data);
        data.swap(i, i + 1);
        prop_assert_ne!(before, checksum(&data));
    }

    #[test]
    fn short_input_is_always_bad_magic(data in proptest::collection::vec(any::<u8>(), 0..HEADER_SIZE)) {
        prop_assert_eq!(decode(&data), Err(DecodeError::BadMagic));
    }

    #[test]
    fn arbitrary_lzg1_body_never_panics(body in proptest::collection::vec(any::<u8>(), 0..512)) {
        // Any outcome is fine as long as it is a value, not a panic.
        let _ = decode(&frame(1, &body));
    }

    #[test]
    fn near_run_repeats_literal(literal in 0u8..0xF0, code in 1u8..32) {
        let body = [0xF1, 0xF2, 0xF3, 0xF4, literal, 0xF4, code];
        let decoded = decode(&frame(1, &body)).unwrap();
        prop_assert!(decoded.len() >= 4);
        prop_assert!(decoded.as_bytes().iter().all(|&b| b == literal));
    }

    #[test]
    fn escaped_marker_is_single_literal(which in 0usize..4) {
        let markers = [0x10, 0x20, 0x30, 0x40];
        let mut body = markers.to_vec();
        body.extend_from_slice(&[markers[which], 0]);
        let decoded = decode(&frame(1, &body)).unwrap();
        prop_assert_eq!(decoded.as_bytes(), &[markers[which]]);
    }
}
