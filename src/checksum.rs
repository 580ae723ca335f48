//! The LZG payload checksum.
//!
//! A Fletcher-style pair of 16-bit running sums. `a` starts at 1 and
//! accumulates bytes, `b` accumulates successive values of `a`, so the
//! result depends on byte order as well as byte values.

/// Computes the checksum of `data`, processed strictly front to back.
///
/// The high half of the result holds `b`, the low half holds `a`.
#[must_use]
pub fn checksum(data: &[u8]) -> u32 {
    let mut a: u16 = 1;
    let mut b: u16 = 0;

    for &byte in data {
        a = a.wrapping_add(u16::from(byte));
        b = b.wrapping_add(a);
    }

    (u32::from(b) << 16) | u32::from(a)
}
