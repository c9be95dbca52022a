//! Repacking between 8-bit bytes and 5-bit symbols.
//!
//! Both directions treat their input as one continuous bitstream, most
//! significant bit first.
//!
//! ```
//! use cashaddr::bits::{pack5, unpack5};
//! let symbols = pack5(&[0xff, 0x01]);
//! assert_eq!(symbols, vec![31, 28, 0, 16]);
//! assert_eq!(unpack5(&symbols), vec![0xff, 0x01]);
//! ```

extern crate alloc;
use alloc::vec::Vec;

/// Splits bytes into 5-bit symbols.
///
/// An incomplete final group is padded with zero bits, so the output always
/// holds `ceil(8 * data.len() / 5)` symbols.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn pack5(data: &[u8]) -> Vec<u8> {
    let mut packed = Vec::with_capacity((data.len() * 8 + 4) / 5);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for &byte in data {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            packed.push(((acc >> bits) & 0x1f) as u8);
        }
        acc &= (1 << bits) - 1;
    }
    if bits > 0 {
        packed.push(((acc << (5 - bits)) & 0x1f) as u8);
    }
    packed
}

/// Joins 5-bit symbols back into bytes.
///
/// Trailing bits that don't fill a whole byte are the padding added by
/// [`pack5`] and are dropped. Only the low five bits of each symbol are read.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn unpack5(symbols: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(symbols.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for &symbol in symbols {
        acc = (acc << 5) | u32::from(symbol & 0x1f);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            data.push(((acc >> bits) & 0xff) as u8);
        }
        acc &= (1 << bits) - 1;
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack5() {
        assert_eq!(pack5(&[]), Vec::<u8>::new());
        assert_eq!(pack5(&[0xff]), vec![31, 28]);
        assert_eq!(pack5(&[0xff, 0x01]), vec![31, 28, 0, 16]);
        assert_eq!(pack5(&[0xff; 5]), vec![31; 8]);
        // version byte 0x08 followed by a hash
        assert_eq!(pack5(&[0x08, 0x00])[..2], [1, 0]);
    }

    #[test]
    fn test_pack5_length() {
        for len in 0..64 {
            let data = vec![0xa5; len];
            assert_eq!(pack5(&data).len(), (8 * len + 4) / 5);
        }
        assert_eq!(pack5(&[0; 21]).len(), 34);
    }

    #[test]
    fn test_unpack5() {
        assert_eq!(unpack5(&[]), Vec::<u8>::new());
        // a single symbol never completes a byte
        assert_eq!(unpack5(&[31]), Vec::<u8>::new());
        assert_eq!(unpack5(&[31, 28]), vec![0xff]);
        assert_eq!(unpack5(&[31; 8]), vec![0xff; 5]);
    }

    #[test]
    fn test_unpack5_inverts_pack5() {
        let data: Vec<u8> = (0..=255).collect();
        for len in 0..data.len() {
            assert_eq!(unpack5(&pack5(&data[..len])), data[..len]);
        }
    }
}
