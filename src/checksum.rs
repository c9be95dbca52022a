//! The CashAddr checksum: a BCH code over GF(32) with a 40-bit remainder.
//!
//! The prefix is folded into the checksum input, so an address copied under
//! the wrong prefix fails verification even though the prefix itself is not
//! part of the encoded symbols.

extern crate alloc;
use alloc::vec::Vec;

use crate::constants::CHECKSUM_LEN;

/// Generator constants, one per bit of the five bits shifted out of the
/// accumulator on each step.
pub const GENERATORS: [u64; 5] = [
    0x98_f2bc_8e61,
    0x79_b76d_99e2,
    0xf3_3e5f_b3c4,
    0xae_2eab_e2a8,
    0x1e_4f43_e470,
];

const ACC_MASK: u64 = 0x07_ffff_ffff;

/// Computes the polynomial remainder of a sequence of 5-bit values.
///
/// A correctly checksummed sequence reduces to `0`.
#[must_use]
pub fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = c >> 35;
        c = ((c & ACC_MASK) << 5) ^ u64::from(d);
        for (i, generator) in GENERATORS.iter().enumerate() {
            if (c0 >> i) & 1 == 1 {
                c ^= generator;
            }
        }
    }
    c ^ 1
}

/// The prefix part of the checksum input: the low five bits of each
/// lowercased prefix byte, then a zero separator.
#[must_use]
pub fn expand_prefix(prefix: &str) -> Vec<u8> {
    prefix
        .bytes()
        .map(|b| b.to_ascii_lowercase() & 0x1f)
        .chain(core::iter::once(0))
        .collect()
}

/// Computes the eight checksum symbols for a payload under `prefix`.
///
/// # Examples
///
/// ```
/// use cashaddr::checksum::{checksum, polymod, expand_prefix};
/// let payload = [0u8; 34];
/// let sum = checksum("bitcoincash", &payload);
/// let mut values = expand_prefix("bitcoincash");
/// values.extend_from_slice(&payload);
/// values.extend_from_slice(&sum);
/// assert_eq!(polymod(&values), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn checksum(prefix: &str, payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut values = expand_prefix(prefix);
    values.reserve(payload.len() + CHECKSUM_LEN);
    values.extend_from_slice(payload);
    values.extend_from_slice(&[0; CHECKSUM_LEN]);
    let poly = polymod(&values);

    let mut sum = [0; CHECKSUM_LEN];
    for (i, symbol) in sum.iter_mut().enumerate() {
        *symbol = ((poly >> (5 * (CHECKSUM_LEN - 1 - i))) & 0x1f) as u8;
    }
    sum
}

/// Runs [`polymod`] over `prefix` and the full symbol sequence, checksum
/// included. Returns `0` when the checksum holds.
#[must_use]
pub fn verify(prefix: &str, symbols: &[u8]) -> u64 {
    let mut values = expand_prefix(prefix);
    values.extend_from_slice(symbols);
    polymod(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::symbol;

    fn symbols(encoded: &str) -> Vec<u8> {
        encoded.chars().map(|c| symbol(c).unwrap()).collect()
    }

    #[test]
    fn test_polymod_empty() {
        // nothing is fed in, so only the final xor applies
        assert_eq!(polymod(&[]), 0);
        assert_eq!(polymod(&[0]), 0x21);
    }

    #[test]
    fn test_expand_prefix() {
        assert_eq!(
            expand_prefix("bitcoincash"),
            vec![2, 9, 20, 3, 15, 9, 14, 3, 1, 19, 8, 0]
        );
        assert_eq!(expand_prefix("BITCOINCASH"), expand_prefix("bitcoincash"));
        assert_eq!(expand_prefix(""), vec![0]);
    }

    #[test]
    fn test_checksum_vector() {
        let payload = symbols("qr6m7j9njldwwzlg9v7v53unlr4jkmx6ey");
        assert_eq!(
            checksum("bitcoincash", &payload).to_vec(),
            symbols("lep8ekg2")
        );
        let payload = symbols("pr6m7j9njldwwzlg9v7v53unlr4jkmx6ey");
        assert_eq!(checksum("bchtest", &payload).to_vec(), symbols("vwc0uz5t"));
        assert_eq!(checksum("pref", &payload).to_vec(), symbols("65nvtks5"));
    }

    #[test]
    fn test_verify() {
        let address = symbols("qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2");
        assert_eq!(verify("bitcoincash", &address), 0);
        assert_eq!(verify("BitcoinCash", &address), 0);
        assert_ne!(verify("bchtest", &address), 0);

        let mut corrupted = address.clone();
        corrupted[5] ^= 1;
        assert_ne!(verify("bitcoincash", &corrupted), 0);
    }
}
