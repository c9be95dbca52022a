//! The CashAddr alphabet and related constants.

/// Prefix assumed when an address carries no `prefix:` part.
pub const DEFAULT_PREFIX: &str = "bitcoincash";

/// Separator between the prefix and the encoded part.
pub const SEPARATOR: char = ':';

/// Number of symbols in the checksum.
pub const CHECKSUM_LEN: usize = 8;

/// Number of bytes in the hash carried by an address.
pub const HASH_LEN: usize = 20;

/// The 32-character alphabet, indexed by symbol value.
pub const CHARSET: [char; 32] = [
    'q', 'p', 'z', 'r', 'y', '9', 'x', '8', //
    'g', 'f', '2', 't', 'v', 'd', 'w', '0', //
    's', '3', 'j', 'n', '5', '4', 'k', 'h', //
    'c', 'e', '6', 'm', 'u', 'a', '7', 'l', //
];

/// Inverse of [`CHARSET`]. Keys are lowercase only.
pub static CHARSET_REV: phf::Map<char, u8> = phf::phf_map! {
    'q' => 0,
    'p' => 1,
    'z' => 2,
    'r' => 3,
    'y' => 4,
    '9' => 5,
    'x' => 6,
    '8' => 7,
    'g' => 8,
    'f' => 9,
    '2' => 10,
    't' => 11,
    'v' => 12,
    'd' => 13,
    'w' => 14,
    '0' => 15,
    's' => 16,
    '3' => 17,
    'j' => 18,
    'n' => 19,
    '5' => 20,
    '4' => 21,
    'k' => 22,
    'h' => 23,
    'c' => 24,
    'e' => 25,
    '6' => 26,
    'm' => 27,
    'u' => 28,
    'a' => 29,
    '7' => 30,
    'l' => 31,
};

/// Looks up the symbol for a character, ignoring ASCII case.
#[must_use]
pub fn symbol(c: char) -> Option<u8> {
    CHARSET_REV.get(&c.to_ascii_lowercase()).copied()
}

/// Renders a symbol as its alphabet character. Only the low five bits are used.
#[must_use]
pub fn character(symbol: u8) -> char {
    CHARSET[usize::from(symbol & 0x1f)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_inverse() {
        assert_eq!(CHARSET_REV.len(), CHARSET.len());
        for (i, &c) in CHARSET.iter().enumerate() {
            assert_eq!(symbol(c), Some(i as u8));
            assert_eq!(symbol(c.to_ascii_uppercase()), Some(i as u8));
            assert_eq!(character(i as u8), c);
        }
    }

    #[test]
    fn test_excluded_characters() {
        for c in ['1', 'b', 'i', 'o', 'B', 'I', 'O', ':', ' ', '₿'] {
            assert_eq!(symbol(c), None);
        }
    }
}
