//! Encode and decode CashAddr addresses.
//!
//! An address is `prefix:payload`, where the payload is the version byte and
//! a 20-byte hash repacked into 5-bit symbols and followed by an eight-symbol
//! checksum. The prefix may be omitted when decoding, in which case
//! [`DEFAULT_PREFIX`] is assumed.
//!
//! ```
//! use cashaddr::{decode, encode, AddressType};
//! let decoded = decode("bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a").unwrap();
//! assert_eq!(decoded.address_type, AddressType::P2pkh);
//! assert_eq!(decoded.hash_hex(), "76a04053bda0a88bda5177b86a15c3b29f559873");
//!
//! let encoded = encode("bitcoincash", 0, AddressType::P2sh, &decoded.hash).unwrap();
//! assert_eq!(encoded, "bitcoincash:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq");
//! ```

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::bits::{pack5, unpack5};
use crate::checksum;
use crate::constants::{character, symbol, CHECKSUM_LEN, DEFAULT_PREFIX, HASH_LEN, SEPARATOR};

/// The kind of hash an address commits to, taken from the high five bits of
/// the version byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    /// Pay to public key hash, selector `0`
    P2pkh,
    /// Pay to script hash, selector `1`
    P2sh,
    /// Any other selector. Decoding accepts these, encoding does not.
    Unknown(u8),
}

impl AddressType {
    #[must_use]
    pub fn from_selector(selector: u8) -> Self {
        match selector {
            0 => Self::P2pkh,
            1 => Self::P2sh,
            other => Self::Unknown(other),
        }
    }

    /// The 5-bit type selector stored in the version byte.
    #[must_use]
    pub fn selector(self) -> u8 {
        match self {
            Self::P2pkh => 0,
            Self::P2sh => 1,
            Self::Unknown(selector) => selector,
        }
    }
}

impl core::fmt::Display for AddressType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::P2pkh => write!(f, "P2PKH"),
            Self::P2sh => write!(f, "P2SH"),
            Self::Unknown(selector) => write!(f, "Unknown Type ({selector})"),
        }
    }
}

/// Errors returned when decoding or encoding an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The encoded part contains a character outside the alphabet.
    InvalidCharacter(char),
    /// Fewer symbols than the checksum alone needs.
    TooShort,
    /// The checksum doesn't validate against the prefix and payload.
    ChecksumMismatch,
    /// The payload holds no version byte.
    EmptyPayload,
    /// The hash following the version byte is not 20 bytes long.
    BadHashLength(usize),
    /// Only P2PKH and P2SH addresses can be encoded.
    UnsupportedType(AddressType),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidCharacter(c) => write!(f, "invalid character '{c}'"),
            Self::TooShort => write!(f, "address is too short"),
            Self::ChecksumMismatch => write!(f, "invalid checksum"),
            Self::EmptyPayload => write!(f, "empty payload"),
            Self::BadHashLength(len) => write!(
                f,
                "hash160 length is incorrect: expected {HASH_LEN} bytes, got {len}"
            ),
            Self::UnsupportedType(t) => write!(f, "unsupported address type: {t}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Intermediate values computed while decoding. They don't influence the
/// result, but are handy when inspecting a malformed or unusual address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    /// Every symbol of the encoded part, checksum included.
    pub symbols: Vec<u8>,
    /// The symbols preceding the checksum.
    pub payload_symbols: Vec<u8>,
    /// The trailing checksum symbols as found in the address.
    pub checksum_symbols: [u8; CHECKSUM_LEN],
    /// Output of the checksum polynomial; always `0` for a decoded address.
    pub polymod: u64,
    /// The payload symbols unpacked into bytes.
    pub payload_bytes: Vec<u8>,
}

impl core::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "packed: {:?}", self.symbols)?;
        writeln!(f, "payload_packed: {:?}", self.payload_symbols)?;
        writeln!(f, "checksum_extracted: {:?}", self.checksum_symbols)?;
        writeln!(f, "polymod_result: {}", self.polymod)?;
        write!(f, "payload_bytes: {:?}", self.payload_bytes)
    }
}

/// A successfully decoded address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAddress {
    /// The prefix as written in the address, or [`DEFAULT_PREFIX`].
    pub prefix: String,
    /// Version number from the low three bits of the version byte.
    pub version: u8,
    pub address_type: AddressType,
    pub hash: [u8; HASH_LEN],
    pub diagnostics: Diagnostics,
}

impl DecodedAddress {
    #[must_use]
    pub fn version_byte(&self) -> u8 {
        (self.address_type.selector() << 3) | self.version
    }

    /// The hash as lowercase hex.
    #[must_use]
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }

    /// Encodes the address again under its own prefix.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnsupportedType`] if the address was decoded with
    /// an unknown type selector.
    pub fn encode(&self) -> Result<String, Error> {
        encode(&self.prefix, self.version, self.address_type, &self.hash)
    }
}

impl core::fmt::Display for DecodedAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Prefix: {}", self.prefix)?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "Type: {}", self.address_type)?;
        write!(f, "Hash160: {}", self.hash_hex())
    }
}

impl core::str::FromStr for DecodedAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// Decodes a CashAddr address.
///
/// The prefix is everything before the first `:`. Without one, the prefix
/// defaults to `bitcoincash`. The encoded part is read case-insensitively.
///
/// # Examples
///
/// ```
/// use cashaddr::{decode, AddressType};
/// let with_prefix = decode("bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2").unwrap();
/// let without_prefix = decode("qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2").unwrap();
/// assert_eq!(with_prefix, without_prefix);
/// assert_eq!(with_prefix.version, 0);
/// assert_eq!(with_prefix.address_type, AddressType::P2pkh);
/// ```
///
/// # Errors
///
/// Returns the first validation failure: an unknown character, a string
/// too short to hold a checksum, a checksum that doesn't match the prefix,
/// an empty payload, or a hash that isn't 20 bytes long.
pub fn decode(address: &str) -> Result<DecodedAddress, Error> {
    let (prefix, encoded) = address
        .split_once(SEPARATOR)
        .unwrap_or((DEFAULT_PREFIX, address));

    let symbols = encoded
        .chars()
        .map(|c| symbol(c).ok_or(Error::InvalidCharacter(c)))
        .collect::<Result<Vec<_>, _>>()?;
    if symbols.len() < CHECKSUM_LEN {
        return Err(Error::TooShort);
    }

    let polymod = checksum::verify(prefix, &symbols);
    if polymod != 0 {
        return Err(Error::ChecksumMismatch);
    }

    let (payload_symbols, checksum_symbols) = symbols.split_at(symbols.len() - CHECKSUM_LEN);
    let mut extracted = [0; CHECKSUM_LEN];
    extracted.copy_from_slice(checksum_symbols);

    let payload_bytes = unpack5(payload_symbols);
    let (&version_byte, hash) = payload_bytes.split_first().ok_or(Error::EmptyPayload)?;
    let hash: [u8; HASH_LEN] = hash
        .try_into()
        .map_err(|_| Error::BadHashLength(hash.len()))?;

    Ok(DecodedAddress {
        prefix: prefix.into(),
        version: version_byte & 0x07,
        address_type: AddressType::from_selector(version_byte >> 3),
        hash,
        diagnostics: Diagnostics {
            payload_symbols: payload_symbols.to_vec(),
            checksum_symbols: extracted,
            polymod,
            payload_bytes,
            symbols,
        },
    })
}

/// Encodes a hash as a CashAddr address under `prefix`.
///
/// Only the low three bits of `version` are used.
///
/// # Examples
///
/// ```
/// use cashaddr::{encode, AddressType};
/// let hash = [
///     0xf5, 0xbf, 0x48, 0xb3, 0x97, 0xda, 0xe7, 0x0b, 0xe8, 0x2b, 0x3c, 0xca, 0x47, 0x93,
///     0xf8, 0xeb, 0x2b, 0x6c, 0xda, 0xc9,
/// ];
/// assert_eq!(
///     encode("bchtest", 0, AddressType::P2sh, &hash).unwrap(),
///     "bchtest:pr6m7j9njldwwzlg9v7v53unlr4jkmx6eyvwc0uz5t"
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for any type other than P2PKH or P2SH.
pub fn encode(
    prefix: &str,
    version: u8,
    addr_type: AddressType,
    hash: &[u8; HASH_LEN],
) -> Result<String, Error> {
    if let AddressType::Unknown(_) = addr_type {
        return Err(Error::UnsupportedType(addr_type));
    }
    let version_byte = (addr_type.selector() << 3) | (version & 0x07);

    let mut payload = Vec::with_capacity(1 + HASH_LEN);
    payload.push(version_byte);
    payload.extend_from_slice(hash);

    let payload_symbols = pack5(&payload);
    let checksum_symbols = checksum::checksum(prefix, &payload_symbols);

    let mut address =
        String::with_capacity(prefix.len() + 1 + payload_symbols.len() + CHECKSUM_LEN);
    address.push_str(prefix);
    address.push(SEPARATOR);
    address.extend(
        payload_symbols
            .iter()
            .chain(checksum_symbols.iter())
            .map(|&s| character(s)),
    );
    Ok(address)
}
