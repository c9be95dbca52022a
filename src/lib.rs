//! `cashaddr` is a crate to encode and decode [CashAddr](https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md)
//! addresses, the checksummed address format used by Bitcoin Cash.
//!
//! # Decode an address
//! ```
//! use cashaddr::{decode, AddressType};
//! let decoded = decode("bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a").unwrap();
//! assert_eq!(decoded.prefix, "bitcoincash");
//! assert_eq!(decoded.version, 0);
//! assert_eq!(decoded.address_type, AddressType::P2pkh);
//! assert_eq!(decoded.hash_hex(), "76a04053bda0a88bda5177b86a15c3b29f559873");
//! ```
//!
//! # Encode a hash
//! ```
//! use cashaddr::{encode, AddressType};
//! let address = encode("bitcoincash", 0, AddressType::P2pkh, &[0; 20]).unwrap();
//! assert!(address.starts_with("bitcoincash:qqqqqqqq"));
//! ```
//!
//! # Inspect the intermediate values
//!
//! Every decoded address carries the symbols, checksum and payload bytes
//! that were computed along the way.
//! ```
//! let decoded = cashaddr::decode("qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a").unwrap();
//! assert_eq!(decoded.diagnostics.polymod, 0);
//! assert_eq!(decoded.diagnostics.payload_bytes.len(), 21);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod address;
pub mod bits;
pub mod checksum;
pub mod constants;

pub use self::address::decode;
pub use self::address::encode;
pub use self::address::{AddressType, DecodedAddress, Diagnostics, Error};
