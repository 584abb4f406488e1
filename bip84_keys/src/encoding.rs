//! Encoding and decoding functions for secret keys.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use secrecy::{SecretVec, Zeroize};
use slip132::{Network, NetworkConstants};

/// The suffix byte marking a WIF secret key as belonging to a compressed public key.
const COMPRESSED_PUBKEY_FLAG: u8 = 0x01;

/// Errors that can occur when decoding a Wallet Import Format secret key.
#[derive(Debug, PartialEq)]
pub enum WifError {
    /// The string could not be decoded as base58check.
    Base58(bs58::decode::Error),
    /// The decoded payload has an unexpected length or compression flag.
    InvalidEncoding,
    /// The version byte does not belong to any supported network.
    UnknownVersion(u8),
}

impl fmt::Display for WifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WifError::Base58(e) => write!(f, "Invalid Base58Check encoding: {}", e),
            WifError::InvalidEncoding => {
                write!(f, "Expected a compressed 32-byte secret key")
            }
            WifError::UnknownVersion(v) => write!(f, "Unknown WIF version byte 0x{:02x}", v),
        }
    }
}

impl std::error::Error for WifError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WifError::Base58(e) => Some(e),
            _ => None,
        }
    }
}

/// Writes a 32-byte secret key in Wallet Import Format, flagged as compressed.
///
/// # Examples
///
/// ```
/// use bip84_keys::encoding::encode_wif;
/// use bip84_keys::Network;
///
/// let wif = encode_wif(Network::Main, &[1u8; 32]);
/// assert!(wif.starts_with('K') || wif.starts_with('L'));
/// ```
pub fn encode_wif(network: Network, secret: &[u8; 32]) -> String {
    let mut bytes = Vec::with_capacity(34);
    bytes.push(network.b58_secret_key_prefix());
    bytes.extend_from_slice(secret);
    bytes.push(COMPRESSED_PUBKEY_FLAG);
    let encoded = bs58::encode(&bytes).with_check().into_string();
    bytes.zeroize();
    encoded
}

/// Decodes a compressed Wallet Import Format secret key.
///
/// Returns the network the key was encoded for and the 32-byte secret.
pub fn decode_wif(s: &str) -> Result<(Network, SecretVec<u8>), WifError> {
    let mut decoded = bs58::decode(s)
        .with_check(None)
        .into_vec()
        .map_err(WifError::Base58)?;

    let result = if decoded.len() != 34 || decoded[33] != COMPRESSED_PUBKEY_FLAG {
        Err(WifError::InvalidEncoding)
    } else {
        [Network::Main, Network::Test]
            .into_iter()
            .find(|network| network.b58_secret_key_prefix() == decoded[0])
            .map(|network| (network, SecretVec::new(decoded[1..33].to_vec())))
            .ok_or(WifError::UnknownVersion(decoded[0]))
    };
    decoded.zeroize();
    result
}
