//! Translation between the SLIP 132 and BIP 32 serializations of an extended key.
//!
//! Only the leading four-byte version prefix is ever rewritten. The payload that follows
//! it (depth, parent fingerprint, child number, chain code and key data) is opaque to
//! this module and is carried across unchanged.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use secrecy::{ExposeSecret, SecretVec, Zeroize};

use crate::{KeyVisibility, Network, Prefix, Scheme};

/// The length of a serialized extended key payload, excluding the version prefix:
/// depth (1) ‖ parent fingerprint (4) ‖ child number (4) ‖ chain code (32) ‖ key (33).
pub const PAYLOAD_LENGTH: usize = 74;

/// The length of a serialized extended key, excluding the base58check checksum.
pub const ENCODED_LENGTH: usize = Prefix::LENGTH + PAYLOAD_LENGTH;

/// Errors that can occur when decoding an extended key string.
#[derive(Debug, PartialEq)]
pub enum DecodeError {
    /// The string is not valid base58check. A checksum mismatch surfaces as
    /// [`bs58::decode::Error::InvalidChecksum`].
    Base58(bs58::decode::Error),
    /// The decoded bytes have the wrong length for a serialized extended key.
    InvalidLength(usize),
    /// The version prefix is not one of `zprv`, `zpub`, `vprv` or `vpub`.
    UnsupportedPrefix([u8; 4]),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Base58(e) => write!(f, "{}", e),
            DecodeError::InvalidLength(len) => write!(
                f,
                "Extended key has length {} bytes, expected {}",
                len, ENCODED_LENGTH
            ),
            DecodeError::UnsupportedPrefix(bytes) => write!(
                f,
                "Prefix {} is not supported",
                Prefix::from_bytes(*bytes)
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Base58(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bs58::decode::Error> for DecodeError {
    fn from(e: bs58::decode::Error) -> Self {
        DecodeError::Base58(e)
    }
}

/// The bytes of a serialized extended key that follow its version prefix.
///
/// For private keys this contains the secret scalar, so the buffer is zeroized on drop
/// and its `Debug` output is redacted.
pub struct ExtendedKeyPayload(SecretVec<u8>);

impl ExtendedKeyPayload {
    /// Wraps raw payload bytes. The length is not checked here.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        ExtendedKeyPayload(SecretVec::new(bytes))
    }

    /// Returns the payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.expose_secret()
    }
}

impl fmt::Debug for ExtendedKeyPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExtendedKeyPayload({} bytes)", self.as_bytes().len())
    }
}

/// Decodes a SLIP 132 (`zprv`/`zpub`/`vprv`/`vpub`) extended key string into its
/// network, visibility and payload.
///
/// The prefix is validated before anything else is done with the payload: a canonical
/// (`xprv`, `tpub`, ...) or otherwise unknown prefix is rejected with
/// [`DecodeError::UnsupportedPrefix`].
pub fn decode_alternate(
    encoded: &str,
) -> Result<(Network, KeyVisibility, ExtendedKeyPayload), DecodeError> {
    let mut decoded = bs58::decode(encoded).with_check(None).into_vec()?;

    let result = if decoded.len() < Prefix::LENGTH {
        Err(DecodeError::InvalidLength(decoded.len()))
    } else {
        let mut version = [0u8; 4];
        version.copy_from_slice(&decoded[..Prefix::LENGTH]);
        match Prefix::from_bytes(version).identify() {
            None => Err(DecodeError::UnsupportedPrefix(version)),
            Some(_) if decoded.len() != ENCODED_LENGTH => {
                Err(DecodeError::InvalidLength(decoded.len()))
            }
            Some((network, visibility)) => Ok((
                network,
                visibility,
                ExtendedKeyPayload::from_bytes(decoded[Prefix::LENGTH..].to_vec()),
            )),
        }
    };

    decoded.zeroize();
    result
}

/// Encodes `payload` under the BIP 32 prefix for the given network and visibility.
pub fn to_canonical(
    network: Network,
    visibility: KeyVisibility,
    payload: &ExtendedKeyPayload,
) -> String {
    encode_with_prefix(
        Prefix::lookup(Scheme::Canonical, network, visibility),
        payload.as_bytes(),
    )
}

/// Re-encodes a BIP 32 extended key string under the SLIP 132 prefix for the given
/// network and visibility.
///
/// The existing prefix of `canonical` is not inspected; any base58check string with at
/// least a prefix worth of bytes is accepted.
pub fn to_alternate(
    network: Network,
    visibility: KeyVisibility,
    canonical: &str,
) -> Result<String, DecodeError> {
    let mut decoded = bs58::decode(canonical).with_check(None).into_vec()?;

    let result = if decoded.len() < Prefix::LENGTH {
        Err(DecodeError::InvalidLength(decoded.len()))
    } else {
        Ok(encode_with_prefix(
            Prefix::lookup(Scheme::Alternate, network, visibility),
            &decoded[Prefix::LENGTH..],
        ))
    };

    decoded.zeroize();
    result
}

fn encode_with_prefix(prefix: Prefix, payload: &[u8]) -> String {
    let mut bytes = Vec::with_capacity(Prefix::LENGTH + payload.len());
    bytes.extend_from_slice(&prefix.to_bytes());
    bytes.extend_from_slice(payload);
    let encoded = bs58::encode(&bytes).with_check().into_string();
    bytes.zeroize();
    encoded
}
