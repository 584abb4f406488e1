//! Native segwit (P2WPKH) addresses.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use bech32::{segwit, Fe32, Hrp};
use sha2::{Digest, Sha256};
use slip132::{Network, NetworkConstants};

/// Errors that can occur when parsing a native segwit address.
#[derive(Debug)]
pub enum AddressDecodeError {
    /// The string is not a valid segwit address.
    Bech32(segwit::DecodeError),
    /// The human-readable part does not belong to any supported network.
    UnknownHrp(String),
    /// The address carries a witness program other than a version 0 key hash.
    UnsupportedWitness { version: u8, length: usize },
}

impl fmt::Display for AddressDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressDecodeError::Bech32(e) => write!(f, "Invalid segwit address: {}", e),
            AddressDecodeError::UnknownHrp(hrp) => {
                write!(f, "Unknown human-readable part \"{}\"", hrp)
            }
            AddressDecodeError::UnsupportedWitness { version, length } => write!(
                f,
                "Unsupported witness program (version {}, {} bytes), expected a P2WPKH program",
                version, length
            ),
        }
    }
}

impl std::error::Error for AddressDecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AddressDecodeError::Bech32(e) => Some(e),
            _ => None,
        }
    }
}

impl From<segwit::DecodeError> for AddressDecodeError {
    fn from(e: segwit::DecodeError) -> Self {
        AddressDecodeError::Bech32(e)
    }
}

/// A pay-to-witness-public-key-hash address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WitnessAddress {
    network: Network,
    pubkey_hash: [u8; 20],
}

impl fmt::Debug for WitnessAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WitnessAddress")
            .field("network", &self.network)
            .field("pubkey_hash", &hex::encode(self.pubkey_hash))
            .finish()
    }
}

impl WitnessAddress {
    /// Constructs the address paying to the given compressed public key.
    pub fn from_pubkey_bytes(network: Network, pubkey: &[u8; 33]) -> Self {
        WitnessAddress {
            network,
            pubkey_hash: ripemd::Ripemd160::digest(Sha256::digest(pubkey)).into(),
        }
    }

    /// Returns the network this address is valid on.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Returns the HASH160 of the public key this address pays to.
    pub fn pubkey_hash(&self) -> &[u8; 20] {
        &self.pubkey_hash
    }

    /// Encodes this address as lowercase bech32.
    pub fn encode(&self) -> String {
        segwit::encode_v0(hrp(self.network), &self.pubkey_hash)
            .expect("a 20-byte program is a valid version 0 witness program")
    }

    /// Parses a bech32 P2WPKH address for either supported network.
    pub fn decode(s: &str) -> Result<Self, AddressDecodeError> {
        let (parsed_hrp, version, program) = segwit::decode(s)?;

        let network = [Network::Main, Network::Test]
            .into_iter()
            .find(|network| hrp(*network) == parsed_hrp)
            .ok_or_else(|| AddressDecodeError::UnknownHrp(parsed_hrp.to_string()))?;

        let pubkey_hash = <[u8; 20]>::try_from(program.as_slice())
            .ok()
            .filter(|_| version == Fe32::Q)
            .ok_or(AddressDecodeError::UnsupportedWitness {
                version: version.to_u8(),
                length: program.len(),
            })?;

        Ok(WitnessAddress {
            network,
            pubkey_hash,
        })
    }
}

impl fmt::Display for WitnessAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for WitnessAddress {
    type Err = AddressDecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

fn hrp(network: Network) -> Hrp {
    Hrp::parse_unchecked(network.hrp_segwit())
}
