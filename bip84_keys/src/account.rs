//! Account-level key sessions.
//!
//! An account key is imported from its SLIP 132 encoding, after which address-level
//! keys and addresses can be derived from it on the external (receive) and internal
//! (change) chains.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use secrecy::{ExposeSecret, SecretString};
use slip132::{KeyVisibility, Network};
use tracing::debug;

use crate::address::WitnessAddress;
use crate::keys::{
    ChangeFlag, DerivationError, KeyNode, KeyScope, NonHardenedChildIndex, NonHardenedChildRange,
};

/// Errors that can occur when importing an account key.
#[derive(Debug, PartialEq)]
pub enum DecodingError {
    /// The string is not a SLIP 132 extended key for a supported network.
    Prefix(slip132::DecodeError),
    /// The key's prefix does not match the kind of key being imported.
    VisibilityMismatch {
        expected: KeyVisibility,
        actual: KeyVisibility,
    },
    /// The key data was rejected by the HD key engine.
    Key(bip32::Error),
}

impl fmt::Display for DecodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodingError::Prefix(e) => write!(f, "Invalid extended key encoding: {}", e),
            DecodingError::VisibilityMismatch { expected, actual } => write!(
                f,
                "Expected an extended {} key, found an extended {} key",
                expected, actual
            ),
            DecodingError::Key(e) => write!(f, "Invalid extended key: {}", e),
        }
    }
}

impl std::error::Error for DecodingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodingError::Prefix(e) => Some(e),
            DecodingError::Key(e) => Some(e),
            DecodingError::VisibilityMismatch { .. } => None,
        }
    }
}

impl From<slip132::DecodeError> for DecodingError {
    fn from(e: slip132::DecodeError) -> Self {
        DecodingError::Prefix(e)
    }
}

/// Decodes a SLIP 132 account key and returns its network and canonical encoding.
///
/// The canonical encoding is parsed once here so that malformed key material is rejected
/// on import rather than on first use.
fn decode_canonical(
    encoded: &str,
    expected: KeyVisibility,
) -> Result<(Network, String), DecodingError> {
    let (network, actual, payload) = slip132::decode_alternate(encoded)?;
    if actual != expected {
        return Err(DecodingError::VisibilityMismatch { expected, actual });
    }

    let canonical = slip132::to_canonical(network, actual, &payload);
    KeyNode::from_canonical_str(&canonical, network, actual).map_err(DecodingError::Key)?;

    debug!(network = ?network, visibility = %actual, "Imported account key");
    Ok((network, canonical))
}

mod private {
    use crate::keys::{DerivationError, KeyNode};

    pub trait SealedAccountKey {
        /// Re-parses the account node from its stored canonical encoding.
        fn account_node(&self) -> Result<KeyNode, DerivationError>;
    }
}

use private::SealedAccountKey;

/// Operations available on every imported account key.
///
/// Both receive and change address keys are derived with non-hardened derivation, so
/// everything here is available from the account's public key alone.
pub trait AccountKey: SealedAccountKey {
    /// Returns the network this account key was encoded for.
    fn network(&self) -> Network;

    /// Returns the account's public key, encoded as `zpub` or `vpub`.
    fn account_public(&self) -> Result<String, DerivationError> {
        Ok(self.account_node()?.neuter().to_alternate_string())
    }

    /// Derives the node at `<scope>/<address_index>` below the account.
    fn derive_address_node(
        &self,
        scope: KeyScope,
        address_index: NonHardenedChildIndex,
    ) -> Result<KeyNode, DerivationError> {
        self.account_node()?
            .derive_child(scope.index(), false)?
            .derive_child(address_index.index(), false)
    }

    /// Derives the compressed public key for the given scope and address index.
    fn derive_address_pubkey(
        &self,
        scope: KeyScope,
        address_index: NonHardenedChildIndex,
    ) -> Result<[u8; 33], DerivationError> {
        Ok(self
            .derive_address_node(scope, address_index)?
            .public_key_bytes())
    }

    /// Derives the P2WPKH address for the given scope and address index.
    fn derive_address(
        &self,
        scope: KeyScope,
        address_index: NonHardenedChildIndex,
    ) -> Result<WitnessAddress, DerivationError> {
        Ok(WitnessAddress::from_pubkey_bytes(
            self.network(),
            &self.derive_address_pubkey(scope, address_index)?,
        ))
    }

    /// Returns the hex-encoded compressed public key at `index`.
    ///
    /// `is_change` selects the change chain only if it is the boolean `true`.
    fn public_key(
        &self,
        index: NonHardenedChildIndex,
        is_change: impl ChangeFlag,
    ) -> Result<String, DerivationError> {
        Ok(self
            .derive_address_node(KeyScope::from_change_flag(is_change), index)?
            .public_key_hex())
    }

    /// Returns the bech32 P2WPKH address at `index`.
    ///
    /// `is_change` selects the change chain only if it is the boolean `true`.
    fn address(
        &self,
        index: NonHardenedChildIndex,
        is_change: impl ChangeFlag,
    ) -> Result<String, DerivationError> {
        Ok(self
            .derive_address(KeyScope::from_change_flag(is_change), index)?
            .encode())
    }

    /// Derives the addresses for every index in `range` within the given scope.
    fn addresses(
        &self,
        scope: KeyScope,
        range: NonHardenedChildRange,
    ) -> Result<Vec<(NonHardenedChildIndex, WitnessAddress)>, DerivationError> {
        let account = self.account_node()?.neuter();
        let chain = account.derive_child(scope.index(), false)?;
        range
            .into_iter()
            .map(|index| {
                let node = chain.derive_child(index.index(), false)?;
                Ok((
                    index,
                    WitnessAddress::from_pubkey_bytes(self.network(), &node.public_key_bytes()),
                ))
            })
            .collect()
    }
}

/// An imported account private key (`zprv` or `vprv`).
pub struct AccountPrivKey {
    network: Network,
    canonical: SecretString,
}

impl fmt::Debug for AccountPrivKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountPrivKey")
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}

impl AccountPrivKey {
    /// Imports an account private key from its SLIP 132 encoding.
    pub fn decode(encoded: &str) -> Result<Self, DecodingError> {
        let (network, canonical) = decode_canonical(encoded, KeyVisibility::Private)?;
        Ok(AccountPrivKey {
            network,
            canonical: SecretString::new(canonical),
        })
    }

    /// Returns the account private key, encoded as `zprv` or `vprv`.
    pub fn account_private(&self) -> Result<String, DerivationError> {
        Ok(self.account_node()?.to_alternate_string())
    }

    /// Returns the private key at `index` in Wallet Import Format.
    ///
    /// `is_change` selects the change chain only if it is the boolean `true`.
    pub fn private_key(
        &self,
        index: NonHardenedChildIndex,
        is_change: impl ChangeFlag,
    ) -> Result<String, DerivationError> {
        self.derive_secret_key(KeyScope::from_change_flag(is_change), index)
    }

    /// Derives the WIF-encoded private key for the given scope and address index.
    pub fn derive_secret_key(
        &self,
        scope: KeyScope,
        address_index: NonHardenedChildIndex,
    ) -> Result<String, DerivationError> {
        self.derive_address_node(scope, address_index)?
            .private_key_wif()
    }

    /// Returns the public-only session for this account.
    pub fn to_account_pubkey(&self) -> Result<AccountPubKey, DerivationError> {
        Ok(AccountPubKey {
            network: self.network,
            canonical: self.account_node()?.neuter().to_canonical_string(),
        })
    }
}

impl SealedAccountKey for AccountPrivKey {
    fn account_node(&self) -> Result<KeyNode, DerivationError> {
        Ok(KeyNode::from_canonical_str(
            self.canonical.expose_secret(),
            self.network,
            KeyVisibility::Private,
        )?)
    }
}

impl AccountKey for AccountPrivKey {
    fn network(&self) -> Network {
        self.network
    }
}

impl FromStr for AccountPrivKey {
    type Err = DecodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

/// An imported account public key (`zpub` or `vpub`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountPubKey {
    network: Network,
    canonical: String,
}

impl AccountPubKey {
    /// Imports an account public key from its SLIP 132 encoding.
    pub fn decode(encoded: &str) -> Result<Self, DecodingError> {
        let (network, canonical) = decode_canonical(encoded, KeyVisibility::Public)?;
        Ok(AccountPubKey { network, canonical })
    }
}

impl SealedAccountKey for AccountPubKey {
    fn account_node(&self) -> Result<KeyNode, DerivationError> {
        Ok(KeyNode::from_canonical_str(
            &self.canonical,
            self.network,
            KeyVisibility::Public,
        )?)
    }
}

impl AccountKey for AccountPubKey {
    fn network(&self) -> Network {
        self.network
    }
}

impl FromStr for AccountPubKey {
    type Err = DecodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
