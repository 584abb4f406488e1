//! Seed-backed derivation of root and account keys.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use bip0039::{English, Mnemonic};
use secrecy::{ExposeSecret, SecretVec, Zeroize};
use slip132::Network;
use tracing::debug;

use crate::keys::{AccountId, DerivationError, DerivationPath, KeyNode};

/// A wallet defined by a BIP 39 seed, producing BIP 84 root and account keys.
///
/// Only the seed is retained. Every request re-derives its key from the seed and
/// serializes it with the SLIP 132 prefix for the wallet's network.
pub struct SeedWallet {
    seed: SecretVec<u8>,
    network: Network,
}

impl fmt::Debug for SeedWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedWallet")
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}

impl SeedWallet {
    /// Constructs a wallet from an English BIP 39 mnemonic phrase with an empty passphrase.
    ///
    /// The phrase is validated against the word list and checksum.
    pub fn from_mnemonic(phrase: &str, network: Network) -> Result<Self, bip0039::Error> {
        Self::from_mnemonic_with_passphrase(phrase, "", network)
    }

    /// Constructs a wallet from an English BIP 39 mnemonic phrase and passphrase.
    pub fn from_mnemonic_with_passphrase(
        phrase: &str,
        passphrase: &str,
        network: Network,
    ) -> Result<Self, bip0039::Error> {
        let mnemonic = Mnemonic::<English>::from_phrase(phrase)?;
        let mut seed = mnemonic.to_seed(passphrase);
        let wallet = Self::from_seed(seed.to_vec(), network);
        seed.zeroize();
        Ok(wallet)
    }

    /// Constructs a wallet directly from a BIP 32 seed.
    ///
    /// The HD key engine accepts seeds of 16, 32 or 64 bytes. The length is checked when
    /// keys are derived; see [`KeyNode::from_seed`].
    pub fn from_seed(seed: Vec<u8>, network: Network) -> Self {
        SeedWallet {
            seed: SecretVec::new(seed),
            network,
        }
    }

    /// Returns the network this wallet serializes keys for.
    pub fn network(&self) -> Network {
        self.network
    }

    fn root(&self) -> Result<KeyNode, DerivationError> {
        KeyNode::from_seed(self.seed.expose_secret(), self.network)
    }

    /// Returns the master private key, encoded as `zprv` or `vprv`.
    pub fn root_private(&self) -> Result<String, DerivationError> {
        Ok(self.root()?.to_alternate_string())
    }

    /// Returns the master public key, encoded as `zpub` or `vpub`.
    pub fn root_public(&self) -> Result<String, DerivationError> {
        Ok(self.root()?.neuter().to_alternate_string())
    }

    fn account_node(&self, account: AccountId) -> Result<KeyNode, DerivationError> {
        let path = DerivationPath::account(account);
        debug!(network = ?self.network, path = %path, "Deriving account key");
        self.root()?.derive_path(&path)
    }

    /// Returns the private key for the account at `m/84'/0'/<account>'`, encoded as
    /// `zprv` or `vprv`.
    pub fn derive_account(&self, account: AccountId) -> Result<String, DerivationError> {
        Ok(self.account_node(account)?.to_alternate_string())
    }

    /// Returns the public key for the account at `m/84'/0'/<account>'`, encoded as
    /// `zpub` or `vpub`.
    pub fn derive_account_public(&self, account: AccountId) -> Result<String, DerivationError> {
        Ok(self.account_node(account)?.neuter().to_alternate_string())
    }
}
