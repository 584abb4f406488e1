//! *BIP 84 native segwit keys and addresses.*
//!
//! `bip84_keys` derives [BIP 84] account keys from a BIP 39 mnemonic and serializes
//! them with the [SLIP 132] `zprv`/`zpub` (mainnet) and `vprv`/`vpub` (testnet)
//! prefixes. An imported account key can then produce the private keys, public keys and
//! P2WPKH addresses on its receive and change chains.
//!
//! - [`SeedWallet`] holds a seed and derives root and account keys from it.
//! - [`AccountPrivKey`] and [`AccountPubKey`] are sessions over an imported account
//!   key; the operations they share are on the [`AccountKey`] trait.
//!
//! # Examples
//!
//! ```
//! use bip84_keys::{AccountId, AccountKey, AccountPrivKey, Network, NonHardenedChildIndex, SeedWallet};
//!
//! let wallet = SeedWallet::from_mnemonic(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     Network::Main,
//! )?;
//! let account = AccountPrivKey::decode(&wallet.derive_account(AccountId::ZERO)?)?;
//! assert_eq!(
//!     account.address(NonHardenedChildIndex::ZERO, false)?,
//!     "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu",
//! );
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! [BIP 84]: https://github.com/bitcoin/bips/blob/master/bip-0084.mediawiki
//! [SLIP 132]: https://github.com/satoshilabs/slips/blob/master/slip-0132.md
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
//!

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]
// `TryFrom<u32>` impls report out-of-range values as `()`.
#![allow(clippy::result_unit_err)]

extern crate alloc;

pub mod account;
pub mod address;
pub mod encoding;
pub mod keys;
pub mod wallet;

#[cfg(test)]
mod test_vectors;

pub use account::{AccountKey, AccountPrivKey, AccountPubKey, DecodingError};
pub use address::WitnessAddress;
pub use keys::{
    AccountId, ChangeFlag, DerivationError, DerivationPath, KeyNode, KeyScope,
    NonHardenedChildIndex, NonHardenedChildRange,
};
pub use slip132::{KeyVisibility, Network};
pub use wallet::SeedWallet;
