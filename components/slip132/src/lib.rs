//! *SLIP 132 version prefixes for BIP 84 extended keys.*
//!
//! A [BIP 32] extended key is serialized as `base58check(version ‖ payload)`, where the
//! four-byte version prefix tells the reader which network the key belongs to and
//! whether it carries private key material. General-purpose HD wallet tooling only
//! understands the canonical `xprv`/`xpub` (mainnet) and `tprv`/`tpub` (testnet)
//! prefixes. Wallets following [SLIP 132] instead tag native segwit ([BIP 84]) keys
//! with `zprv`/`zpub` (mainnet) and `vprv`/`vpub` (testnet).
//!
//! This crate holds the fixed table of both prefix sets ([`Prefix::lookup`] and its
//! inverse over the SLIP 132 set, [`Prefix::identify`]) and a codec ([`codec`]) that
//! swaps one prefix for the other without interpreting the rest of the payload.
//!
//! [BIP 32]: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
//! [BIP 84]: https://github.com/bitcoin/bips/blob/master/bip-0084.mediawiki
//! [SLIP 132]: https://github.com/satoshilabs/slips/blob/master/slip-0132.md

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
#[cfg_attr(any(test, feature = "test-dependencies"), macro_use)]
extern crate std;

use core::fmt;

pub mod codec;
pub mod constants;

#[cfg(any(test, feature = "test-dependencies"))]
pub mod testing;

pub use codec::{decode_alternate, to_alternate, to_canonical, DecodeError, ExtendedKeyPayload};

use constants::{mainnet, testnet};

/// The Bitcoin network a key or address belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Network {
    /// The Bitcoin main network.
    Main,
    /// The Bitcoin test network.
    Test,
}

/// Whether an extended key carries private key material.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KeyVisibility {
    Private,
    Public,
}

impl fmt::Display for KeyVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyVisibility::Private => f.write_str("private"),
            KeyVisibility::Public => f.write_str("public"),
        }
    }
}

/// A family of extended key version prefixes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// The [SLIP 132] prefixes for BIP 84 keys: `zprv`, `zpub`, `vprv` and `vpub`.
    ///
    /// [SLIP 132]: https://github.com/satoshilabs/slips/blob/master/slip-0132.md
    Alternate,
    /// The [BIP 32] prefixes: `xprv`, `xpub`, `tprv` and `tpub`.
    ///
    /// [BIP 32]: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
    Canonical,
}

/// A four-byte extended key version prefix.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Prefix([u8; 4]);

impl Prefix {
    /// The length of a serialized prefix, in bytes.
    pub const LENGTH: usize = 4;

    pub const ZPRV: Prefix = Prefix(mainnet::ZPRV_VERSION);
    pub const ZPUB: Prefix = Prefix(mainnet::ZPUB_VERSION);
    pub const XPRV: Prefix = Prefix(mainnet::XPRV_VERSION);
    pub const XPUB: Prefix = Prefix(mainnet::XPUB_VERSION);
    pub const VPRV: Prefix = Prefix(testnet::VPRV_VERSION);
    pub const VPUB: Prefix = Prefix(testnet::VPUB_VERSION);
    pub const TPRV: Prefix = Prefix(testnet::TPRV_VERSION);
    pub const TPUB: Prefix = Prefix(testnet::TPUB_VERSION);

    /// Constructs a prefix from its raw bytes. Any value is accepted.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Prefix(bytes)
    }

    /// Returns the raw bytes of this prefix.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0
    }

    /// Returns the prefix used by `scheme` for keys of the given network and visibility.
    ///
    /// Exactly one prefix exists for every combination.
    pub const fn lookup(scheme: Scheme, network: Network, visibility: KeyVisibility) -> Self {
        use KeyVisibility::*;
        use Network::*;
        use Scheme::*;

        match (scheme, network, visibility) {
            (Alternate, Main, Private) => Prefix::ZPRV,
            (Alternate, Main, Public) => Prefix::ZPUB,
            (Alternate, Test, Private) => Prefix::VPRV,
            (Alternate, Test, Public) => Prefix::VPUB,
            (Canonical, Main, Private) => Prefix::XPRV,
            (Canonical, Main, Public) => Prefix::XPUB,
            (Canonical, Test, Private) => Prefix::TPRV,
            (Canonical, Test, Public) => Prefix::TPUB,
        }
    }

    /// Returns the network and visibility this prefix denotes under the
    /// [`Scheme::Alternate`] table.
    ///
    /// Canonical prefixes are deliberately not recognized: a key that is already in
    /// `xprv`/`tpub`/... form is never accepted as SLIP 132 input.
    pub const fn identify(self) -> Option<(Network, KeyVisibility)> {
        match self.0 {
            mainnet::ZPRV_VERSION => Some((Network::Main, KeyVisibility::Private)),
            mainnet::ZPUB_VERSION => Some((Network::Main, KeyVisibility::Public)),
            testnet::VPRV_VERSION => Some((Network::Test, KeyVisibility::Private)),
            testnet::VPUB_VERSION => Some((Network::Test, KeyVisibility::Public)),
            _ => None,
        }
    }

    /// Returns the conventional four-character name of this prefix, if it is one of the
    /// prefixes known to this crate.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            mainnet::ZPRV_VERSION => Some("zprv"),
            mainnet::ZPUB_VERSION => Some("zpub"),
            mainnet::XPRV_VERSION => Some("xprv"),
            mainnet::XPUB_VERSION => Some("xpub"),
            testnet::VPRV_VERSION => Some("vprv"),
            testnet::VPUB_VERSION => Some("vpub"),
            testnet::TPRV_VERSION => Some("tprv"),
            testnet::TPUB_VERSION => Some("tpub"),
            _ => None,
        }
    }
}

impl fmt::Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prefix({})", self)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:08x}", u32::from_be_bytes(self.0)),
        }
    }
}

/// Constants associated with a given Bitcoin network.
pub trait NetworkConstants: Clone {
    /// Returns the human-readable prefix for Bech32-encoded segwit addresses on this
    /// network.
    ///
    /// Defined in [BIP 173].
    ///
    /// [BIP 173]: https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki
    fn hrp_segwit(&self) -> &'static str;

    /// Returns the leading byte of a Wallet Import Format secret key for this network.
    fn b58_secret_key_prefix(&self) -> u8;

    /// Returns the extended key version prefix for this network under the given scheme.
    fn extended_key_prefix(&self, scheme: Scheme, visibility: KeyVisibility) -> Prefix;
}

impl NetworkConstants for Network {
    fn hrp_segwit(&self) -> &'static str {
        match self {
            Network::Main => mainnet::HRP_SEGWIT,
            Network::Test => testnet::HRP_SEGWIT,
        }
    }

    fn b58_secret_key_prefix(&self) -> u8 {
        match self {
            Network::Main => mainnet::B58_SECRET_KEY_PREFIX,
            Network::Test => testnet::B58_SECRET_KEY_PREFIX,
        }
    }

    fn extended_key_prefix(&self, scheme: Scheme, visibility: KeyVisibility) -> Prefix {
        Prefix::lookup(scheme, *self, visibility)
    }
}
