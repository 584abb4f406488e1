//! BIP 32 key nodes and the index types used to navigate a BIP 84 key tree.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use bip32::{ChildNumber, XPrv, XPub};
use secrecy::Zeroize;
use slip132::{KeyVisibility, Network, Scheme};
use subtle::{Choice, ConstantTimeEq};
use tracing::trace;

use crate::encoding::encode_wif;

/// The BIP 43 purpose index for native segwit (P2WPKH) keys, as defined by [BIP 84].
///
/// [BIP 84]: https://github.com/bitcoin/bips/blob/master/bip-0084.mediawiki
pub const PURPOSE: u32 = 84;

/// The coin type used at the second level of the account path.
///
/// This is `0'` on both networks; the network is carried by the key prefixes instead.
pub const COIN_TYPE: u32 = 0;

/// Errors that can occur while deriving or serializing keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DerivationError {
    /// A private key was requested from a node that holds only public key material.
    NoPrivateKey,
    /// A hardened child at the given index was requested from a public node.
    HardenedFromPublic(u32),
    /// The HD key engine rejected the operation.
    Bip32(bip32::Error),
}

impl fmt::Display for DerivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DerivationError::NoPrivateKey => {
                write!(f, "The key node does not hold a private key.")
            }
            DerivationError::HardenedFromPublic(i) => write!(
                f,
                "Cannot derive hardened child {}' from a public key node.",
                i
            ),
            DerivationError::Bip32(e) => write!(f, "BIP 32 error: {}", e),
        }
    }
}

impl std::error::Error for DerivationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DerivationError::Bip32(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bip32::Error> for DerivationError {
    fn from(e: bip32::Error) -> Self {
        DerivationError::Bip32(e)
    }
}

/// A type-safe wrapper for account identifiers.
///
/// Accounts are 31-bit unsigned integers, and are always treated as hardened in
/// derivation paths.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(u32);

impl AccountId {
    /// The first account.
    pub const ZERO: AccountId = AccountId(0);
}

impl TryFrom<u32> for AccountId {
    type Error = ();

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        if id < (1 << 31) {
            Ok(Self(id))
        } else {
            Err(())
        }
    }
}

impl From<AccountId> for u32 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl From<AccountId> for ChildNumber {
    fn from(id: AccountId) -> Self {
        ChildNumber::new(id.0, true).expect("AccountId is correct by construction")
    }
}

/// The scope of an address-level key: the `change` level of the BIP 84 key path.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KeyScope(u32);

impl KeyScope {
    /// The scope used to derive keys for receiving addresses.
    pub const EXTERNAL: Self = KeyScope(0);

    /// The scope used to derive keys for change addresses.
    pub const INTERNAL: Self = KeyScope(1);

    /// Selects the scope for a caller-supplied change flag.
    ///
    /// Only a boolean `true` selects [`KeyScope::INTERNAL`]; see [`ChangeFlag`].
    pub fn from_change_flag<F: ChangeFlag>(is_change: F) -> Self {
        if is_change.selects_change() {
            KeyScope::INTERNAL
        } else {
            KeyScope::EXTERNAL
        }
    }

    /// Returns the index of this scope in the derivation path.
    pub const fn index(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for KeyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EXTERNAL => f.write_str("KeyScope::EXTERNAL"),
            Self::INTERNAL => f.write_str("KeyScope::INTERNAL"),
            KeyScope(other) => write!(f, "KeyScope({})", other),
        }
    }
}

impl From<KeyScope> for ChildNumber {
    fn from(value: KeyScope) -> Self {
        ChildNumber::new(value.0, false).expect("KeyScope is correct by construction")
    }
}

/// A value that may be passed where an "is change" flag is expected.
///
/// The change chain is selected only by a value that is exactly the boolean `true`.
/// Every other value, including non-boolean values that would conventionally be read as
/// "truthy" (such as `1` or `"yes"`), selects the receive chain.
pub trait ChangeFlag {
    /// Returns `true` if this value selects the change chain.
    fn selects_change(&self) -> bool {
        false
    }
}

impl ChangeFlag for bool {
    fn selects_change(&self) -> bool {
        *self
    }
}

macro_rules! receive_chain_only {
    ($($t:ty),* $(,)?) => {
        $(impl ChangeFlag for $t {})*
    };
}

receive_chain_only!(
    u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, char, &str, String, Option<bool>, (),
);

/// A child index for a derived address.
///
/// Only NON-hardened derivation is supported.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonHardenedChildIndex(u32);

impl fmt::Debug for NonHardenedChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NonHardenedChildIndex({})", self.0)
    }
}

impl ConstantTimeEq for NonHardenedChildIndex {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl NonHardenedChildIndex {
    /// The minimum valid non-hardened child index.
    pub const ZERO: NonHardenedChildIndex = NonHardenedChildIndex(0);

    /// The maximum valid non-hardened child index.
    pub const MAX: NonHardenedChildIndex = NonHardenedChildIndex((1 << 31) - 1);

    /// Parses the given BIP 32 child index.
    ///
    /// Returns `None` if the hardened bit is set.
    pub const fn from_index(i: u32) -> Option<Self> {
        if i <= Self::MAX.0 {
            Some(NonHardenedChildIndex(i))
        } else {
            None
        }
    }

    /// Constructs a [`NonHardenedChildIndex`] from a BIP 32 child index.
    ///
    /// Panics: if the hardened bit is set.
    pub const fn const_from_index(i: u32) -> Self {
        assert!(i <= Self::MAX.0);
        NonHardenedChildIndex(i)
    }

    /// Returns the index as a 32-bit integer.
    pub const fn index(&self) -> u32 {
        self.0
    }

    /// Returns the successor to this index.
    pub const fn next(&self) -> Option<Self> {
        // self.0 is at most 31 bits, so the addition cannot overflow.
        Self::from_index(self.0 + 1)
    }
}

impl TryFrom<ChildNumber> for NonHardenedChildIndex {
    type Error = ();

    fn try_from(value: ChildNumber) -> Result<Self, Self::Error> {
        if value.is_hardened() {
            Err(())
        } else {
            NonHardenedChildIndex::from_index(value.index()).ok_or(())
        }
    }
}

impl From<NonHardenedChildIndex> for ChildNumber {
    fn from(value: NonHardenedChildIndex) -> Self {
        Self::new(value.index(), false).expect("NonHardenedChildIndex is correct by construction")
    }
}

/// An end-exclusive iterator over a range of non-hardened child indexes.
pub struct NonHardenedChildIter {
    next: Option<NonHardenedChildIndex>,
    end: NonHardenedChildIndex,
}

impl Iterator for NonHardenedChildIter {
    type Item = NonHardenedChildIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.next;
        self.next = self
            .next
            .and_then(|i| i.next())
            .filter(|succ| succ < &self.end);
        cur
    }
}

/// An end-exclusive range of non-hardened child indexes.
pub struct NonHardenedChildRange(core::ops::Range<NonHardenedChildIndex>);

impl From<core::ops::Range<NonHardenedChildIndex>> for NonHardenedChildRange {
    fn from(value: core::ops::Range<NonHardenedChildIndex>) -> Self {
        Self(value)
    }
}

impl IntoIterator for NonHardenedChildRange {
    type Item = NonHardenedChildIndex;
    type IntoIter = NonHardenedChildIter;

    fn into_iter(self) -> Self::IntoIter {
        NonHardenedChildIter {
            next: Some(self.0.start).filter(|start| start < &self.0.end),
            end: self.0.end,
        }
    }
}

/// An ordered sequence of BIP 32 derivation steps, starting at the master node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivationPath(Vec<ChildNumber>);

impl DerivationPath {
    /// The BIP 84 account path `m/84'/0'/<account>'`.
    pub fn account(account: AccountId) -> Self {
        DerivationPath(vec![
            ChildNumber::new(PURPOSE, true).expect("purpose is below the hardened bit"),
            ChildNumber::new(COIN_TYPE, true).expect("coin type is below the hardened bit"),
            account.into(),
        ])
    }

    /// The BIP 84 address path `m/84'/0'/<account>'/<change>/<address_index>`.
    pub fn address(
        account: AccountId,
        scope: KeyScope,
        address_index: NonHardenedChildIndex,
    ) -> Self {
        let mut path = Self::account(account);
        path.0.push(scope.into());
        path.0.push(address_index.into());
        path
    }

    /// Returns the steps of this path, outermost first.
    pub fn steps(&self) -> &[ChildNumber] {
        &self.0
    }
}

impl From<Vec<ChildNumber>> for DerivationPath {
    fn from(steps: Vec<ChildNumber>) -> Self {
        DerivationPath(steps)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for step in &self.0 {
            write!(f, "/{}", step.index())?;
            if step.is_hardened() {
                f.write_str("'")?;
            }
        }
        Ok(())
    }
}

#[derive(Clone)]
enum NodeKey {
    Private(XPrv),
    Public(XPub),
}

/// A node in a BIP 32 key tree, bound to the network it is serialized for.
///
/// This is a thin layer over the HD key engine; it only ever speaks the canonical
/// `xprv`/`xpub`/`tprv`/`tpub` encodings.
#[derive(Clone)]
pub struct KeyNode {
    network: Network,
    key: NodeKey,
}

impl fmt::Debug for KeyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyNode")
            .field("network", &self.network)
            .field("visibility", &self.visibility())
            .finish_non_exhaustive()
    }
}

impl KeyNode {
    /// Derives the master node from a seed.
    ///
    /// The seed must be 16, 32 or 64 bytes long; any other length is rejected with
    /// [`bip32::Error::SeedLength`].
    pub fn from_seed(seed: &[u8], network: Network) -> Result<Self, DerivationError> {
        Ok(KeyNode {
            network,
            key: NodeKey::Private(XPrv::new(seed)?),
        })
    }

    /// Parses a node from its canonical (`xprv`/`xpub`/`tprv`/`tpub`) encoding.
    pub fn from_canonical_str(
        encoded: &str,
        network: Network,
        visibility: KeyVisibility,
    ) -> Result<Self, bip32::Error> {
        let key = match visibility {
            KeyVisibility::Private => NodeKey::Private(XPrv::from_str(encoded)?),
            KeyVisibility::Public => NodeKey::Public(XPub::from_str(encoded)?),
        };
        Ok(KeyNode { network, key })
    }

    /// Returns the network this node is serialized for.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Returns whether this node holds private key material.
    pub fn visibility(&self) -> KeyVisibility {
        match self.key {
            NodeKey::Private(_) => KeyVisibility::Private,
            NodeKey::Public(_) => KeyVisibility::Public,
        }
    }

    /// Derives the child of this node at the given index.
    ///
    /// Hardened derivation requires this node to hold private key material.
    pub fn derive_child(&self, index: u32, hardened: bool) -> Result<Self, DerivationError> {
        let child_number = ChildNumber::new(index, hardened)?;
        let key = match &self.key {
            NodeKey::Private(xprv) => NodeKey::Private(xprv.derive_child(child_number)?),
            NodeKey::Public(_) if hardened => {
                return Err(DerivationError::HardenedFromPublic(index))
            }
            NodeKey::Public(xpub) => NodeKey::Public(xpub.derive_child(child_number)?),
        };
        Ok(KeyNode {
            network: self.network,
            key,
        })
    }

    /// Derives the descendant of this node along every step of `path`.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self, DerivationError> {
        trace!(path = %path, "Deriving key node");
        path.steps().iter().try_fold(self.clone(), |node, step| {
            node.derive_child(step.index(), step.is_hardened())
        })
    }

    /// Returns the public-only counterpart of this node.
    ///
    /// Neutering an already public node returns it unchanged.
    pub fn neuter(&self) -> Self {
        let key = match &self.key {
            NodeKey::Private(xprv) => NodeKey::Public(xprv.public_key()),
            NodeKey::Public(xpub) => NodeKey::Public(xpub.clone()),
        };
        KeyNode {
            network: self.network,
            key,
        }
    }

    /// Serializes this node with the canonical prefix for its network and visibility.
    pub fn to_canonical_string(&self) -> String {
        match &self.key {
            NodeKey::Private(xprv) => xprv
                .to_string(engine_prefix(self.network, KeyVisibility::Private))
                .as_str()
                .to_string(),
            NodeKey::Public(xpub) => {
                xpub.to_string(engine_prefix(self.network, KeyVisibility::Public))
            }
        }
    }

    /// Serializes this node with the SLIP 132 prefix for its network and visibility.
    pub fn to_alternate_string(&self) -> String {
        slip132::to_alternate(self.network, self.visibility(), &self.to_canonical_string())
            .expect("the HD key engine produces valid base58check")
    }

    /// Returns the private key of this node in Wallet Import Format (compressed).
    pub fn private_key_wif(&self) -> Result<String, DerivationError> {
        match &self.key {
            NodeKey::Private(xprv) => {
                let mut secret = xprv.to_bytes();
                let wif = encode_wif(self.network, &secret);
                secret.zeroize();
                Ok(wif)
            }
            NodeKey::Public(_) => Err(DerivationError::NoPrivateKey),
        }
    }

    /// Returns the compressed SEC1 encoding of this node's public key.
    pub fn public_key_bytes(&self) -> [u8; 33] {
        match &self.key {
            NodeKey::Private(xprv) => xprv.public_key().to_bytes(),
            NodeKey::Public(xpub) => xpub.to_bytes(),
        }
    }

    /// Returns the hex encoding of this node's compressed public key.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key_bytes())
    }
}

/// Returns the engine's representation of the canonical prefix for the given network
/// and visibility.
fn engine_prefix(network: Network, visibility: KeyVisibility) -> bip32::Prefix {
    match slip132::Prefix::lookup(Scheme::Canonical, network, visibility) {
        slip132::Prefix::XPRV => bip32::Prefix::XPRV,
        slip132::Prefix::XPUB => bip32::Prefix::XPUB,
        slip132::Prefix::TPRV => bip32::Prefix::TPRV,
        slip132::Prefix::TPUB => bip32::Prefix::TPUB,
        _ => unreachable!("canonical lookup returns one of the four BIP 32 prefixes"),
    }
}


#[cfg(any(test, feature = "test-dependencies"))]
pub mod testing {
    use alloc::vec::Vec;

    use proptest::prelude::*;

    use super::{AccountId, KeyScope, NonHardenedChildIndex};

    pub fn arb_account_id() -> impl Strategy<Value = AccountId> {
        (0u32..(1 << 31)).prop_map(|i| AccountId::try_from(i).unwrap())
    }

    pub fn arb_nonhardened_index() -> impl Strategy<Value = NonHardenedChildIndex> {
        (0u32..(1 << 31)).prop_map(NonHardenedChildIndex::const_from_index)
    }

    /// Seeds of every length the HD key engine accepts.
    pub fn arb_seed() -> impl Strategy<Value = Vec<u8>> {
        prop_oneof![Just(16usize), Just(32), Just(64)]
            .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
    }

    pub fn arb_key_scope() -> impl Strategy<Value = KeyScope> {
        prop_oneof![Just(KeyScope::EXTERNAL), Just(KeyScope::INTERNAL)]
    }
}
