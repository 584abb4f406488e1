//! Constants for the Bitcoin main network.

/// The version prefix for a [SLIP 132] `zprv` extended private key (BIP 84, P2WPKH).
///
/// [SLIP 132]: https://github.com/satoshilabs/slips/blob/master/slip-0132.md
pub const ZPRV_VERSION: [u8; 4] = [0x04, 0xb2, 0x43, 0x0c];

/// The version prefix for a [SLIP 132] `zpub` extended public key (BIP 84, P2WPKH).
///
/// [SLIP 132]: https://github.com/satoshilabs/slips/blob/master/slip-0132.md
pub const ZPUB_VERSION: [u8; 4] = [0x04, 0xb2, 0x47, 0x46];

/// The version prefix for a [BIP 32] `xprv` extended private key.
///
/// [BIP 32]: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
pub const XPRV_VERSION: [u8; 4] = [0x04, 0x88, 0xad, 0xe4];

/// The version prefix for a [BIP 32] `xpub` extended public key.
///
/// [BIP 32]: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
pub const XPUB_VERSION: [u8; 4] = [0x04, 0x88, 0xb2, 0x1e];

/// The HRP for a Bech32-encoded mainnet segwit address.
///
/// Defined in [BIP 173].
///
/// [BIP 173]: https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki
pub const HRP_SEGWIT: &str = "bc";

/// The prefix for a Base58Check-encoded mainnet secret key in Wallet Import Format.
pub const B58_SECRET_KEY_PREFIX: u8 = 0x80;
