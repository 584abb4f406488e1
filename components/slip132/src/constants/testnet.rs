//! Constants for the Bitcoin test network.

/// The version prefix for a [SLIP 132] `vprv` extended private key (BIP 84, P2WPKH).
///
/// [SLIP 132]: https://github.com/satoshilabs/slips/blob/master/slip-0132.md
pub const VPRV_VERSION: [u8; 4] = [0x04, 0x5f, 0x18, 0xbc];

/// The version prefix for a [SLIP 132] `vpub` extended public key (BIP 84, P2WPKH).
///
/// [SLIP 132]: https://github.com/satoshilabs/slips/blob/master/slip-0132.md
pub const VPUB_VERSION: [u8; 4] = [0x04, 0x5f, 0x1c, 0xf6];

/// The version prefix for a [BIP 32] `tprv` extended private key.
///
/// [BIP 32]: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
pub const TPRV_VERSION: [u8; 4] = [0x04, 0x35, 0x83, 0x94];

/// The version prefix for a [BIP 32] `tpub` extended public key.
///
/// [BIP 32]: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
pub const TPUB_VERSION: [u8; 4] = [0x04, 0x35, 0x87, 0xcf];

/// The HRP for a Bech32-encoded testnet segwit address.
///
/// Defined in [BIP 173].
///
/// [BIP 173]: https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki
pub const HRP_SEGWIT: &str = "tb";

/// The prefix for a Base58Check-encoded testnet secret key in Wallet Import Format.
pub const B58_SECRET_KEY_PREFIX: u8 = 0xef;
