//! Network-specific Bitcoin constants.

pub mod mainnet;
pub mod testnet;
