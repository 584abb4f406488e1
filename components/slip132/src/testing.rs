//! `proptest` strategies for SLIP 132 types.

use alloc::string::String;
use alloc::vec::Vec;

use proptest::collection::vec;
use proptest::prelude::*;

use crate::codec::PAYLOAD_LENGTH;
use crate::{KeyVisibility, Network, Prefix, Scheme};

pub fn arb_network() -> impl Strategy<Value = Network> {
    prop_oneof![Just(Network::Main), Just(Network::Test)]
}

pub fn arb_visibility() -> impl Strategy<Value = KeyVisibility> {
    prop_oneof![Just(KeyVisibility::Private), Just(KeyVisibility::Public)]
}

/// Arbitrary payload bytes of the correct length. The bytes are not required to
/// describe a valid key.
pub fn arb_payload() -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), PAYLOAD_LENGTH)
}

/// A syntactically valid SLIP 132 string, together with the values it encodes.
pub fn arb_alternate_encoding() -> impl Strategy<Value = (Network, KeyVisibility, Vec<u8>, String)>
{
    (arb_network(), arb_visibility(), arb_payload()).prop_map(|(network, visibility, payload)| {
        let mut bytes = Prefix::lookup(Scheme::Alternate, network, visibility)
            .to_bytes()
            .to_vec();
        bytes.extend_from_slice(&payload);
        let encoded = bs58::encode(bytes).with_check().into_string();
        (network, visibility, payload, encoded)
    })
}
