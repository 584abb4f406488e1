//! BIP 84 test vectors for the all-`abandon` mnemonic.
//!
//! The mainnet values match those published in BIP 84; the testnet values use the same
//! derivation path with testnet prefixes.

use alloc::vec::Vec;

use slip132::Network;

pub(crate) const MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

pub(crate) const SEED: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

pub(crate) struct AccountVector {
    pub(crate) account: u32,
    pub(crate) private: &'static str,
    pub(crate) public: &'static str,
    pub(crate) canonical_private: &'static str,
    pub(crate) canonical_public: &'static str,
}

pub(crate) struct AddressVector {
    pub(crate) account: u32,
    pub(crate) is_change: bool,
    pub(crate) index: u32,
    pub(crate) wif: &'static str,
    pub(crate) pubkey: &'static str,
    pub(crate) address: &'static str,
}

pub(crate) struct NetworkVector {
    pub(crate) network: Network,
    pub(crate) root_private: &'static str,
    pub(crate) root_public: &'static str,
    pub(crate) root_canonical_private: &'static str,
    pub(crate) root_canonical_public: &'static str,
    pub(crate) accounts: Vec<AccountVector>,
    pub(crate) addresses: Vec<AddressVector>,
}

impl NetworkVector {
    pub(crate) fn seed(&self) -> Vec<u8> {
        hex::decode(SEED).unwrap()
    }
}

pub(crate) fn bip_84() -> Vec<NetworkVector> {
    vec![
        NetworkVector {
            network: Network::Main,
            root_private: "zprvAWgYBBk7JR8Gjrh4UJQ2uJdG1r3WNRRfURiABBE3RvMXYSrRJL62XuezvGdPvG6GFBZduosCc1YP5wixPox7zhZLfiUm8aunE96BBa4Kei5",
            root_public: "zpub6jftahH18ngZxLmXaKw3GSZzZsszmt9WqedkyZdezFtWRFBZqsQH5hyUmb4pCEeZGmVfQuP5bedXTB8is6fTv19U1GQRyQUKQGUTzyHACMF",
            root_canonical_private: "xprv9s21ZrQH143K3GJpoapnV8SFfukcVBSfeCficPSGfubmSFDxo1kuHnLisriDvSnRRuL2Qrg5ggqHKNVpxR86QEC8w35uxmGoggxtQTPvfUu",
            root_canonical_public: "xpub661MyMwAqRbcFkPHucMnrGNzDwb6teAX1RbKQmqtEF8kK3Z7LZ59qafCjB9eCRLiTVG3uxBxgKvRgbubRhqSKXnGGb1aoaqLrpMBDrVxga8",
            accounts: vec![
                AccountVector {
                    account: 0,
                    private: "zprvAdG4iTXWBoARxkkzNpNh8r6Qag3irQB8PzEMkAFeTRXxHpbF9z4QgEvBRmfvqWvGp42t42nvgGpNgYSJA9iefm1yYNZKEm7z6qUWCroSQnE",
                    public: "zpub6rFR7y4Q2AijBEqTUquhVz398htDFrtymD9xYYfG1m4wAcvPhXNfE3EfH1r1ADqtfSdVCToUG868RvUUkgDKf31mGDtKsAYz2oz2AGutZYs",
                    canonical_private: "xprv9ybY78BftS5UGANki6oSifuQEjkpyAC8ZmBvBNTshQnCBcxnefjHS7buPMkkqhcRzmoGZ5bokx7GuyDAiktd5HemohAU4wV1ZPMDRmLpBMm",
                    canonical_public: "xpub6CatWdiZiodmUeTDp8LT5or8nmbKNcuyvz7WyksVFkKB4RHwCD3XyuvPEbvqAQY3rAPshWcMLoP2fMFMKHPJ4ZeZXYVUhLv1VMrjPC7PW6V",
                },
                AccountVector {
                    account: 1,
                    private: "zprvAdG4iTXWBoAS2cCGuaGevCvH54GCunrvLJb2hoWCSuE3D9LS42XVg3c6sPm64w6VMq3w18vJf8nF3cBA2kUMkyWHsq6enWVXivzw42UrVHG",
                    public: "zpub6rFR7y4Q2AijF6Gk1bofHLs1d66hKFamhXWdWBup1Em25wfabZqkDqvaieV63fDQFaYmaatCG7jVNUpUiM2hAMo6SAVHcrUpSnHDpNzucB7",
                    canonical_private: "xprv9ybY78BftS5UL1p3ErhQW2jGj7yK2YsvW5Yb91iRgtUH6whyYiCNRvHppyqv57neYYpKWBjBjp59H2x2bMeLAW9699hocgrZBUseGoQ7ERD",
                    canonical_public: "xpub6CatWdiZiodmYVtWLtEQsAg1H9ooS1bmsJUBwQ83FE1Fyk386FWcyicJgEZv3quZSJKA5dh5Lo2PbubMGxCfZtRthV6ST2qquL9w3HSzcUn",
                },
            ],
            addresses: vec![
                AddressVector {
                    account: 0,
                    is_change: false,
                    index: 0,
                    wif: "KyZpNDKnfs94vbrwhJneDi77V6jF64PWPF8x5cdJb8ifgg2DUc9d",
                    pubkey: "0330d54fd0dd420a6e5f8d3624f5f3482cae350f79d5f0753bf5beef9c2d91af3c",
                    address: "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu",
                },
                AddressVector {
                    account: 0,
                    is_change: false,
                    index: 1,
                    wif: "Kxpf5b8p3qX56DKEe5NqWbNUP9MnqoRFzZwHRtsFqhzuvUJsYZCy",
                    pubkey: "03e775fd51f0dfb8cd865d9ff1cca2a158cf651fe997fdc9fee9c1d3b5e995ea77",
                    address: "bc1qnjg0jd8228aq7egyzacy8cys3knf9xvrerkf9g",
                },
                AddressVector {
                    account: 0,
                    is_change: true,
                    index: 0,
                    wif: "KxuoxufJL5csa1Wieb2kp29VNdn92Us8CoaUG3aGtPtcF3AzeXvF",
                    pubkey: "03025324888e429ab8e3dbaf1f7802648b9cd01e9b418485c5fa4c1b9b5700e1a6",
                    address: "bc1q8c6fshw2dlwun7ekn9qwf37cu2rn755upcp6el",
                },
                AddressVector {
                    account: 0,
                    is_change: true,
                    index: 1,
                    wif: "KyDKM6os4SNpyCN79CGaZF91vVtzmnragXN7A3qAxVvFDws9jBqh",
                    pubkey: "03dcf71df71c755b3af46f7e84b4182e6291cec5a8c630f775638a739da29adcb6",
                    address: "bc1qggnasd834t54yulsep6fta8lpjekv4zj6gv5rf",
                },
                AddressVector {
                    account: 1,
                    is_change: false,
                    index: 0,
                    wif: "L4ouJZjss1Ua8LPhsJNkzN8V8uXrQpfADNsqzsaT5JHs1G752c9j",
                    pubkey: "035ce17d6438a499e0c7fef59b43fd7b2cb6e4a31b598f6a4c20ca94854eac9d36",
                    address: "bc1qku0qh0mc00y8tk0n65x2tqw4trlspak0fnjmfz",
                },
                AddressVector {
                    account: 1,
                    is_change: false,
                    index: 1,
                    wif: "L5LuazFqJdubVg7kvjHq9wuC47eMiMbTLhTUeQz6GL4oKC9yBTa1",
                    pubkey: "0366dc739a33f2c600b99927735bd2feea5c1d78142d2d0d3917623c4af09e8bbc",
                    address: "bc1qx0tpa0ctsy5v8xewdkpf69hhtz5cw0rf5uvyj6",
                },
                AddressVector {
                    account: 1,
                    is_change: true,
                    index: 0,
                    wif: "L3BwM9wRofkEzgJh26x3hr2fKRtxVsPoWUfn3cK31S8FSge4yn1e",
                    pubkey: "025695996d13031c54896990e6e38db5849f5a64fa81142b452d6e23c36fd83880",
                    address: "bc1qt0x83f5vmnapgl2gjj9r3d67rcghvjaqrvgpck",
                },
                AddressVector {
                    account: 1,
                    is_change: true,
                    index: 1,
                    wif: "KxqjwaVQjXJuTRRENBzCmpFXW5ztWYo4nm1QUS2T9gsyUHoPgNcC",
                    pubkey: "026c91ef2bebab59bb67f9d5b6cf67fd903f583f6b6a1b5c6a4f5343e32bacdcd9",
                    address: "bc1qa7mufelw8xtut05n0pt8cn7dwfy99lhwxp93yf",
                },
            ],
        },
        NetworkVector {
            network: Network::Test,
            root_private: "vprv9DMUxX4ShgxMLfvb8sFY4xFFKyTibwTfoydH3beVutr1L3bWHhRn3f2SqSo3vdUacd6QuuUxmN8BYoGhX2J4okpwCMh4nwdq9EqbdGgioRF",
            root_public: "vpub5SLqN2bLY4WeZA14EtnYS6Byt1JD1QBXBCYsqz47UENzCqveqEk2bTLvgmEUCc2seD2SQzzqm1DKv2gTzK1Qj4R4XucjdmCNKNDtSgckK7x",
            root_canonical_private: "tprv8ZgxMBicQKsPe5YMU9gHen4Ez3ApihUfykaqUorj9t6FDqy3nP6eoXiAo2ssvpAjoLroQxHqr3R5nE3a5dU3DHTjTgJDd7zrbniJr6nrCzd",
            root_canonical_public: "tpubD6NzVbkrYhZ4XYa9MoLt4BiMZ4gkt2faZ4BcmKu2a9te4LDpQmvEz2L2yDERivHxFPnxXXhqDRkUNnQCpZggCyEZLBktV7VaSmwayqMJy1s",
            accounts: vec![
                AccountVector {
                    account: 0,
                    private: "vprv9Kw1Vnqqb4zWZZzX3PECJViPtoTw5vD8jY9Ucag6wQ2S5RLL9MQABzHdLwqaqtJbBVZf48QgqdQB9Pz3HN4bUpHa51mcu7r31wDveZokZ6z",
                    public: "vpub5YvMuJNjRSYon44z9QmCfdf8SqJRVNvz6m55Qy5iVjZQxDfUgtiQjnc7CC1fAbED2tAGCZRERUfvtn2DstZGU6HMns6dXXH2wujSc2wfi2x",
                    canonical_private: "tprv8gGUtTW1HhuYrycHNfewtKXPYsB3CgE8uK733ntLBPGfyDhse352wryMJXvQr4zkNDL3ZBDZvJh5NpkuqyEZtLvNLLNmjJD4UV6dsRECvrC",
                    canonical_public: "tpubDCxX2sYFS5bDkSe5GKKYHjBW7tgyN1R3UchpLJvdbf54ohxeGRtd8MbDUe1cguVHe4vnK68DsuD5MXjxi9EXx16rb9EnNsaF5KT99CinaJz",
                },
                AccountVector {
                    account: 1,
                    private: "vprv9Kw1Vnqqb4zWdRRoa98A5rYGPBgR9JtvfrW9aDvevsiWzk5X3PsFBnyYnZvk5JUojGai1EY4pVN3WTiu9xpJa2mtQUJxSsDae2kMVeWfp7Q",
                    public: "vpub5YvMuJNjRSYoquWGgAfASzUzwDWuYmcn35RkNcLGVDFVsYQfawBVjbJ2dpek42bid25YagVxRUKHqLNDqZNdyR4gxohbHDCsMt2eG5EA5u7",
                    canonical_private: "tprv8gGUtTW1HhuYvq3ZuRYufgMG3FPXG4uvqdTi1S8tArxktYT4Y5Y7wffGkA1a5VAxuzM6WHLwuAewjtVmiZzGyZQgfnv7H3ac6ad4iWBaqzT",
                    canonical_public: "tpubDCxX2sYFS5bDpJ5Mo5DW561NcGuTRQ6qQw4VHxBBb8m9j2hqAUMi8AH8vGehaLroECr4hDCwstrSJ65xfp3uTKtBm5qk8ZW5VHkLoERavN3",
                },
            ],
            addresses: vec![
                AddressVector {
                    account: 0,
                    is_change: false,
                    index: 0,
                    wif: "cPvoq8Ke6vqL63LD5ibmb2cB7L2ekWVCTHHRC35p6FNfwR9nfRAm",
                    pubkey: "0330d54fd0dd420a6e5f8d3624f5f3482cae350f79d5f0753bf5beef9c2d91af3c",
                    address: "tb1qcr8te4kr609gcawutmrza0j4xv80jy8zmfp6l0",
                },
                AddressVector {
                    account: 0,
                    is_change: false,
                    index: 1,
                    wif: "cPBeYW8fUuDLFenW2VBxsusY1NfCWFWx4c5kYKKmLpevBDUdcq2r",
                    pubkey: "03e775fd51f0dfb8cd865d9ff1cca2a158cf651fe997fdc9fee9c1d3b5e995ea77",
                    address: "tb1qnjg0jd8228aq7egyzacy8cys3knf9xvrn9d67m",
                },
                AddressVector {
                    account: 0,
                    is_change: true,
                    index: 0,
                    wif: "cPGoRpf9m9K8jSyz2zqtBLeYzs5YgvxpGqiwNU2nPWYcVnCWzo52",
                    pubkey: "03025324888e429ab8e3dbaf1f7802648b9cd01e9b418485c5fa4c1b9b5700e1a6",
                    address: "tb1q8c6fshw2dlwun7ekn9qwf37cu2rn755ut76fzv",
                },
                AddressVector {
                    account: 0,
                    is_change: true,
                    index: 1,
                    wif: "cPaJp1oiVW568dqNXc5hvZe5YjCQSExGkZWaGUHgTcaFUguZX6dD",
                    pubkey: "03dcf71df71c755b3af46f7e84b4182e6291cec5a8c630f775638a739da29adcb6",
                    address: "tb1qggnasd834t54yulsep6fta8lpjekv4zjswh8c6",
                },
                AddressVector {
                    account: 1,
                    is_change: false,
                    index: 0,
                    wif: "cVAtmUjjJ5AqHmryFiBtMgdYm8qG5GkrHR2K7J2xaQwsG1DDPoN5",
                    pubkey: "035ce17d6438a499e0c7fef59b43fd7b2cb6e4a31b598f6a4c20ca94854eac9d36",
                    address: "tb1qku0qh0mc00y8tk0n65x2tqw4trlspak0r4fgj3",
                },
                AddressVector {
                    account: 1,
                    is_change: false,
                    index: 1,
                    wif: "cVhu3uFgjhbrf7b2K96xXGQFgLwmNoh9QjbwkqSbmSioZwH79zJa",
                    pubkey: "0366dc739a33f2c600b99927735bd2feea5c1d78142d2d0d3917623c4af09e8bbc",
                    address: "tb1qx0tpa0ctsy5v8xewdkpf69hhtz5cw0rf76hhff",
                },
                AddressVector {
                    account: 1,
                    is_change: true,
                    index: 0,
                    wif: "cTYvp4wHEjSWA7mxQWmB5AXiwfCNAKVVaWpFA2mYWYnFhRjDmmk9",
                    pubkey: "025695996d13031c54896990e6e38db5849f5a64fa81142b452d6e23c36fd83880",
                    address: "tb1qt0x83f5vmnapgl2gjj9r3d67rcghvjaqf2njr9",
                },
                AddressVector {
                    account: 1,
                    is_change: true,
                    index: 1,
                    wif: "cPCjQVVGAb1AcrtVkboL98kb8KJJAztkro9sarUxeoXyj2umurpk",
                    pubkey: "026c91ef2bebab59bb67f9d5b6cf67fd903f583f6b6a1b5c6a4f5343e32bacdcd9",
                    address: "tb1qa7mufelw8xtut05n0pt8cn7dwfy99lhwv87zl6",
                },
            ],
        },
    ]
}
