// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

//! Deterministic child mnemonics and passwords from a master BIP39 mnemonic.
//!
//! The pipeline is `MasterMnemonic + passphrase -> Seed -> BIP32 root ->
//! m/83696968'/39'/0'/<words>'/<index>' -> ChildKey -> ChildEntropy`, then the
//! entropy is re-encoded either as a BIP39 mnemonic or as a base64 password.
//!
//! ```no_run
//! use std::str::FromStr;
//!
//! use bip85_derive::bips::bip39::Mnemonic;
//! use bip85_derive::bips::bip85::{DerivedPassword, FromBip85};
//! use bip85_derive::{Index, MasterMnemonic};
//!
//! let master = MasterMnemonic::from_str("abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about").unwrap();
//! let index = Index::new(0).unwrap();
//! let mnemonic = Mnemonic::from_bip85(&master, None, index).unwrap();
//! let password = DerivedPassword::from_bip85(&master, None, index).unwrap();
//! println!("{mnemonic} {password}");
//! ```

pub use bitcoin;
pub use bitcoin::hashes;
pub use bitcoin::secp256k1;

pub mod bips;
pub mod error;
pub mod types;
pub mod util;

pub use self::error::{Error, Result};
pub use self::types::{Index, MasterMnemonic, Seed, WordCount};
