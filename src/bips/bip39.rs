// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

//! BIP39
//!
//! <https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki>

pub use bip39::{Language, Mnemonic};
use zeroize::Zeroizing;

use super::bip85::ChildEntropy;
use crate::error::Result;

/// Encode entropy as a checksummed english mnemonic
pub fn encode_mnemonic(entropy: &ChildEntropy) -> Result<Mnemonic> {
    Ok(Mnemonic::from_entropy(entropy.as_bytes())?)
}

pub fn decode_mnemonic(mnemonic: &Mnemonic) -> Result<ChildEntropy> {
    let entropy: Zeroizing<Vec<u8>> = Zeroizing::new(mnemonic.to_entropy());
    ChildEntropy::from_slice(&entropy)
}
