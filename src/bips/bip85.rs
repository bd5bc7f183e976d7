// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

//! BIP85
//!
//! <https://github.com/bitcoin/bips/blob/master/bip-0085.mediawiki>
//!
//! Child entropy is the leading `word_count * 4 / 3` bytes of the private key
//! found at `m/83696968'/39'/0'/<word_count>'/<index>'`.

use core::fmt;

use bip39::Mnemonic;
use bitcoin::secp256k1::Secp256k1;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::bip32::{Bip32, ChildKey, ChildNumber, DerivationPath};
use super::bip39::encode_mnemonic;
use crate::error::{Error, Result};
use crate::types::{Index, MasterMnemonic, Seed, WordCount};
use crate::util::base64;

pub const PURPOSE: u32 = 83696968;
pub const APPLICATION_BIP39: u32 = 39;
pub const ACCOUNT: u32 = 0;

/// Length of a derived password, counted on the base64 text
pub const PASSWORD_LEN: usize = 24;

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChildEntropy {
    bytes: Vec<u8>,
    #[zeroize(skip)]
    word_count: WordCount,
}

impl ChildEntropy {
    /// Copy raw entropy. Length must be 16, 20, 24, 28 or 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let word_count = WordCount::from_entropy_len(bytes.len()).ok_or_else(|| {
            Error::Encoding(format!("invalid entropy length: {} bytes", bytes.len()))
        })?;
        Ok(Self {
            bytes: bytes.to_vec(),
            word_count,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Word count of the mnemonic encoding this entropy
    pub fn word_count(&self) -> WordCount {
        self.word_count
    }
}

impl fmt::Debug for ChildEntropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<sensitive>")
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct DerivedPassword(Zeroizing<String>);

impl DerivedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DerivedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for DerivedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<sensitive>")
    }
}

pub fn derivation_path(word_count: WordCount, index: Index) -> Result<DerivationPath> {
    // Path: m/83696968'/39'/0'/<word_count>'/<index>'
    let path: Vec<ChildNumber> = vec![
        ChildNumber::from_hardened_idx(PURPOSE)?,
        ChildNumber::from_hardened_idx(APPLICATION_BIP39)?,
        ChildNumber::from_hardened_idx(ACCOUNT)?,
        ChildNumber::from_hardened_idx(word_count.as_u32())?,
        ChildNumber::from_hardened_idx(index.as_u32())?,
    ];
    Ok(DerivationPath::from(path))
}

pub fn extract_entropy(word_count: WordCount, child_key: &ChildKey) -> ChildEntropy {
    let len: usize = word_count.entropy_len();
    ChildEntropy {
        bytes: child_key.as_bytes()[..len].to_vec(),
        word_count,
    }
}

pub fn derive_entropy(
    mnemonic: &MasterMnemonic,
    passphrase: Option<&str>,
    index: Index,
) -> Result<ChildEntropy> {
    let word_count: WordCount = mnemonic.word_count();
    let path: DerivationPath = mnemonic.derivation_path(index)?;
    log::debug!("deriving {word_count} words child at {path}");

    let seed = Seed::new(mnemonic, passphrase);
    let secp = Secp256k1::signing_only();
    let child_key: ChildKey = seed.derive_child_key(&secp, &path)?;

    let entropy: ChildEntropy = mnemonic.extract_entropy(&child_key);
    log::trace!("extracted {} bits of entropy", word_count.entropy_bits());
    Ok(entropy)
}

/// Base64 encode the entropy and keep the first [`PASSWORD_LEN`] characters.
///
/// The cut is applied to the encoded text: with 16 bytes of entropy the
/// password ends with the `==` padding.
pub fn encode_password(entropy: &ChildEntropy) -> DerivedPassword {
    let encoded: Zeroizing<String> = base64::encode(entropy.as_bytes());
    let end: usize = encoded.len().min(PASSWORD_LEN);
    DerivedPassword(Zeroizing::new(encoded[..end].to_string()))
}

pub trait FromBip85: Sized {
    type Err;

    fn from_bip85(
        mnemonic: &MasterMnemonic,
        passphrase: Option<&str>,
        index: Index,
    ) -> Result<Self, Self::Err>;
}

impl FromBip85 for Mnemonic {
    type Err = Error;

    fn from_bip85(
        mnemonic: &MasterMnemonic,
        passphrase: Option<&str>,
        index: Index,
    ) -> Result<Self, Self::Err> {
        let entropy: ChildEntropy = derive_entropy(mnemonic, passphrase, index)?;
        encode_mnemonic(&entropy)
    }
}

impl FromBip85 for DerivedPassword {
    type Err = Error;

    fn from_bip85(
        mnemonic: &MasterMnemonic,
        passphrase: Option<&str>,
        index: Index,
    ) -> Result<Self, Self::Err> {
        let entropy: ChildEntropy = derive_entropy(mnemonic, passphrase, index)?;
        Ok(encode_password(&entropy))
    }
}
