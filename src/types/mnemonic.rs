// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use core::fmt;
use core::str::FromStr;

use bitcoin::util::bip32::DerivationPath;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{Index, WordCount};
use crate::bips::bip32::ChildKey;
use crate::bips::bip85::{self, ChildEntropy};
use crate::error::{Error, Result};

/// Master mnemonic, kept as its words joined by a single space.
///
/// Words are not checked against the BIP39 wordlist and the checksum is not
/// verified: any whitespace-delimited phrase with a supported word count is
/// accepted and stretched as-is.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MasterMnemonic {
    phrase: String,
    #[zeroize(skip)]
    word_count: WordCount,
}

impl MasterMnemonic {
    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    pub fn derivation_path(&self, index: Index) -> Result<DerivationPath> {
        bip85::derivation_path(self.word_count, index)
    }

    pub fn extract_entropy(&self, child_key: &ChildKey) -> ChildEntropy {
        bip85::extract_entropy(self.word_count, child_key)
    }
}

impl FromStr for MasterMnemonic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        if words.is_empty() {
            return Err(Error::invalid_input("empty mnemonic"));
        }
        let word_count = WordCount::new(words.len())?;
        Ok(Self {
            phrase: words.join(" "),
            word_count,
        })
    }
}

impl fmt::Debug for MasterMnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<sensitive>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MNEMONIC_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_parse() {
        let mnemonic = MasterMnemonic::from_str(MNEMONIC_12).unwrap();
        assert_eq!(mnemonic.word_count(), WordCount::W12);
        assert_eq!(mnemonic.as_str(), MNEMONIC_12);
    }

    #[test]
    fn test_whitespace_is_canonicalized() {
        let messy = format!("  {}\n", MNEMONIC_12.replace(' ', " \t "));
        let mnemonic = MasterMnemonic::from_str(&messy).unwrap();
        assert_eq!(mnemonic.word_count(), WordCount::W12);
        assert_eq!(mnemonic.as_str(), MNEMONIC_12);
    }

    #[test]
    fn test_empty_mnemonic() {
        assert!(matches!(
            MasterMnemonic::from_str(""),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            MasterMnemonic::from_str("   \n\t"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unsupported_word_count() {
        assert!(matches!(
            MasterMnemonic::from_str("abandon abandon about"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_no_checksum_validation() {
        // Valid words, wrong checksum
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        assert!(MasterMnemonic::from_str(phrase).is_ok());
    }

    #[test]
    fn test_debug_hides_words() {
        let mnemonic = MasterMnemonic::from_str(MNEMONIC_12).unwrap();
        assert_eq!(format!("{mnemonic:?}"), "<sensitive>");
    }
}
