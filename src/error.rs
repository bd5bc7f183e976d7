// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use bitcoin::util::bip32;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Missing or malformed caller input
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// BIP32 derivation error
    #[error("derivation failed: {0}")]
    Derivation(#[from] bip32::Error),
    /// Entropy reached an encoder with an unexpected shape
    #[error("encoding failed: {0}")]
    Encoding(String),
}

impl Error {
    pub(crate) fn invalid_input<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidInput(msg.into())
    }
}

impl From<bip39::Error> for Error {
    fn from(err: bip39::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}
