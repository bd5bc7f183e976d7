// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

//! BIP32
//!
//! <https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki>

use core::fmt;

pub use bitcoin::util::bip32::{ChildNumber, DerivationPath, ExtendedPrivKey};
use bitcoin::secp256k1::{Secp256k1, Signing};
use bitcoin::util::bip32;
use bitcoin::Network;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Error;

pub const CHILD_KEY_LEN: usize = 32;

/// Private key bytes of the last node of a derivation path
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChildKey([u8; CHILD_KEY_LEN]);

impl ChildKey {
    pub fn as_bytes(&self) -> &[u8; CHILD_KEY_LEN] {
        &self.0
    }
}

impl From<[u8; CHILD_KEY_LEN]> for ChildKey {
    fn from(bytes: [u8; CHILD_KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for ChildKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<sensitive>")
    }
}

pub trait Bip32 {
    type Err;

    fn to_bip32_root_key(&self, network: Network) -> Result<ExtendedPrivKey, Self::Err>;

    /// Walk `path` from the root key. Every step must be hardened.
    fn derive_child_key<C>(
        &self,
        secp: &Secp256k1<C>,
        path: &DerivationPath,
    ) -> Result<ChildKey, Self::Err>
    where
        C: Signing,
        Self::Err: From<Error>,
    {
        if let Some(ChildNumber::Normal { index }) = path.into_iter().find(|c| c.is_normal()) {
            return Err(Error::Derivation(bip32::Error::InvalidChildNumber(*index)).into());
        }

        // Network only affects xprv serialization, never the key bytes
        let root: ExtendedPrivKey = self.to_bip32_root_key(Network::Bitcoin)?;
        let derived: ExtendedPrivKey = root.derive_priv(secp, path).map_err(Error::from)?;
        Ok(ChildKey(derived.private_key.secret_bytes()))
    }
}
