// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use core::fmt;

use bitcoin::Network;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::MasterMnemonic;
use crate::bips::bip32::{Bip32, ExtendedPrivKey};
use crate::error::Error;

pub const SEED_LEN: usize = 64;
const PBKDF2_ROUNDS: u32 = 2048;
const SALT_PREFIX: &str = "mnemonic";

/// BIP39 seed
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<sensitive>")
    }
}

impl Seed {
    /// Stretch `mnemonic` and `passphrase` with PBKDF2-HMAC-SHA512.
    ///
    /// Both inputs are NFKD normalized. The words are not validated, so a
    /// phrase with a bad checksum still yields a seed.
    pub fn new(mnemonic: &MasterMnemonic, passphrase: Option<&str>) -> Self {
        let password: Zeroizing<String> = nfkd("", mnemonic.as_str());
        let salt: Zeroizing<String> = nfkd(SALT_PREFIX, passphrase.unwrap_or_default());

        let mut seed = Self([0u8; SEED_LEN]);
        pbkdf2::pbkdf2_hmac::<Sha512>(
            password.as_bytes(),
            salt.as_bytes(),
            PBKDF2_ROUNDS,
            &mut seed.0,
        );
        seed
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

/// `prefix` followed by the NFKD form of `s`, in a buffer that never reallocates
fn nfkd(prefix: &str, s: &str) -> Zeroizing<String> {
    let len: usize = prefix.len() + s.nfkd().map(char::len_utf8).sum::<usize>();
    let mut out: Zeroizing<String> = Zeroizing::new(String::with_capacity(len));
    out.push_str(prefix);
    out.extend(s.nfkd());
    out
}

impl Bip32 for Seed {
    type Err = Error;

    fn to_bip32_root_key(&self, network: Network) -> Result<ExtendedPrivKey, Self::Err> {
        Ok(ExtendedPrivKey::new_master(network, &self.0)?)
    }
}
