// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use core::fmt;

use crate::error::{Error, Result};

/// BIP39 word counts supported as master and child mnemonics
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum WordCount {
    W12 = 12,
    W15 = 15,
    W18 = 18,
    W21 = 21,
    W24 = 24,
}

impl WordCount {
    pub fn new(count: usize) -> Result<Self> {
        match count {
            12 => Ok(Self::W12),
            15 => Ok(Self::W15),
            18 => Ok(Self::W18),
            21 => Ok(Self::W21),
            24 => Ok(Self::W24),
            _ => Err(Error::invalid_input(format!(
                "unsupported word count {count} (must be 12, 15, 18, 21 or 24)"
            ))),
        }
    }

    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    /// Entropy length in bytes
    pub fn entropy_len(&self) -> usize {
        (self.as_u32() * 4 / 3) as usize
    }

    pub fn entropy_bits(&self) -> usize {
        self.entropy_len() * 8
    }

    /// Word count encoding `len` bytes of entropy
    pub fn from_entropy_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::W12),
            20 => Some(Self::W15),
            24 => Some(Self::W18),
            28 => Some(Self::W21),
            32 => Some(Self::W24),
            _ => None,
        }
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}
