// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// Child index (must be between 0 and 2^31 - 1)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index(u32);

impl Index {
    pub fn new(index: u32) -> Result<Self> {
        if index & (1 << 31) == 0 {
            Ok(Self(index))
        } else {
            Err(Error::invalid_input(format!(
                "index {index} out of range (must be between 0 and 2^31 - 1)"
            )))
        }
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl FromStr for Index {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index: u32 = s
            .trim()
            .parse()
            .map_err(|_| Error::invalid_input(format!("invalid index '{s}'")))?;
        Self::new(index)
    }
}

impl fmt::Debug for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}
