// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

//! Bitcoin Improvement Proposals
//!
//! <https://github.com/bitcoin/bips>

pub mod bip32;
pub mod bip39;
pub mod bip85;
