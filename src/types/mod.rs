// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

mod index;
mod mnemonic;
mod seed;
mod word_count;

pub use self::index::Index;
pub use self::mnemonic::MasterMnemonic;
pub use self::seed::Seed;
pub use self::word_count::WordCount;
