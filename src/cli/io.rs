// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use anyhow::Result;
use dialoguer::Password;
use zeroize::Zeroizing;

pub fn get_passphrase() -> Result<Zeroizing<String>> {
    Ok(Zeroizing::new(
        Password::new()
            .with_prompt("Passphrase")
            .allow_empty_password(true)
            .interact()?,
    ))
}
