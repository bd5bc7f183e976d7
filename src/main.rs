// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use std::process;

use anyhow::Result;
use bip85_derive::bips::bip39::{encode_mnemonic, Mnemonic};
use bip85_derive::bips::bip85::{self, ChildEntropy, DerivedPassword};
use clap::error::ErrorKind;
use clap::Parser;
use serde::Serialize;
use zeroize::Zeroizing;

mod cli;

use self::cli::{io, Cli};

#[derive(Serialize)]
struct Output<'a> {
    word_count: u32,
    index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    mnemonic: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
}

fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprintln!("{}", cli::error_message(&e));
                process::exit(1);
            }
        },
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args();

    let master = &args.mnemonic;
    let passphrase: Option<Zeroizing<String>> = if args.ask_passphrase {
        Some(io::get_passphrase()?)
    } else {
        args.passphrase.map(Zeroizing::new)
    };

    let entropy: ChildEntropy = bip85::derive_entropy(
        master,
        passphrase.as_deref().map(String::as_str),
        args.index,
    )?;

    let mnemonic: Option<Zeroizing<String>> = if args.mode.mnemonic() {
        let mnemonic: Mnemonic = encode_mnemonic(&entropy)?;
        Some(Zeroizing::new(mnemonic.to_string()))
    } else {
        None
    };
    let password: Option<DerivedPassword> = if args.mode.password() {
        Some(bip85::encode_password(&entropy))
    } else {
        None
    };

    if args.json {
        let output = Output {
            word_count: master.word_count().as_u32(),
            index: args.index.as_u32(),
            mnemonic: mnemonic.as_deref().map(String::as_str),
            password: password.as_ref().map(DerivedPassword::as_str),
        };
        let json: Zeroizing<String> = Zeroizing::new(serde_json::to_string_pretty(&output)?);
        println!("{}", json.as_str());
    } else {
        if let Some(mnemonic) = &mnemonic {
            println!("Derived child mnemonic: {}", mnemonic.as_str());
        }
        if let Some(password) = &password {
            println!("Derived password: {password}");
        }
    }

    Ok(())
}
