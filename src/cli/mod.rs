// Copyright (c) 2022-2023 Yuki Kishimoto
// Distributed under the MIT software license

use bip85_derive::{Index, MasterMnemonic};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

pub mod io;

#[derive(Debug, Parser)]
#[command(name = "bip85-derive", allow_negative_numbers = true)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Master mnemonic (12, 15, 18, 21 or 24 words)
    #[arg(required = true)]
    pub mnemonic: MasterMnemonic,
    /// Index (must be between 0 and 2^31 - 1)
    #[arg(required = true)]
    pub index: Index,
    /// BIP39 passphrase
    #[arg(conflicts_with = "ask_passphrase")]
    pub passphrase: Option<String>,
    /// Ask for the BIP39 passphrase with a hidden prompt
    #[arg(short = 'p', long)]
    pub ask_passphrase: bool,
    /// What to derive
    #[arg(short, long, value_enum, default_value_t = Mode::Both)]
    pub mode: Mode,
    /// Print a JSON object
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum Mode {
    /// Child mnemonic and password
    Both,
    /// Child mnemonic only
    Mnemonic,
    /// Password only
    Password,
}

/// Message printed to stderr for a rejected command line, always followed by the usage
pub fn error_message(err: &clap::Error) -> String {
    let usage = Cli::command().render_usage();
    match err.kind() {
        ErrorKind::MissingRequiredArgument => {
            format!("Error: Mnemonic and BIP85 index are required.\n{usage}")
        }
        _ => {
            let rendered = err.to_string();
            let first_line: &str = rendered.lines().next().unwrap_or_default();
            format!("{first_line}\n{usage}")
        }
    }
}

impl Mode {
    pub fn mnemonic(&self) -> bool {
        matches!(self, Self::Both | Self::Mnemonic)
    }

    pub fn password(&self) -> bool {
        matches!(self, Self::Both | Self::Password)
    }
}

#[cfg(test)]
mod tests {
    use bip85_derive::WordCount;

    use super::*;

    const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_command() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse() {
        let args = Cli::try_parse_from(["bip85-derive", MNEMONIC, "0"]).unwrap();
        assert_eq!(args.mnemonic.as_str(), MNEMONIC);
        assert_eq!(args.mnemonic.word_count(), WordCount::W12);
        assert_eq!(args.index.as_u32(), 0);
        assert_eq!(args.passphrase, None);
        assert_eq!(args.mode, Mode::Both);
        assert!(!args.json);

        let args = Cli::try_parse_from([
            "bip85-derive",
            MNEMONIC,
            "57",
            "mypassphrase",
            "--mode",
            "password",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.index.as_u32(), 57);
        assert_eq!(args.passphrase.as_deref(), Some("mypassphrase"));
        assert_eq!(args.mode, Mode::Password);
        assert!(args.json);
    }

    #[test]
    fn test_missing_args() {
        let err = Cli::try_parse_from(["bip85-derive"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["bip85-derive", MNEMONIC]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_invalid_index() {
        for index in ["-1", "1.5", "abc", "2147483648"] {
            let err = Cli::try_parse_from(["bip85-derive", MNEMONIC, index]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn test_invalid_mnemonic() {
        for mnemonic in ["", "   ", "abandon about"] {
            let err = Cli::try_parse_from(["bip85-derive", mnemonic, "0"]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn test_error_message_with_usage() {
        let err = Cli::try_parse_from(["bip85-derive", MNEMONIC, "-1"]).unwrap_err();
        let message = error_message(&err);
        assert!(message.contains("invalid index '-1'"));
        assert!(message.contains("Usage:"));

        let err = Cli::try_parse_from(["bip85-derive", "", "0"]).unwrap_err();
        let message = error_message(&err);
        assert!(message.contains("empty mnemonic"));
        assert!(message.contains("Usage:"));

        let err = Cli::try_parse_from(["bip85-derive"]).unwrap_err();
        let message = error_message(&err);
        assert!(message.starts_with("Error: Mnemonic and BIP85 index are required."));
        assert!(message.contains("Usage:"));
    }

    #[test]
    fn test_passphrase_conflict() {
        let err = Cli::try_parse_from(["bip85-derive", MNEMONIC, "0", "secret", "-p"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_mode() {
        assert!(Mode::Both.mnemonic() && Mode::Both.password());
        assert!(Mode::Mnemonic.mnemonic() && !Mode::Mnemonic.password());
        assert!(!Mode::Password.mnemonic() && Mode::Password.password());
    }
}
