//! `account` command: EIP-1271 check against a P256 account.
use crate::hex_input::{self, HexInputError};
use account::P256Account;
use clap::Parser;

/// Runs EIP-1271 `isValidSignature` for a P256 account and prints the returned value.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex-encoded public key x coordinate
    #[arg(long)]
    x: String,
    /// Hex-encoded public key y coordinate
    #[arg(long)]
    y: String,
    /// Hex-encoded 32-byte digest
    #[arg(long)]
    digest: String,
    /// Hex-encoded 64-byte signature, r || s
    #[arg(long)]
    signature: String,
}

impl Cmd {
    /// Runs account command.
    pub fn run(&self) -> Result<(), HexInputError> {
        let account = P256Account::new(
            hex_input::decode_word("x", &self.x)?,
            hex_input::decode_word("y", &self.y)?,
        );
        let digest = hex_input::decode_word("digest", &self.digest)?;
        let signature = hex_input::decode("signature", &self.signature)?;
        println!("{}", account.is_valid_signature(&digest, &signature));
        Ok(())
    }
}
