//! `validate-tx` command.
use crate::hex_input::{self, HexInputError};
use account::{AccountError, P256Account};
use clap::Parser;
use primitives::TransactionRequest;
use std::{fs, io::Error as IoError, path::PathBuf};

/// Errors of the `validate-tx` command.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transaction file is missing.
    #[error("The specified path does not exist")]
    PathNotExists,
    /// Transaction file is not a valid request.
    #[error("invalid transaction json: {0}")]
    Json(#[from] serde_json::Error),
    /// Transaction file could not be read.
    #[error(transparent)]
    Io(#[from] IoError),
    /// A hex argument could not be decoded.
    #[error(transparent)]
    HexInput(#[from] HexInputError),
    /// The account refused the transaction.
    #[error(transparent)]
    Account(#[from] AccountError),
}

/// Validates a transaction request against a P256 account.
///
/// The EIP-712 digest of the transaction is supplied by the caller.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex-encoded public key x coordinate
    #[arg(long)]
    x: String,
    /// Hex-encoded public key y coordinate
    #[arg(long)]
    y: String,
    /// Hex-encoded 32-byte signed digest of the transaction
    #[arg(long)]
    digest: String,
    /// Path to a JSON transaction request
    #[arg(long)]
    tx: PathBuf,
}

impl Cmd {
    /// Runs validate-tx command.
    pub fn run(&self) -> Result<(), Error> {
        if !self.tx.exists() {
            return Err(Error::PathNotExists);
        }
        let tx: TransactionRequest = serde_json::from_str(&fs::read_to_string(&self.tx)?)?;
        let account = P256Account::new(
            hex_input::decode_word("x", &self.x)?,
            hex_input::decode_word("y", &self.y)?,
        );
        let digest = hex_input::decode_word("digest", &self.digest)?;

        account.validate_transaction(&digest, &tx)?;
        println!("{}", account.validate_transaction_magic(&digest, &tx));
        Ok(())
    }
}
