//! `call` command: host-style precompile call.
use crate::hex_input::{self, HexInputError};
use clap::Parser;
use precompile::{DefaultCrypto, PrecompileError, Precompiles};
use primitives::{hex, Address, P256VERIFY_ADDRESS};
use tracing::debug;

/// Errors of the `call` command.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Nothing is served at the address.
    #[error("no precompile at {0}")]
    UnknownPrecompile(Address),
    /// The precompile call failed.
    #[error(transparent)]
    Precompile(#[from] PrecompileError),
    /// A hex argument could not be decoded.
    #[error(transparent)]
    HexInput(#[from] HexInputError),
}

/// Calls a precompile the way a host would, with a gas limit.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex-encoded input/calldata bytes
    input: String,
    /// Precompile address
    #[arg(long, default_value_t = P256VERIFY_ADDRESS)]
    address: Address,
    /// Gas limit
    #[arg(long, env = "P256ME_GAS_LIMIT", default_value_t = 100_000)]
    gas_limit: u64,
}

impl Cmd {
    /// Runs call command.
    pub fn run(&self) -> Result<(), Error> {
        let input = hex_input::decode("input", &self.input)?;
        debug!(address = %self.address, gas_limit = self.gas_limit, len = input.len(), "calling precompile");
        let output = Precompiles::latest()
            .call(&self.address, &input, self.gas_limit, &DefaultCrypto)
            .ok_or(Error::UnknownPrecompile(self.address))??;
        println!("output: {}", hex::encode_prefixed(&output.bytes));
        println!("gas used: {}", output.gas_used);
        Ok(())
    }
}
