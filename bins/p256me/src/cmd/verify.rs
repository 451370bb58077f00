//! `verify` command: raw gateway call.
use crate::hex_input::{self, HexInputError};
use clap::Parser;
use precompile::secp256r1::handle;
use primitives::hex;

/// Runs the verification gateway and prints its output, `0x..01` or `0x`.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex-encoded request: digest || r || s || x || y
    input: String,
}

impl Cmd {
    /// Runs verify command.
    pub fn run(&self) -> Result<(), HexInputError> {
        let input = hex_input::decode("input", &self.input)?;
        let output = handle(&input);
        println!("{}", hex::encode_prefixed(&output));
        Ok(())
    }
}
