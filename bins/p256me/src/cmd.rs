//! `p256me` subcommands.
pub mod account;
pub mod call;
pub mod sign;
pub mod validate_tx;
pub mod verify;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// P256 verification precompile and account tool.
#[derive(Parser, Debug)]
#[command(infer_subcommands = true)]
pub struct MainCmd {
    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Subcommands.
#[derive(clap::Subcommand, Debug)]
#[allow(clippy::large_enum_variant)]
pub enum Command {
    /// Run the verification gateway on a 160-byte hex request
    Verify(verify::Cmd),
    /// Call a precompile by address with a gas limit
    Call(call::Cmd),
    /// Sign a digest and print the matching precompile request
    Sign(sign::Cmd),
    /// Check an EIP-1271 signature against a P256 account
    Account(account::Cmd),
    /// Validate a JSON transaction request against a P256 account
    ValidateTx(validate_tx::Cmd),
}

/// Errors of all subcommands.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `call` failed.
    #[error(transparent)]
    Call(#[from] call::Error),
    /// `sign` failed.
    #[error(transparent)]
    Sign(#[from] sign::Error),
    /// `validate-tx` failed.
    #[error(transparent)]
    ValidateTx(#[from] validate_tx::Error),
    /// A hex argument could not be decoded.
    #[error(transparent)]
    HexInput(#[from] crate::hex_input::HexInputError),
}

impl MainCmd {
    /// Installs the log subscriber. `RUST_LOG` takes precedence over `--verbose`.
    pub fn init_tracing(&self) {
        let default = if self.verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
    }

    /// Runs the selected subcommand.
    pub fn run(&self) -> Result<(), Error> {
        match &self.command {
            Command::Verify(cmd) => cmd.run().map_err(Into::into),
            Command::Call(cmd) => cmd.run().map_err(Into::into),
            Command::Sign(cmd) => cmd.run().map_err(Into::into),
            Command::Account(cmd) => cmd.run().map_err(Into::into),
            Command::ValidateTx(cmd) => cmd.run().map_err(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        MainCmd::command().debug_assert();
    }
}
