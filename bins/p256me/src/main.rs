//! `p256me` entry point.
use clap::Parser;
use eyre::Result;
use p256me::cmd::MainCmd;

fn main() -> Result<()> {
    let cmd = MainCmd::parse();
    cmd.init_tracing();
    cmd.run()?;
    Ok(())
}
