//! Command line tooling for the P256 verification precompile and the P256 account.
pub mod cmd;
pub mod hex_input;
