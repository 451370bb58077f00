//! # zkp256-account
//!
//! Signature authority of a smart account whose key is a P256 (secp256r1) public key.
//!
//! The account answers a single question for both standalone messages
//! ([EIP-1271](https://eips.ethereum.org/EIPS/eip-1271)) and EIP-712 transactions:
//! was this digest signed by the holder of the account's key? Nonces, fees and
//! replay protection belong to the transaction-processing system around it.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod account;
pub mod error;

pub use account::P256Account;
pub use error::AccountError;
pub use precompile::{
    secp256r1::{P256PublicKey, P256Signature},
    P256Error,
};
pub use primitives;
