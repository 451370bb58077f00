//! # zkp256-primitives
//!
//! Shared types for the P256 verification precompile and the P256 account:
//! re-exported `alloy-primitives`, well-known addresses and magic values, and the
//! transaction request consumed by account validation.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod constants;
pub mod transaction;

pub use constants::*;
pub use transaction::{TransactionRequest, EIP712_TX_TYPE};

pub use alloy_primitives::{
    self, address, b256, bytes, fixed_bytes, hex, uint, Address, Bytes, FixedBytes, B256, U256,
};
