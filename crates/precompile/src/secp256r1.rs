//! # P256 (secp256r1) verification precompile
//!
//! Verifies ECDSA signatures over the secp256r1, or P256, elliptic curve at a fixed
//! address, in the format of [RIP-7212](https://github.com/ethereum/RIPs/blob/master/RIPS/rip-7212.md).
//! The [`P256VERIFY`] const represents the implementation of this precompile,
//! with the address that it is served from.
//!
//! Signatures are accepted with either `s` or `n - s`; low-s is not enforced.
pub mod constants;
mod types;
mod verify;

pub use types::{P256PublicKey, P256Signature, VerificationRequest};
pub use verify::{verify, verify_signature};

use crate::{
    utilities::bool_to_bytes32, Crypto, DefaultCrypto, P256Error, PrecompileError,
    PrecompileOutput, PrecompileResult, PrecompileWithAddress,
};
use primitives::{Bytes, P256VERIFY_ADDRESS};
use tracing::trace;

/// Base gas fee for secp256r1 p256verify operation.
pub const P256VERIFY_BASE: u64 = 3450;

/// Returns the secp256r1 precompile with its address.
pub fn precompiles() -> impl Iterator<Item = PrecompileWithAddress> {
    [P256VERIFY].into_iter()
}

/// secp256r1 precompile served from [`P256VERIFY_ADDRESS`].
pub const P256VERIFY: PrecompileWithAddress =
    PrecompileWithAddress(P256VERIFY_ADDRESS, p256_verify);

/// secp256r1 precompile logic. It takes the input bytes sent to the precompile
/// and the gas limit. The output represents the result of verifying the
/// secp256r1 signature of the input.
///
/// The input is encoded as follows:
///
/// | signed message hash |  r  |  s  | public key x | public key y |
/// | :-----------------: | :-: | :-: | :----------: | :----------: |
/// |          32         | 32  | 32  |     32       |      32      |
///
/// The base cost is charged whether or not the signature verifies.
pub fn p256_verify(input: &[u8], gas_limit: u64, crypto: &dyn Crypto) -> PrecompileResult {
    if P256VERIFY_BASE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }
    let result = verify_impl(input, crypto).is_ok();
    Ok(PrecompileOutput::new(P256VERIFY_BASE, output(result)))
}

/// Runs the verification gateway on raw input bytes.
///
/// Total over all inputs: returns 32 bytes encoding `1` if the signature is valid and
/// the empty byte string otherwise.
pub fn handle(input: &[u8]) -> Bytes {
    output(verify_impl(input, &DefaultCrypto).is_ok())
}

/// Returns `Ok(())` if the signature included in the input byte slice is
/// valid, the rejection reason otherwise.
pub fn verify_impl(input: &[u8], crypto: &dyn Crypto) -> Result<(), P256Error> {
    let result = VerificationRequest::decode(input)
        .and_then(|request| crypto.secp256r1_verify_signature(&request));
    if let Err(err) = &result {
        trace!(target: "p256verify", input_len = input.len(), %err, "signature rejected");
    }
    result
}

#[inline]
fn output(valid: bool) -> Bytes {
    if valid {
        bool_to_bytes32(true)
    } else {
        Bytes::new()
    }
}
