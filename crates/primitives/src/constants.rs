//! Addresses, curve parameters and magic values.
use alloy_primitives::{address, b256, fixed_bytes, Address, FixedBytes, B256};

/// Address the P256 verification precompile is served from.
///
/// Same slot as [RIP-7212](https://github.com/ethereum/RIPs/blob/master/RIPS/rip-7212.md).
pub const P256VERIFY_ADDRESS: Address = address!("0000000000000000000000000000000000000100");

/// Order `n` of the P256 (secp256r1) group, big-endian.
///
/// Valid signature scalars lie in `[1, n - 1]`.
pub const P256_GROUP_ORDER: B256 =
    b256!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");

/// Field modulus `p` of the P256 curve, big-endian.
pub const P256_FIELD_MODULUS: B256 =
    b256!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");

/// [EIP-1271](https://eips.ethereum.org/EIPS/eip-1271) magic value,
/// `bytes4(keccak256("isValidSignature(bytes32,bytes)"))`.
pub const EIP1271_MAGIC_VALUE: FixedBytes<4> = fixed_bytes!("1626ba7e");

/// Returned instead of [`EIP1271_MAGIC_VALUE`] when a signature is not accepted.
pub const EIP1271_INVALID_VALUE: FixedBytes<4> = fixed_bytes!("00000000");

/// Magic value an account returns from transaction validation on success,
/// the selector of `validateTransaction(bytes32,bytes32,Transaction)`.
pub const ACCOUNT_VALIDATION_SUCCESS_MAGIC: FixedBytes<4> = fixed_bytes!("202bcce7");
