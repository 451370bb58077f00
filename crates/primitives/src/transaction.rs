//! Transaction request handed to account validation.
use alloy_primitives::{Address, Bytes, U256};

/// EIP-712 transaction type used by account-abstraction transactions (`0x71`).
pub const EIP712_TX_TYPE: u8 = 113;

/// Structured transaction as submitted by a wallet for a custom account.
///
/// Everything apart from [`TransactionRequest::custom_signature`] is owned by the
/// transaction-processing system: the signed digest over these fields is computed
/// elsewhere and handed to the account together with the request. Account
/// validation only reads the signature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TransactionRequest {
    /// Transaction type, [`EIP712_TX_TYPE`] for account transactions.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub tx_type: u8,
    /// Account the transaction is sent from.
    pub from: Address,
    /// Call target. `None` for deployments.
    pub to: Option<Address>,
    /// Chain id the transaction is bound to.
    pub chain_id: u64,
    /// Account nonce.
    pub nonce: u64,
    /// Gas limit.
    pub gas_limit: u64,
    /// Gas price.
    pub gas_price: u128,
    /// Gas per published byte limit.
    pub gas_per_pubdata: u64,
    /// Value transferred to [`TransactionRequest::to`].
    pub value: U256,
    /// Call data.
    pub data: Bytes,
    /// Account-specific signature, `r ‖ s` for a P256 account.
    pub custom_signature: Bytes,
}

impl TransactionRequest {
    /// Returns `true` if this is an EIP-712 account transaction.
    #[inline]
    pub fn is_eip712(&self) -> bool {
        self.tx_type == EIP712_TX_TYPE
    }

    /// Returns the request with its custom signature replaced.
    pub fn with_custom_signature(mut self, signature: impl Into<Bytes>) -> Self {
        self.custom_signature = signature.into();
        self
    }
}
