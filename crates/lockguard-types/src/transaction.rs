//! The transaction a Safe proposes to execute.
//!
//! The host account owns and builds the transaction; the guard only reads it.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{Address, TxDigest, constants};

/// How the Safe performs the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Operation {
    /// Regular message call.
    #[default]
    Call,
    /// Call executed in the Safe's own context.
    DelegateCall,
}

impl Operation {
    /// Wire value used by Safe accounts (`0` = call, `1` = delegatecall).
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Call => 0,
            Self::DelegateCall => 1,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => write!(f, "CALL"),
            Self::DelegateCall => write!(f, "DELEGATECALL"),
        }
    }
}

/// A transaction proposed by a Safe, with all of its canonical fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeTransaction {
    /// Call destination.
    pub to: Address,
    /// Native value sent with the call.
    pub value: u128,
    /// Call data.
    pub data: Vec<u8>,
    pub operation: Operation,
    pub safe_tx_gas: u64,
    pub base_gas: u64,
    pub gas_price: u128,
    /// Token used for gas refunds; zero means native.
    pub gas_token: Address,
    /// Receiver of the gas refund; zero means `tx.origin`.
    pub refund_receiver: Address,
    /// Safe nonce this transaction is bound to.
    pub nonce: u64,
}

impl SafeTransaction {
    /// A plain call with zeroed gas parameters.
    #[must_use]
    pub fn call(to: Address, value: u128, data: Vec<u8>, nonce: u64) -> Self {
        Self {
            to,
            value,
            data,
            operation: Operation::Call,
            safe_tx_gas: 0,
            base_gas: 0,
            gas_price: 0,
            gas_token: Address::ZERO,
            refund_receiver: Address::ZERO,
            nonce,
        }
    }

    #[must_use]
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    #[must_use]
    pub fn is_delegate_call(&self) -> bool {
        self.operation == Operation::DelegateCall
    }

    /// Construct the canonical bytes the digest is computed over.
    ///
    /// Format: `to(20) || value(16) || len(data)(8) || data || operation(1) ||
    /// safe_tx_gas(8) || base_gas(8) || gas_price(16) || gas_token(20) ||
    /// refund_receiver(20) || nonce(8)`, integers little-endian.
    #[must_use]
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(125 + self.data.len());
        payload.extend_from_slice(self.to.as_bytes());
        payload.extend_from_slice(&self.value.to_le_bytes());
        payload.extend_from_slice(&(self.data.len() as u64).to_le_bytes());
        payload.extend_from_slice(&self.data);
        payload.push(self.operation.as_u8());
        payload.extend_from_slice(&self.safe_tx_gas.to_le_bytes());
        payload.extend_from_slice(&self.base_gas.to_le_bytes());
        payload.extend_from_slice(&self.gas_price.to_le_bytes());
        payload.extend_from_slice(self.gas_token.as_bytes());
        payload.extend_from_slice(self.refund_receiver.as_bytes());
        payload.extend_from_slice(&self.nonce.to_le_bytes());
        payload
    }

    /// Domain-separated SHA-256 over [`Self::canonical_bytes`].
    #[must_use]
    pub fn digest(&self) -> TxDigest {
        let mut hasher = Sha256::new();
        hasher.update(constants::TX_DIGEST_DOMAIN);
        hasher.update(self.canonical_bytes());
        TxDigest(hasher.finalize().into())
    }
}

/// Test transaction builder. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl SafeTransaction {
    /// A zero-value call to `to` carrying the payload `0xbaddad42`.
    #[must_use]
    pub fn dummy(to: Address, nonce: u64) -> Self {
        Self::call(to, 0, vec![0xba, 0xdd, 0xad, 0x42], nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_tx() -> SafeTransaction {
        SafeTransaction::dummy(Address([0x42; 20]), 0)
    }

    #[test]
    fn digest_deterministic() {
        let tx = make_tx();
        assert_eq!(tx.digest(), tx.clone().digest());
    }

    #[test]
    fn digest_differs_by_nonce() {
        let a = make_tx();
        let mut b = a.clone();
        b.nonce = 1;
        assert_ne!(a.digest(), b.digest(), "Different nonce must change digest");
    }

    #[test]
    fn digest_differs_by_operation() {
        let a = make_tx();
        let b = a.clone().with_operation(Operation::DelegateCall);
        assert!(b.is_delegate_call());
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn data_length_prefix_prevents_field_shifting() {
        // Moving a byte from `data` into `to` must not yield the same encoding.
        let a = SafeTransaction::call(Address([0; 20]), 0, vec![1], 0);
        let mut to = [0u8; 20];
        to[19] = 1;
        let b = SafeTransaction::call(Address(to), 0, vec![], 0);
        assert_ne!(a.canonical_bytes(), b.canonical_bytes());
    }

    #[test]
    fn call_defaults() {
        let tx = make_tx();
        assert_eq!(tx.operation, Operation::Call);
        assert!(tx.gas_token.is_zero());
        assert!(tx.refund_receiver.is_zero());
        assert_eq!(tx.canonical_bytes().len(), 125 + tx.data.len());
    }

    #[test]
    fn serde_roundtrip() {
        let tx = make_tx();
        let json = serde_json::to_string(&tx).unwrap();
        let back: SafeTransaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, back);
    }
}
