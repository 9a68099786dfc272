//! Tagged entry points of the guard.
//!
//! Every call into the guard is one [`GuardCall`] variant. Calls that match
//! no named operation are an explicit [`GuardCall::Unrecognized`] variant
//! instead of an implicit default handler. Empty data with value (a plain
//! transfer) is unrecognized as well.

use lockguard_types::{Address, ApprovalSet, LockState, SafeTransaction, TxDigest};

/// Caller identity and value attached to a guard call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    /// Immediate caller. For checks this is the Safe itself.
    pub sender: Address,
    /// Native value attached to the call.
    pub value: u128,
}

impl CallContext {
    /// A call without attached value.
    #[must_use]
    pub fn new(sender: Address) -> Self {
        Self { sender, value: 0 }
    }

    #[must_use]
    pub fn with_value(mut self, value: u128) -> Self {
        self.value = value;
        self
    }
}

/// One call into the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardCall {
    /// Pre-execution check, called by the Safe being guarded.
    CheckTransaction {
        transaction: SafeTransaction,
        approvals: ApprovalSet,
        executor: Address,
    },
    /// Post-execution hook, called by the Safe being guarded.
    CheckAfterExecution { tx_digest: TxDigest, success: bool },
    /// Unlock `safe`.
    UnlockSafe { safe: Address },
    /// ERC-165 interface query.
    SupportsInterface { interface_id: [u8; 4] },
    /// Anything else, including malformed payloads.
    Unrecognized { data: Vec<u8> },
}

impl GuardCall {
    #[must_use]
    pub fn unrecognized(data: impl Into<Vec<u8>>) -> Self {
        Self::Unrecognized { data: data.into() }
    }

    /// Operation name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CheckTransaction { .. } => "checkTransaction",
            Self::CheckAfterExecution { .. } => "checkAfterExecution",
            Self::UnlockSafe { .. } => "unlockSafe",
            Self::SupportsInterface { .. } => "supportsInterface",
            Self::Unrecognized { data } if data.is_empty() => "receive",
            Self::Unrecognized { .. } => "fallback",
        }
    }
}

/// Successful result of a dispatched call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    /// A check passed.
    Allowed,
    /// The Safe is now unlocked; `previous` is its state before the call.
    Unlocked { safe: Address, previous: LockState },
    /// Answer to an interface query.
    Supports(bool),
    /// An unrecognized call completed without effect.
    Ignored,
}
