//! Transaction checker — hard gate on every Safe transaction.
//!
//! The lock state is a floor on the number of distinct owner approvals, not
//! an allow/deny switch: a LOCKED Safe needs the locked floor (two by
//! default), an UNLOCKED Safe needs the unlocked floor (one by default), and
//! any transaction at or above the locked floor passes in either state.
//!
//! ## Design Principles
//!
//! - **Fail-closed**: anything below the floor is rejected
//! - **Read-only**: the checker never mutates lock state
//! - **Trusts the host**: approvals arrive already validated; only distinct
//!   approvers are counted

use lockguard_types::{
    Address, ApprovalSet, GuardConfig, GuardError, LockState, Result, SafeTransaction,
};

/// Decides whether a proposed transaction may execute.
#[derive(Debug, Clone, Default)]
pub struct TransactionChecker {
    config: GuardConfig,
}

impl TransactionChecker {
    /// Create a checker from a validated config.
    pub fn new(config: GuardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Approvals a Safe in `state` must present.
    #[must_use]
    pub fn required_approvals(&self, state: LockState) -> usize {
        self.config.required_approvals(state)
    }

    /// Check a transaction proposed by `safe` and submitted by `executor`.
    ///
    /// # Errors
    /// Returns [`GuardError::InsufficientApprovals`] when the approval count
    /// is below the floor for `state`.
    pub fn check(
        &self,
        safe: Address,
        state: LockState,
        transaction: &SafeTransaction,
        approvals: &ApprovalSet,
        executor: Address,
    ) -> Result<()> {
        let required = self.required_approvals(state);
        let provided = approvals.len();

        if provided < required {
            tracing::warn!(
                safe = %safe,
                executor = %executor,
                state = %state,
                approvals = provided,
                required,
                to = %transaction.to,
                operation = %transaction.operation,
                tx_digest = %transaction.digest().short(),
                "Transaction blocked: insufficient approvals"
            );
            return Err(GuardError::InsufficientApprovals {
                safe,
                state,
                required,
                provided,
            });
        }

        tracing::info!(
            safe = %safe,
            executor = %executor,
            state = %state,
            approvals = provided,
            required,
            nonce = transaction.nonce,
            tx_digest = %transaction.digest().short(),
            "Transaction allowed"
        );
        Ok(())
    }
}
