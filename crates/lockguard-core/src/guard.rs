//! The guard: lock registry + transaction checker behind one call surface.
//!
//! ## Call flow
//!
//! ```text
//! Safe.setGuard(guard)      → Guard::register_safe()        (LOCKED)
//! anyone                    → Guard::unlock_safe()          (→ UNLOCKED, UnlockSafe event)
//! Safe.execTransaction(..)  → Guard::check_transaction()    (allow / InsufficientApprovals)
//!                           → host executes
//!                           → Guard::check_after_execution()
//! direct call, no match     → Guard::fallback()             (value > 0 → UnexpectedValueTransfer)
//! ```

use lockguard_types::{
    Address, ApprovalSet, GuardConfig, GuardError, GuardEvent, LockState, Result,
    SafeTransaction, TxDigest, constants,
};

use crate::{CallContext, CallOutcome, GuardCall, LockRegistry, TransactionChecker};

/// The interface a host account drives around every execution.
pub trait TransactionGuard {
    /// Pre-execution check for a transaction proposed by `safe`.
    fn check_transaction(
        &self,
        safe: Address,
        transaction: &SafeTransaction,
        approvals: &ApprovalSet,
        executor: Address,
    ) -> Result<()>;

    /// Post-execution hook.
    fn check_after_execution(&self, safe: Address, tx_digest: TxDigest, success: bool)
    -> Result<()>;

    /// ERC-165 interface query.
    fn supports_interface(&self, interface_id: [u8; 4]) -> bool;
}

/// Lock-aware transaction guard shared by any number of Safes.
#[derive(Debug, Default)]
pub struct Guard {
    registry: LockRegistry,
    checker: TransactionChecker,
    events: Vec<GuardEvent>,
}

impl Guard {
    /// Create a guard with the default approval floors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a guard with custom approval floors.
    pub fn with_config(config: GuardConfig) -> Result<Self> {
        Ok(Self {
            registry: LockRegistry::new(),
            checker: TransactionChecker::new(config)?,
            events: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GuardConfig {
        self.checker.config()
    }

    /// Associate `safe` with this guard. Called by the host when the guard is
    /// installed. New Safes start LOCKED; re-registration keeps the state.
    pub fn register_safe(&mut self, safe: Address) -> LockState {
        let state = self.registry.register(safe);
        tracing::info!(safe = %safe, state = %state, "Safe registered with guard");
        state
    }

    #[must_use]
    pub fn lock_state(&self, safe: &Address) -> LockState {
        self.registry.state(safe)
    }

    #[must_use]
    pub fn is_locked(&self, safe: &Address) -> bool {
        self.registry.is_locked(safe)
    }

    /// Unlock `safe` and emit [`GuardEvent`] `UnlockSafe`. Returns the
    /// previous state.
    ///
    /// Always succeeds. Repeating it leaves the Safe UNLOCKED and emits the
    /// event again.
    pub fn unlock_safe(&mut self, caller: Address, safe: Address) -> LockState {
        let previous = self.registry.unlock(safe);
        self.events.push(GuardEvent::unlock_safe(safe));
        tracing::info!(
            safe = %safe,
            caller = %caller,
            previous = %previous,
            "Safe unlocked"
        );
        previous
    }

    /// Entry for calls that match no named operation.
    ///
    /// # Errors
    /// Returns [`GuardError::UnexpectedValueTransfer`] if value is attached.
    /// Any payload is accepted otherwise.
    pub fn fallback(&self, ctx: CallContext, data: &[u8]) -> Result<()> {
        reject_value(ctx, if data.is_empty() { "receive" } else { "fallback" })?;
        tracing::debug!(
            sender = %ctx.sender,
            data = %hex::encode(data),
            "Unrecognized guard call ignored"
        );
        Ok(())
    }

    /// Route a tagged call. Every entry point is non-payable.
    pub fn dispatch(&mut self, ctx: CallContext, call: GuardCall) -> Result<CallOutcome> {
        reject_value(ctx, call.name())?;
        match call {
            GuardCall::CheckTransaction {
                transaction,
                approvals,
                executor,
            } => {
                self.check_transaction(ctx.sender, &transaction, &approvals, executor)?;
                Ok(CallOutcome::Allowed)
            }
            GuardCall::CheckAfterExecution { tx_digest, success } => {
                self.check_after_execution(ctx.sender, tx_digest, success)?;
                Ok(CallOutcome::Allowed)
            }
            GuardCall::UnlockSafe { safe } => {
                let previous = self.unlock_safe(ctx.sender, safe);
                Ok(CallOutcome::Unlocked { safe, previous })
            }
            GuardCall::SupportsInterface { interface_id } => {
                Ok(CallOutcome::Supports(self.supports_interface(interface_id)))
            }
            GuardCall::Unrecognized { data } => {
                self.fallback(ctx, &data)?;
                Ok(CallOutcome::Ignored)
            }
        }
    }

    /// Events emitted since the last drain.
    #[must_use]
    pub fn events(&self) -> &[GuardEvent] {
        &self.events
    }

    /// Take all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GuardEvent> {
        std::mem::take(&mut self.events)
    }
}

impl TransactionGuard for Guard {
    fn check_transaction(
        &self,
        safe: Address,
        transaction: &SafeTransaction,
        approvals: &ApprovalSet,
        executor: Address,
    ) -> Result<()> {
        let state = self.registry.state(&safe);
        self.checker
            .check(safe, state, transaction, approvals, executor)
    }

    fn check_after_execution(
        &self,
        safe: Address,
        tx_digest: TxDigest,
        success: bool,
    ) -> Result<()> {
        tracing::debug!(
            safe = %safe,
            tx_digest = %tx_digest.short(),
            success,
            "Post-execution check"
        );
        Ok(())
    }

    fn supports_interface(&self, interface_id: [u8; 4]) -> bool {
        interface_id == constants::GUARD_INTERFACE_ID
            || interface_id == constants::ERC165_INTERFACE_ID
    }
}

fn reject_value(ctx: CallContext, call: &str) -> Result<()> {
    if ctx.value == 0 {
        return Ok(());
    }
    tracing::warn!(
        sender = %ctx.sender,
        value = %ctx.value,
        call,
        "Guard call rejected: value attached"
    );
    Err(GuardError::UnexpectedValueTransfer { value: ctx.value })
}
