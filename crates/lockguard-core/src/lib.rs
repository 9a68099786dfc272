//! # lockguard-core
//!
//! Transaction guard for multi-owner Safe accounts.
//!
//! ## Architecture
//!
//! 1. **LockRegistry**: per-Safe lock flag, LOCKED until explicitly unlocked
//! 2. **TransactionChecker**: hard gate — distinct approvals vs. the
//!    lock-dependent floor
//! 3. **Guard**: the call surface a host drives (pre-check, post-check,
//!    unlock, interface query, fallback)
//!
//! ## Policy
//!
//! ```text
//! allowed  ⇔  approvals ≥ locked_min            (any state)
//!          ∨  approvals ≥ unlocked_min ∧ UNLOCKED
//! ```
//!
//! The guard never holds funds: any call carrying value is rejected.

pub mod checker;
pub mod entry;
pub mod guard;
pub mod lock_registry;

pub use checker::TransactionChecker;
pub use entry::{CallContext, CallOutcome, GuardCall};
pub use guard::{Guard, TransactionGuard};
pub use lock_registry::LockRegistry;
