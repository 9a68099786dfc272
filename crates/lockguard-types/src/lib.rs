//! # lockguard-types
//!
//! Shared types, errors, and configuration for the **LockGuard** transaction
//! guard.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`Address`], [`TxDigest`], [`EventId`]
//! - **Transaction model**: [`SafeTransaction`], [`Operation`]
//! - **Approvals**: [`ApprovalSet`]
//! - **Lock model**: [`LockState`]
//! - **Events**: [`GuardEvent`], [`GuardEventKind`]
//! - **Configuration**: [`GuardConfig`]
//! - **Errors**: [`GuardError`] with `LG_ERR_` prefix codes
//! - **Constants**: approval floors, interface ids, digest domain

pub mod approval;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod lock;
pub mod transaction;

pub use approval::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use lock::*;
pub use transaction::*;

// Constants are accessed via `lockguard_types::constants::FOO`
// (not re-exported to avoid name collisions).
