//! System-wide constants for the LockGuard transaction guard.

/// Distinct approvals required while a Safe is locked.
pub const DEFAULT_LOCKED_MIN_APPROVALS: usize = 2;

/// Distinct approvals required once a Safe is unlocked.
pub const DEFAULT_UNLOCKED_MIN_APPROVALS: usize = 1;

/// ERC-165 `supportsInterface(bytes4)` interface id.
pub const ERC165_INTERFACE_ID: [u8; 4] = [0x01, 0xff, 0xc9, 0xa7];

/// Safe transaction guard interface id
/// (`checkTransaction(...) ^ checkAfterExecution(bytes32,bool)`).
pub const GUARD_INTERFACE_ID: [u8; 4] = [0xe6, 0xd7, 0xa8, 0x3a];

/// Domain tag mixed into every transaction digest.
pub const TX_DIGEST_DOMAIN: &[u8] = b"lockguard:safe_tx:v1:";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Guard name.
pub const GUARD_NAME: &str = "LockGuard";
