//! Error types for the LockGuard transaction guard.
//!
//! All errors use the `LG_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Policy errors (the checker's deny path)
//! - 2xx: Call surface errors (entry points, value handling)
//! - 9xx: General / internal errors

use thiserror::Error;

use crate::{Address, LockState};

/// Central error enum for all LockGuard operations.
///
/// Every variant is terminal for the call that produced it: the host account
/// must abort the guarded transaction and apply no partial effects.
#[derive(Debug, Error)]
pub enum GuardError {
    // =================================================================
    // Policy Errors (1xx)
    // =================================================================
    /// Fewer distinct approvals than the lock state demands.
    #[error(
        "LG_ERR_100: Insufficient approvals for safe {safe} ({state}): need {required}, have {provided}"
    )]
    InsufficientApprovals {
        safe: Address,
        state: LockState,
        required: usize,
        provided: usize,
    },

    // =================================================================
    // Call Surface Errors (2xx)
    // =================================================================
    /// A call into the guard carried a non-zero value. The guard never holds funds.
    #[error("LG_ERR_200: Unexpected value transfer of {value} to guard")]
    UnexpectedValueTransfer { value: u128 },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Configuration error (invalid thresholds, malformed config file, etc.).
    #[error("LG_ERR_900: Configuration error: {0}")]
    Configuration(String),

    /// Serialization / deserialization error.
    #[error("LG_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// An address string could not be parsed.
    #[error("LG_ERR_902: Invalid address {input:?}: {reason}")]
    InvalidAddress { input: String, reason: String },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, GuardError>;

impl From<serde_json::Error> for GuardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_approvals_display() {
        let err = GuardError::InsufficientApprovals {
            safe: Address([0x11; 20]),
            state: LockState::Locked,
            required: 2,
            provided: 1,
        };
        let msg = format!("{err}");
        assert!(msg.starts_with("LG_ERR_100"), "Got: {msg}");
        assert!(msg.contains("LOCKED"));
        assert!(msg.contains("need 2"));
        assert!(msg.contains("have 1"));
        assert!(msg.contains("0x1111"));
    }

    #[test]
    fn value_transfer_display() {
        let err = GuardError::UnexpectedValueTransfer { value: 1 };
        let msg = format!("{err}");
        assert!(msg.contains("LG_ERR_200"));
        assert!(msg.contains("of 1 "));
    }

    #[test]
    fn serde_json_error_converts() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: GuardError = parse.unwrap_err().into();
        assert!(matches!(err, GuardError::Serialization(_)));
    }

    #[test]
    fn all_errors_have_lg_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(GuardError::UnexpectedValueTransfer { value: 7 }),
            Box::new(GuardError::Configuration("bad".into())),
            Box::new(GuardError::Serialization("bad".into())),
            Box::new(GuardError::InvalidAddress {
                input: "0x".into(),
                reason: "empty".into(),
            }),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("LG_ERR_"),
                "Error missing LG_ERR_ prefix: {msg}"
            );
        }
    }
}
