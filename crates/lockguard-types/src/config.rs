//! Guard configuration.

use serde::{Deserialize, Serialize};

use crate::{GuardError, LockState, Result, constants};

/// Approval floors the checker enforces per lock state.
///
/// Values are counts of **distinct** owner approvals. The defaults reproduce
/// the reference policy: two approvals while locked, one once unlocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardConfig {
    /// Minimum approvals while a Safe is locked.
    pub locked_min_approvals: usize,
    /// Minimum approvals once a Safe is unlocked.
    pub unlocked_min_approvals: usize,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            locked_min_approvals: constants::DEFAULT_LOCKED_MIN_APPROVALS,
            unlocked_min_approvals: constants::DEFAULT_UNLOCKED_MIN_APPROVALS,
        }
    }
}

impl GuardConfig {
    /// Parse a JSON config and validate it. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the floors are usable.
    ///
    /// An unlocked Safe still needs at least one approval, and locking can
    /// only raise the floor, never lower it.
    pub fn validate(&self) -> Result<()> {
        if self.unlocked_min_approvals == 0 {
            return Err(GuardError::Configuration(
                "unlocked_min_approvals must be at least 1".to_string(),
            ));
        }
        if self.locked_min_approvals < self.unlocked_min_approvals {
            return Err(GuardError::Configuration(format!(
                "locked_min_approvals ({}) must not be below unlocked_min_approvals ({})",
                self.locked_min_approvals, self.unlocked_min_approvals,
            )));
        }
        Ok(())
    }

    /// Approvals required for a Safe in `state`.
    #[must_use]
    pub fn required_approvals(&self, state: LockState) -> usize {
        match state {
            LockState::Locked => self.locked_min_approvals,
            LockState::Unlocked => self.unlocked_min_approvals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = GuardConfig::default();
        assert_eq!(cfg.required_approvals(LockState::Locked), 2);
        assert_eq!(cfg.required_approvals(LockState::Unlocked), 1);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_unlocked_floor_rejected() {
        let cfg = GuardConfig {
            locked_min_approvals: 2,
            unlocked_min_approvals: 0,
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, GuardError::Configuration(_)));
    }

    #[test]
    fn locked_below_unlocked_rejected() {
        let cfg = GuardConfig {
            locked_min_approvals: 1,
            unlocked_min_approvals: 2,
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn json_partial_uses_defaults() {
        let cfg = GuardConfig::from_json_str(r#"{ "locked_min_approvals": 3 }"#).unwrap();
        assert_eq!(cfg.locked_min_approvals, 3);
        assert_eq!(cfg.unlocked_min_approvals, 1);
    }

    #[test]
    fn json_invalid_values_rejected() {
        let err = GuardConfig::from_json_str(r#"{ "unlocked_min_approvals": 0 }"#).unwrap_err();
        assert!(matches!(err, GuardError::Configuration(_)));
    }

    #[test]
    fn json_unknown_field_rejected() {
        let err = GuardConfig::from_json_str(r#"{ "relock_after": 10 }"#).unwrap_err();
        assert!(matches!(err, GuardError::Serialization(_)));
    }

    #[test]
    fn serde_roundtrip() {
        let cfg = GuardConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GuardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
