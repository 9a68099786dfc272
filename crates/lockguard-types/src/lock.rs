//! Lock state of a Safe as seen by the guard.
//!
//! A Safe starts **LOCKED** when the guard is attached and can only move to
//! **UNLOCKED** through an explicit unlock. There is no relock transition.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-Safe lock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LockState {
    /// Initial state. The checker demands the locked approval floor.
    #[default]
    Locked,
    /// Terminal state. The checker accepts the unlocked approval floor.
    Unlocked,
}

impl LockState {
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, Self::Locked)
    }

    /// The state reached by an unlock. Unlocking is idempotent.
    #[must_use]
    pub fn unlock(self) -> Self {
        Self::Unlocked
    }
}

impl fmt::Display for LockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => write!(f, "LOCKED"),
            Self::Unlocked => write!(f, "UNLOCKED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_locked() {
        assert_eq!(LockState::default(), LockState::Locked);
        assert!(LockState::default().is_locked());
    }

    #[test]
    fn unlock_is_terminal() {
        assert_eq!(LockState::Locked.unlock(), LockState::Unlocked);
        assert_eq!(LockState::Unlocked.unlock(), LockState::Unlocked);
    }

    #[test]
    fn display() {
        assert_eq!(LockState::Locked.to_string(), "LOCKED");
        assert_eq!(LockState::Unlocked.to_string(), "UNLOCKED");
    }
}
