//! Per-Safe lock registry.
//!
//! One guard instance may be attached to many Safes. Each Safe has its own
//! lock flag, keyed by address; no Safe can observe or change another's.
//! Safes the registry has never seen read as **LOCKED**.

use std::collections::HashMap;

use lockguard_types::{Address, LockState};

/// Lock state for every Safe the guard knows about.
#[derive(Debug, Default)]
pub struct LockRegistry {
    states: HashMap<Address, LockState>,
}

impl LockRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a Safe with the guard. A new Safe starts LOCKED; an already
    /// registered Safe keeps its current state.
    pub fn register(&mut self, safe: Address) -> LockState {
        *self.states.entry(safe).or_default()
    }

    /// Current state of `safe`. Unknown Safes are LOCKED.
    #[must_use]
    pub fn state(&self, safe: &Address) -> LockState {
        self.states.get(safe).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_locked(&self, safe: &Address) -> bool {
        self.state(safe).is_locked()
    }

    #[must_use]
    pub fn is_registered(&self, safe: &Address) -> bool {
        self.states.contains_key(safe)
    }

    /// Move `safe` to UNLOCKED and return the state it had before.
    pub fn unlock(&mut self, safe: Address) -> LockState {
        let entry = self.states.entry(safe).or_default();
        let previous = *entry;
        *entry = previous.unlock();
        previous
    }

    /// Number of Safes with a recorded state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
