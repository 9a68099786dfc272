//! Events the guard emits for external monitoring.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Address, EventId};

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardEventKind {
    /// A Safe was unlocked. Emitted on every successful unlock call,
    /// including repeats on an already unlocked Safe.
    UnlockSafe { safe: Address },
}

impl GuardEventKind {
    /// Event name as monitoring tools see it.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::UnlockSafe { .. } => "UnlockSafe",
        }
    }
}

/// An emitted event with its identity and emission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardEvent {
    pub id: EventId,
    pub emitted_at: DateTime<Utc>,
    pub kind: GuardEventKind,
}

impl GuardEvent {
    #[must_use]
    pub fn new(kind: GuardEventKind) -> Self {
        Self {
            id: EventId::new(),
            emitted_at: Utc::now(),
            kind,
        }
    }

    #[must_use]
    pub fn unlock_safe(safe: Address) -> Self {
        Self::new(GuardEventKind::UnlockSafe { safe })
    }

    /// The Safe this event concerns.
    #[must_use]
    pub fn safe(&self) -> Address {
        match self.kind {
            GuardEventKind::UnlockSafe { safe } => safe,
        }
    }
}
