//! Owner approvals the host account has already validated.
//!
//! The guard never verifies signatures. The host hands over the set of owners
//! whose approval it accepted, and the guard counts distinct owners only.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Address;

/// Distinct owners that approved a transaction.
///
/// Backed by an ordered set so that repeated approvals from the same owner
/// collapse into one and iteration order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalSet {
    owners: BTreeSet<Address>,
}

impl ApprovalSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an approval. Returns `false` if the owner had already approved.
    pub fn insert(&mut self, owner: Address) -> bool {
        self.owners.insert(owner)
    }

    #[must_use]
    pub fn contains(&self, owner: &Address) -> bool {
        self.owners.contains(owner)
    }

    /// Number of distinct approving owners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn owners(&self) -> impl Iterator<Item = &Address> {
        self.owners.iter()
    }
}

impl FromIterator<Address> for ApprovalSet {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        Self {
            owners: iter.into_iter().collect(),
        }
    }
}

impl Extend<Address> for ApprovalSet {
    fn extend<I: IntoIterator<Item = Address>>(&mut self, iter: I) {
        self.owners.extend(iter);
    }
}
