//! # Ordered observer registry.
//!
//! [`ObserverSet`] keeps registered observers in insertion order and hands
//! out snapshots for fan-out.
//!
//! ## Rules
//! - **Insertion order**: `attach` appends; iteration/snapshot order is the
//!   attach order.
//! - **Duplicates allowed**: attaching the same handle twice delivers twice.
//! - **Detach by identity**: `detach` removes every entry that is the same
//!   allocation (`Arc::ptr_eq`), not structurally equal ones.
//! - **Stable remainder**: removal never reorders the remaining entries.
//! - **Snapshot-on-read**: fan-out works on a clone of the handle list, so a
//!   later `attach`/`detach` cannot change an in-progress cycle's outcome
//!   sequence.

use crate::observers::ObserverRef;

/// Ordered collection of observer handles with identity-based removal.
#[derive(Default)]
pub struct ObserverSet {
    entries: Vec<ObserverRef>,
}

impl ObserverSet {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observer. No de-duplication is performed.
    pub fn attach(&mut self, observer: ObserverRef) {
        self.entries.push(observer);
    }

    /// Removes every entry matching `observer` by identity (`Arc::ptr_eq`).
    ///
    /// Returns the number of entries removed; `0` when the handle was not
    /// registered. Remaining entries keep their relative order.
    pub fn detach(&mut self, observer: &ObserverRef) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !ObserverRef::ptr_eq(entry, observer));
        before - self.entries.len()
    }

    /// Number of registered entries (duplicates counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clones the current handle list for one fan-out cycle.
    ///
    /// Cheap: clones `Arc` handles, not observers.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ObserverRef> {
        self.entries.clone()
    }
}
