//! Caller-owned snapshot container.
//!
//! The engine itself never holds state: callers pass an immutable
//! snapshot into each computation. `SnapshotStore` is the minimal
//! replace-on-fetch holder a presentation layer owns, standing in for
//! process-wide mutable stores.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::expense::Expense;

/// An immutable, cheaply clonable snapshot of expense records.
#[derive(Debug, Clone)]
pub struct ExpenseSnapshot {
    records: Arc<[Expense]>,
}

impl Default for ExpenseSnapshot {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ExpenseSnapshot {
    pub fn new(records: Vec<Expense>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn as_slice(&self) -> &[Expense] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Expense>> for ExpenseSnapshot {
    fn from(records: Vec<Expense>) -> Self {
        Self::new(records)
    }
}

/// Holds the current snapshot and swaps it wholesale when a fresh fetch
/// lands. Reads never block writers for long; clones are cheap because
/// the record list is shared.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<ExpenseSnapshot>,
    version: AtomicU64,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The snapshot as of now.
    pub fn load(&self) -> ExpenseSnapshot {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replaces the snapshot, returning the new version number.
    pub fn replace(&self, snapshot: ExpenseSnapshot) -> u64 {
        match self.current.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
        self.version.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Monotonic counter bumped on every replace, so callers can skip
    /// recomputing reports for a snapshot they already rendered.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }
}
