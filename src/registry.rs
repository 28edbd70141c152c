use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::table::MatchTable;
use crate::types::MatchRecord;

/// Snapshot-based wrapper for tables that grow while lookups are running.
///
/// A bare [`MatchTable`] is the right tool when the candidate set is fixed at
/// startup. When registration can race with matching, the registry keeps the
/// current table behind an `Arc` and replaces the whole handle on every
/// `register`, so a snapshot taken before a lookup is never mutated mid-scan.
/// Readers pay one `Arc` clone; writers pay a table clone, which is fine for
/// the small tables this engine is built for.
#[derive(Debug)]
pub struct Registry<T> {
    table: RwLock<Arc<MatchTable<T>>>,
}

impl<T> Registry<T> {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Arc::new(MatchTable::new())),
        }
    }

    /// Registry seeded from an existing table.
    pub fn from_table(table: MatchTable<T>) -> Self {
        Self {
            table: RwLock::new(Arc::new(table)),
        }
    }

    /// Handle to the current table.
    ///
    /// The snapshot is immutable: registrations made after this call produce
    /// a new table and do not affect lookups running against the snapshot.
    pub fn snapshot(&self) -> Arc<MatchTable<T>> {
        self.table
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of records in the current table.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Whether the current table holds no records.
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}

impl<T: Clone> Registry<T> {
    /// Append a record, publishing a new table snapshot.
    pub fn register(&self, record: MatchRecord<T>) {
        let mut guard = self.table.write().expect("match registry lock poisoned");
        let mut next = (**guard).clone();
        next.push(record);
        *guard = Arc::new(next);
        debug!(records = guard.len(), "match registry updated");
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
