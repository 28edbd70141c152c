use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine;
use crate::types::{DeviceDescriptor, MatchHit, MatchRecord};

/// Ordered candidate table for one matching domain.
///
/// The table is the explicitly owned registry object the design calls for:
/// constructed at startup, passed by reference into lookups, never hidden
/// behind process-wide mutable state. Order is significant; when two records
/// can satisfy the same device key, the earlier entry wins.
///
/// Duplicate keys are allowed (first in table order wins). An empty
/// `compatible` key is accepted with a warning; such a record is never
/// matchable and the lookup loop skips over it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MatchTable<T> {
    records: Vec<MatchRecord<T>>,
}

impl<T> Default for MatchTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MatchTable<T> {
    /// Empty table.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Table over an existing record list, preserving its order.
    pub fn from_records(records: Vec<MatchRecord<T>>) -> Self {
        for record in &records {
            if record.compatible.is_empty() {
                warn!("match table contains a record with an empty compatible key; it will never match");
            }
        }
        Self { records }
    }

    /// Builder-style append.
    pub fn with_record(mut self, record: MatchRecord<T>) -> Self {
        self.push(record);
        self
    }

    /// Append a record at the end of the table.
    pub fn push(&mut self, record: MatchRecord<T>) {
        if record.compatible.is_empty() {
            warn!("registering a match record with an empty compatible key; it will never match");
        }
        self.records.push(record);
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&MatchRecord<T>> {
        self.records.get(index)
    }

    /// Iterate records in table order.
    pub fn iter(&self) -> impl Iterator<Item = &MatchRecord<T>> {
        self.records.iter()
    }

    /// All records in table order.
    pub fn records(&self) -> &[MatchRecord<T>] {
        &self.records
    }

    /// Resolve `device` against this table.
    ///
    /// See [`engine::match_device`] for the precedence rules.
    pub fn match_device(&self, device: &DeviceDescriptor) -> Option<MatchHit<'_, T>> {
        engine::match_device(self, device)
    }
}

impl<'a, T> IntoIterator for &'a MatchTable<T> {
    type Item = &'a MatchRecord<T>;
    type IntoIter = std::slice::Iter<'a, MatchRecord<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<T> FromIterator<MatchRecord<T>> for MatchTable<T> {
    fn from_iter<I: IntoIterator<Item = MatchRecord<T>>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}
