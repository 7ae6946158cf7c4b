//! Immutable table snapshots

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::sort::SortSpec;

use super::model::MetricRow;

/// The ordered, immutable set of rows produced by one refresh cycle.
///
/// Snapshots are replaced wholesale, never mutated in place. Rows are
/// shared behind an `Arc`, so cloning a snapshot is a reference bump and
/// replacing the presentation side's current snapshot is a single
/// reference swap, so no reader ever observes a partially-parsed table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    rows: Arc<[MetricRow]>,
    collected_at: DateTime<Utc>,
}

impl TableSnapshot {
    /// Builds a snapshot from freshly parsed rows, stamped now
    #[must_use]
    pub fn new(rows: Vec<MetricRow>) -> Self {
        Self {
            rows: rows.into(),
            collected_at: Utc::now(),
        }
    }

    /// An empty snapshot (no refresh has completed yet)
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The rows in the order the remote command produced them
    #[must_use]
    pub fn rows(&self) -> &[MetricRow] {
        &self.rows
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the snapshot holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// When this snapshot was collected
    #[must_use]
    pub const fn collected_at(&self) -> DateTime<Utc> {
        self.collected_at
    }

    /// Returns the rows ordered by the given spec; the snapshot itself
    /// is untouched.
    #[must_use]
    pub fn sorted(&self, spec: &SortSpec) -> Vec<MetricRow> {
        let mut rows = self.rows.to_vec();
        spec.apply(&mut rows);
        rows
    }
}

impl Default for TableSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
