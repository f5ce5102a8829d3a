//! Diff Engine
//!
//! Classifies paths into added, modified and deleted between a baseline and a
//! current snapshot.

use crate::types::Snapshot;
use serde::Serialize;
use std::collections::BTreeSet;

/// Overall result of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Current tree matches the baseline
    Clean,
    /// At least one path was added, modified or deleted
    ChangesDetected,
}

/// Paths that changed between two snapshots
///
/// The three sets are pairwise disjoint. Sorted sets are used for stable
/// output only; ordering has no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    pub added: BTreeSet<String>,
    pub modified: BTreeSet<String>,
    pub deleted: BTreeSet<String>,
}

impl DiffResult {
    /// True when no path changed
    pub fn is_clean(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.deleted.is_empty()
    }

    pub fn status(&self) -> CheckStatus {
        if self.is_clean() {
            CheckStatus::Clean
        } else {
            CheckStatus::ChangesDetected
        }
    }

    /// Total number of changed paths
    pub fn change_count(&self) -> usize {
        self.added.len() + self.modified.len() + self.deleted.len()
    }
}

/// Compare a baseline snapshot against a current one
///
/// Digests are compared by value, so an error marker only matches the same
/// marker with the same cause.
pub fn diff(baseline: &Snapshot, current: &Snapshot) -> DiffResult {
    let mut result = DiffResult::default();

    for (path, digest) in current.iter() {
        match baseline.get(path) {
            None => {
                result.added.insert(path.to_string());
            }
            Some(previous) if previous != digest => {
                result.modified.insert(path.to_string());
            }
            Some(_) => {}
        }
    }

    result.deleted = baseline
        .paths()
        .filter(|path| !current.contains(path))
        .map(str::to_string)
        .collect();

    result
}
