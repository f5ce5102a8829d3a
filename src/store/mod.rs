//! Baseline Store
//!
//! Persists the reference snapshot between runs. A store is always constructed
//! with an explicit location; there is no process-wide default baseline.

pub mod persistence;

pub use persistence::JsonBaselineStore;

use crate::error::StorageError;
use crate::types::Snapshot;
use std::path::Path;

/// Baseline Store interface
pub trait BaselineStore {
    /// Replace the stored baseline with `snapshot`
    fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError>;

    /// Load the stored baseline
    ///
    /// Returns an empty snapshot when nothing has been saved yet. Data that is
    /// present but unparseable is an error, never an empty baseline.
    fn load(&self) -> Result<Snapshot, StorageError>;

    /// Files on disk owned by this store, if any
    ///
    /// Scans leave these out so the baseline does not report on itself.
    fn owned_files(&self) -> Vec<&Path> {
        Vec::new()
    }
}
