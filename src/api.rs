//! Integrity API
//!
//! Programmatic entry points used by the CLI (or any other front end):
//! record a baseline of a directory, or check a directory against it.

use crate::config::{HashguardConfig, ScanConfig};
use crate::diff::{diff, DiffResult};
use crate::error::ApiError;
use crate::store::{BaselineStore, JsonBaselineStore};
use crate::tree::path;
use crate::tree::scanner::Scanner;
use crate::types::Snapshot;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// File integrity API over a baseline store and scan settings
pub struct IntegrityApi {
    store: Box<dyn BaselineStore>,
    scan: ScanConfig,
}

impl IntegrityApi {
    /// Create an API over an explicit store
    pub fn new(store: Box<dyn BaselineStore>, scan: ScanConfig) -> Self {
        Self { store, scan }
    }

    /// Create an API with a JSON baseline at the configured path
    pub fn from_config(config: &HashguardConfig) -> Self {
        Self::new(
            Box::new(JsonBaselineStore::new(config.baseline.path.clone())),
            config.scan.clone(),
        )
    }

    pub fn store(&self) -> &dyn BaselineStore {
        self.store.as_ref()
    }

    /// Scan `directory` and persist the result as the new baseline
    #[instrument(skip(self, directory), fields(directory = %directory.display()))]
    pub fn record_baseline(&self, directory: &Path) -> Result<Snapshot, ApiError> {
        let snapshot = self.scan(directory)?;
        self.store.save(&snapshot)?;

        let unreadable = snapshot.unreadable().count();
        if unreadable > 0 {
            warn!(unreadable, "Baseline recorded with unreadable files");
        }
        info!(entry_count = snapshot.len(), "Baseline recorded");
        Ok(snapshot)
    }

    /// Compare `directory` against the stored baseline
    ///
    /// The baseline is loaded before scanning, so a corrupt baseline fails
    /// fast. A missing baseline compares as empty (every file is added).
    #[instrument(skip(self, directory), fields(directory = %directory.display()))]
    pub fn check(&self, directory: &Path) -> Result<DiffResult, ApiError> {
        let baseline = self.load_baseline()?;
        let current = self.scan(directory)?;
        let result = diff(&baseline, &current);

        info!(
            added = result.added.len(),
            modified = result.modified.len(),
            deleted = result.deleted.len(),
            "Integrity check completed"
        );
        Ok(result)
    }

    /// Scan `directory` without touching the baseline
    ///
    /// Files owned by the store are excluded from the result.
    pub fn scan(&self, directory: &Path) -> Result<Snapshot, ApiError> {
        let mut walker_config = self.scan.walker_config();
        walker_config.exclude_paths = self.excluded_paths();

        let scanner: Scanner = self.scan.scanner().with_walker_config(walker_config);
        Ok(scanner.scan(directory)?)
    }

    /// Load the stored baseline (empty if none was recorded)
    pub fn load_baseline(&self) -> Result<Snapshot, ApiError> {
        Ok(self.store.load()?)
    }

    fn excluded_paths(&self) -> Vec<PathBuf> {
        self.store
            .owned_files()
            .into_iter()
            .filter_map(|file| path::canonicalize_file_location(file).ok())
            .collect()
    }
}
