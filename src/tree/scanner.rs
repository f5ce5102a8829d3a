//! Tree scanner: walks a directory and hashes every regular file into a snapshot

use crate::error::ScanError;
use crate::tree::hasher::FileHasher;
use crate::tree::path;
use crate::tree::walker::{self, Walker, WalkerConfig};
use crate::types::Snapshot;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, instrument};

/// Produces snapshots of directory trees
#[derive(Default)]
pub struct Scanner {
    walker_config: WalkerConfig,
    hasher: FileHasher,
}

impl Scanner {
    /// Create a scanner with default walker settings and hasher
    pub fn new() -> Self {
        Self::default()
    }

    /// Set walker config (ignore patterns, exclusions, depth, symlinks)
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Set the file hasher (algorithm and chunk size)
    pub fn with_hasher(mut self, hasher: FileHasher) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn walker_config(&self) -> &WalkerConfig {
        &self.walker_config
    }

    pub fn hasher(&self) -> &FileHasher {
        &self.hasher
    }

    /// Scan a directory tree into a snapshot
    ///
    /// Keys are normalized paths under the canonicalized root (see
    /// [`path`]). Unreadable files are recorded as
    /// [`Digest::Unreadable`](crate::types::Digest::Unreadable); a missing or
    /// unlistable root fails the scan.
    #[instrument(skip(self, root), fields(root = %root.display()))]
    pub fn scan(&self, root: &Path) -> Result<Snapshot, ScanError> {
        let start = Instant::now();
        info!(algorithm = %self.hasher.algorithm(), "Starting scan");

        walker::check_root(root).map_err(|e| {
            error!("Cannot traverse root: {}", e);
            e
        })?;
        let canonical_root = path::canonicalize_path(root)?;

        let walker = Walker::with_config(canonical_root, self.walker_config.clone());
        let walked = walker.walk()?;
        debug!(
            file_count = walked.files.len(),
            skipped_count = walked.skipped.len(),
            "Walked filesystem"
        );
        for skipped in &walked.skipped {
            debug!(path = ?skipped.path, reason = %skipped.reason, "Entry left out of snapshot");
        }

        let snapshot = self.hash_files(&walked.files);

        info!(
            file_count = snapshot.len(),
            unreadable_count = snapshot.unreadable().count(),
            duration_ms = start.elapsed().as_millis(),
            "Scan completed"
        );

        Ok(snapshot)
    }

    /// Hash a list of walked files into a snapshot keyed by [`path::path_key`]
    ///
    /// A file that vanished or became unreadable after the walk is recorded
    /// as unreadable rather than failing the scan.
    pub fn hash_files(&self, files: &[PathBuf]) -> Snapshot {
        files
            .iter()
            .map(|file| (path::path_key(file), self.hasher.hash(file)))
            .collect()
    }
}

/// Scan a directory with default settings
pub fn scan(root: &Path) -> Result<Snapshot, ScanError> {
    Scanner::new().scan(root)
}
