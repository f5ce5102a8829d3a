//! Filesystem walker for collecting regular files under a root

use crate::error::ScanError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;
use walkdir::{DirEntry, WalkDir};

/// Walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false for stable keys)
    pub follow_symlinks: bool,
    /// Path component names to skip entirely (e.g. ".git")
    pub ignore_patterns: Vec<String>,
    /// Exact paths to leave out of the walk
    pub exclude_paths: Vec<PathBuf>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

/// An entry below the root that could not be traversed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: Option<PathBuf>,
    pub reason: String,
}

/// Result of a walk: regular files in path order plus anything skipped
#[derive(Debug, Clone, Default)]
pub struct WalkResult {
    pub files: Vec<PathBuf>,
    pub skipped: Vec<SkippedEntry>,
}

/// Check that a root directory exists, is a directory and can be listed
pub fn check_root(root: &Path) -> Result<(), ScanError> {
    let metadata = fs::metadata(root).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ScanError::RootNotFound {
                path: root.to_path_buf(),
            }
        } else {
            ScanError::RootInaccessible {
                path: root.to_path_buf(),
                source: e,
            }
        }
    })?;

    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    fs::read_dir(root).map_err(|e| ScanError::RootInaccessible {
        path: root.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the filesystem and collect all regular files
    ///
    /// Directories are descended into but not returned. Symlinks (when not
    /// followed), sockets, FIFOs and devices are skipped. Subdirectories that
    /// cannot be read are reported in [`WalkResult::skipped`]; only a failure
    /// on the root itself is an error.
    pub fn walk(&self) -> Result<WalkResult, ScanError> {
        check_root(&self.root)?;

        let mut result = WalkResult::default();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.should_ignore(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(ScanError::RootInaccessible {
                        path: self.root.clone(),
                        source: io::Error::from(e),
                    });
                }
                Err(e) => {
                    warn!(path = ?e.path(), error = %e, "Skipping entry that cannot be traversed");
                    result.skipped.push(SkippedEntry {
                        path: e.path().map(Path::to_path_buf),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.into_path();
            if self.config.exclude_paths.contains(&path) {
                debug!(path = %path.display(), "Excluded path");
                continue;
            }
            result.files.push(path);
        }

        // Sort for determinism
        result.files.sort();

        Ok(result)
    }

    /// Check if an entry matches an ignore pattern by path component name
    ///
    /// Names and patterns are compared in NFC so a pattern typed in either
    /// Unicode form matches the name on disk.
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| name.nfc().eq(pattern.nfc()))
    }
}
