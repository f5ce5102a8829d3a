//! JSON file persistence for baselines

use crate::error::StorageError;
use crate::store::BaselineStore;
use crate::types::Snapshot;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default baseline file name
pub const DEFAULT_BASELINE_FILE: &str = "file_hashes.json";

/// Baseline store backed by a pretty-printed JSON object of path to digest
#[derive(Debug, Clone)]
pub struct JsonBaselineStore {
    path: PathBuf,
    temp_path: PathBuf,
}

impl JsonBaselineStore {
    /// Create a store that reads and writes the baseline at `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let temp_path = temp_path_for(&path);
        Self { path, temp_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize a snapshot the way it is written to disk (4-space indent)
    ///
    /// Rejects digests that would not load back, so a saved baseline always
    /// round-trips.
    pub fn to_json(snapshot: &Snapshot) -> Result<Vec<u8>, StorageError> {
        for (key, digest) in snapshot.iter() {
            digest
                .validate()
                .map_err(|reason| StorageError::InvalidDigest {
                    key: key.to_string(),
                    reason,
                })?;
        }

        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        snapshot
            .serialize(&mut serializer)
            .map_err(StorageError::Serialize)?;
        buffer.push(b'\n');
        Ok(buffer)
    }

    fn write_temp(&self, bytes: &[u8]) -> io::Result<()> {
        let file = File::create(&self.temp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(bytes)?;
        writer.flush()?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()
    }
}

/// Sibling temporary path used while writing, e.g. `file_hashes.json.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl BaselineStore for JsonBaselineStore {
    /// Write atomically: temp file, flush and fsync, then rename over the target
    fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let bytes = Self::to_json(snapshot)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StorageError::BaselineWrite {
                    path: self.path.clone(),
                    source: e,
                })?;
            }
        }

        let written = self
            .write_temp(&bytes)
            .and_then(|()| fs::rename(&self.temp_path, &self.path));
        if let Err(e) = written {
            // Clean up temp file on error
            let _ = fs::remove_file(&self.temp_path);
            return Err(StorageError::BaselineWrite {
                path: self.path.clone(),
                source: e,
            });
        }

        info!(
            path = %self.path.display(),
            entry_count = snapshot.len(),
            "Saved baseline"
        );
        Ok(())
    }

    fn load(&self) -> Result<Snapshot, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No baseline found, starting empty");
                return Ok(Snapshot::empty());
            }
            Err(e) => {
                return Err(StorageError::BaselineRead {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let snapshot: Snapshot =
            serde_json::from_str(&contents).map_err(|e| StorageError::BaselineCorrupt {
                path: self.path.clone(),
                source: e,
            })?;

        debug!(
            path = %self.path.display(),
            entry_count = snapshot.len(),
            "Loaded baseline"
        );
        Ok(snapshot)
    }

    fn owned_files(&self) -> Vec<&Path> {
        vec![self.path.as_path(), self.temp_path.as_path()]
    }
}
