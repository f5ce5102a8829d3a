//! Content hashing for files using BLAKE3 or SHA-256
//!
//! Files are streamed through the digest in fixed-size chunks, so memory use
//! stays bounded regardless of file size.

use crate::types::Digest;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{trace, warn};

/// Default read chunk size in bytes
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Digest algorithm used for file contents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Blake3,
    Sha256,
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgorithm::Blake3 => f.write_str("blake3"),
            HashAlgorithm::Sha256 => f.write_str("sha256"),
        }
    }
}

/// Running digest state for either algorithm
enum DigestState {
    Blake3(Box<blake3::Hasher>),
    Sha256(Sha256),
}

impl DigestState {
    fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Blake3 => DigestState::Blake3(Box::new(blake3::Hasher::new())),
            HashAlgorithm::Sha256 => DigestState::Sha256(Sha256::new()),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            DigestState::Blake3(hasher) => {
                hasher.update(data);
            }
            DigestState::Sha256(hasher) => hasher.update(data),
        }
    }

    fn finalize_hex(self) -> String {
        match self {
            DigestState::Blake3(hasher) => hasher.finalize().to_hex().to_string(),
            DigestState::Sha256(hasher) => hex::encode(hasher.finalize()),
        }
    }
}

/// Streaming file hasher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHasher {
    algorithm: HashAlgorithm,
    chunk_size: usize,
}

impl Default for FileHasher {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}

impl FileHasher {
    /// Create a hasher for the given algorithm with the default chunk size
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Set the read chunk size. A size of zero is treated as one byte.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Hash a file's contents
    ///
    /// Never fails: an open or read error yields [`Digest::Unreadable`] with
    /// the underlying cause so the file still shows up in the snapshot.
    pub fn hash(&self, path: &Path) -> Digest {
        let result = File::open(path).and_then(|file| self.hash_reader(file));
        match result {
            Ok(hex) => {
                trace!(path = %path.display(), digest = %hex, "Hashed file");
                Digest::Hash(hex)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read file");
                Digest::Unreadable(e.to_string())
            }
        }
    }

    /// Hash everything a reader yields, reading `chunk_size` bytes at a time
    pub fn hash_reader<R: Read>(&self, mut reader: R) -> io::Result<String> {
        let mut state = DigestState::new(self.algorithm);
        let mut buffer = vec![0u8; self.chunk_size];

        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            state.update(&buffer[..read]);
        }

        Ok(state.finalize_hex())
    }
}

/// Hash a file with the default algorithm and chunk size
pub fn hash_file(path: &Path) -> Digest {
    FileHasher::default().hash(path)
}

/// Compute the hex digest of an in-memory buffer
pub fn compute_content_hash(content: &[u8], algorithm: HashAlgorithm) -> String {
    let mut state = DigestState::new(algorithm);
    state.update(content);
    state.finalize_hex()
}
