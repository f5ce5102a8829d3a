//! Core data types: digests and snapshots

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Prefix used when an unreadable-file marker is stored as a string.
///
/// Real digests are lowercase hex, so this prefix never collides with one.
pub const ERROR_MARKER_PREFIX: &str = "Error: ";

/// Length of a hex-encoded 256-bit digest
pub const DIGEST_HEX_LEN: usize = 64;

/// Content digest of a single file, or a marker for a file that could not be read
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Digest {
    /// Lowercase hex digest of the file contents
    Hash(String),
    /// The file could not be opened or read; carries the cause
    Unreadable(String),
}

impl Digest {
    /// Returns true if this digest marks an unreadable file
    pub fn is_unreadable(&self) -> bool {
        matches!(self, Digest::Unreadable(_))
    }

    /// Checked constructor for a real digest: 64 lowercase hex characters
    pub fn from_hex<S: Into<String>>(hex: S) -> Result<Self, String> {
        let hex = hex.into();
        if is_hex_digest(&hex) {
            Ok(Digest::Hash(hex))
        } else {
            Err(invalid_digest(&hex))
        }
    }

    /// Check that this digest reads back unchanged from its string form
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Digest::Hash(hex) if !is_hex_digest(hex) => Err(invalid_digest(hex)),
            _ => Ok(()),
        }
    }

    /// The hex string, if this is a real digest
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            Digest::Hash(hex) => Some(hex),
            Digest::Unreadable(_) => None,
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Digest::Hash(hex) => f.write_str(hex),
            Digest::Unreadable(cause) => write!(f, "{}{}", ERROR_MARKER_PREFIX, cause),
        }
    }
}

impl From<Digest> for String {
    fn from(digest: Digest) -> Self {
        digest.to_string()
    }
}

impl TryFrom<String> for Digest {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if let Some(cause) = value.strip_prefix(ERROR_MARKER_PREFIX) {
            return Ok(Digest::Unreadable(cause.to_string()));
        }
        Digest::from_hex(value)
    }
}

fn is_hex_digest(value: &str) -> bool {
    value.len() == DIGEST_HEX_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

fn invalid_digest(value: &str) -> String {
    format!(
        "invalid digest value {:?} (expected {} lowercase hex characters or an error marker)",
        value, DIGEST_HEX_LEN
    )
}

/// Point-in-time mapping of normalized file path to digest
///
/// A snapshot is built once from its entries and never edited afterwards;
/// a new scan produces a new snapshot. Entries are kept in path order so the
/// serialized form is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: BTreeMap<String, Digest>,
}

impl Snapshot {
    /// An empty snapshot (the state before any baseline is recorded)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&Digest> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in path order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Digest)> {
        self.entries.iter().map(|(path, digest)| (path.as_str(), digest))
    }

    /// Iterate paths in order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries whose file could not be read during the scan
    pub fn unreadable(&self) -> impl Iterator<Item = (&str, &Digest)> {
        self.iter().filter(|(_, digest)| digest.is_unreadable())
    }
}

impl FromIterator<(String, Digest)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, Digest)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<String, Digest>> for Snapshot {
    fn from(entries: BTreeMap<String, Digest>) -> Self {
        Self { entries }
    }
}
