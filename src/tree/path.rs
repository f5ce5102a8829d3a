//! Path canonicalization and snapshot keys
//!
//! Snapshot keys must be identical between the scan that recorded a baseline
//! and every later scan of the same tree, and two different files must never
//! share a key. The rule:
//!
//! 1. The scan root is canonicalized once (absolute, symlinks and `.`/`..`
//!    resolved) and walked exactly as the filesystem returns it
//! 2. Each file key is the canonical root joined with the walker-relative path
//! 3. Keys keep the bytes read from disk: no Unicode normalization. On unix a
//!    backslash is written `\\` and a byte that is not valid UTF-8 is written
//!    `\xNN`, so every distinct path maps to a distinct key

use crate::error::ScanError;
use std::path::{Path, PathBuf};

/// Canonicalize an existing directory or file path
///
/// The result is the path as the filesystem knows it, so it can be walked.
pub fn canonicalize_path(path: &Path) -> Result<PathBuf, ScanError> {
    // Use dunce for cross-platform canonicalization (no UNC prefixes on Windows)
    dunce::canonicalize(path)
        .map_err(|e| ScanError::InvalidPath(format!("Failed to canonicalize {:?}: {}", path, e)))
}

/// Canonicalize a path that may not exist yet by resolving its parent
///
/// Used for files about to be created, such as a baseline on first save.
pub fn canonicalize_file_location(path: &Path) -> Result<PathBuf, ScanError> {
    if path.exists() {
        return canonicalize_path(path);
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| ScanError::InvalidPath(format!("No file name in {:?}", path)))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    Ok(canonicalize_path(parent)?.join(file_name))
}

/// Snapshot key for a path produced by walking a canonical root
pub fn path_key(path: &Path) -> String {
    encode_os_str(path.as_os_str())
}

#[cfg(unix)]
fn encode_os_str(value: &std::ffi::OsStr) -> String {
    use std::os::unix::ffi::OsStrExt;
    encode_bytes(value.as_bytes())
}

#[cfg(windows)]
fn encode_os_str(value: &std::ffi::OsStr) -> String {
    use std::fmt::Write;
    use std::os::windows::ffi::OsStrExt;

    // `?` cannot appear in a Windows file name, so the escape is unambiguous
    let mut key = String::new();
    for unit in char::decode_utf16(value.encode_wide()) {
        match unit {
            Ok(c) => key.push(c),
            Err(e) => {
                let _ = write!(key, "?u{:04x}", e.unpaired_surrogate());
            }
        }
    }
    key
}

#[cfg(not(any(unix, windows)))]
fn encode_os_str(value: &std::ffi::OsStr) -> String {
    value.to_string_lossy().into_owned()
}

/// Escape raw path bytes into a key: `\\` for a backslash, `\xNN` for a byte
/// outside valid UTF-8, everything else unchanged
#[cfg_attr(not(unix), allow(dead_code))]
fn encode_bytes(mut bytes: &[u8]) -> String {
    use std::fmt::Write;

    let mut key = String::with_capacity(bytes.len());
    while !bytes.is_empty() {
        let (valid, invalid) = match std::str::from_utf8(bytes) {
            Ok(text) => (text, 0),
            Err(e) => {
                let valid_len = e.valid_up_to();
                let invalid_len = e.error_len().unwrap_or(bytes.len() - valid_len);
                // Prefix up to valid_up_to is guaranteed UTF-8
                let valid = std::str::from_utf8(&bytes[..valid_len]).unwrap_or_default();
                (valid, invalid_len)
            }
        };

        for c in valid.chars() {
            if c == '\\' {
                key.push_str("\\\\");
            } else {
                key.push(c);
            }
        }

        let rest = &bytes[valid.len()..];
        for byte in &rest[..invalid] {
            let _ = write!(key, "\\x{:02x}", byte);
        }
        bytes = &rest[invalid..];
    }
    key
}
