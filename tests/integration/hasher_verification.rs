//! Hasher Implementation Verification Tests
//!
//! Verifies that file digests match the reference algorithms and stay stable
//! across chunk sizes.

use hashguard::tree::hasher::{self, FileHasher, HashAlgorithm};
use hashguard::types::Digest;
use sha2::{Digest as _, Sha256};
use std::fs;
use tempfile::TempDir;

/// Test that file digest matches BLAKE3 directly
#[test]
fn test_file_digest_matches_blake3() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("test.txt");
    fs::write(&file, "test content").unwrap();

    let expected = blake3::hash(b"test content").to_hex().to_string();
    assert_eq!(hasher::hash_file(&file), Digest::Hash(expected));
}

/// Test that file digest matches SHA-256 directly
#[test]
fn test_file_digest_matches_sha256() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("test.txt");
    fs::write(&file, "test content").unwrap();

    let expected = hex::encode(Sha256::digest(b"test content"));
    let digest = FileHasher::new(HashAlgorithm::Sha256).hash(&file);
    assert_eq!(digest, Digest::Hash(expected));
}

/// Test that files larger than one chunk hash identically at any chunk size
#[test]
fn test_large_file_chunk_size_independence() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("large.bin");
    let content: Vec<u8> = (0..200_000u32).map(|i| (i * 31 % 256) as u8).collect();
    fs::write(&file, &content).unwrap();

    for algorithm in [HashAlgorithm::Blake3, HashAlgorithm::Sha256] {
        let reference = hasher::compute_content_hash(&content, algorithm);
        for chunk_size in [1usize, 512, 4096, 1 << 20] {
            let digest = FileHasher::new(algorithm)
                .with_chunk_size(chunk_size)
                .hash(&file);
            assert_eq!(digest, Digest::Hash(reference.clone()));
        }
    }
}

/// Test that empty files produce the empty-input digest
#[test]
fn test_empty_file_digest() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("empty");
    fs::write(&file, "").unwrap();

    assert_eq!(
        FileHasher::new(HashAlgorithm::Sha256).hash(&file),
        Digest::Hash(
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855".to_string()
        )
    );
}

/// Test that different content gives different digests
#[test]
fn test_content_sensitivity() {
    let temp_dir = TempDir::new().unwrap();
    let a = temp_dir.path().join("a");
    let b = temp_dir.path().join("b");
    fs::write(&a, "content 1").unwrap();
    fs::write(&b, "content 2").unwrap();

    assert_ne!(hasher::hash_file(&a), hasher::hash_file(&b));
}

/// Test that an unreadable file yields a marker carrying the cause
#[test]
fn test_missing_file_marker_carries_cause() {
    let temp_dir = TempDir::new().unwrap();
    match hasher::hash_file(&temp_dir.path().join("gone")) {
        Digest::Unreadable(cause) => assert!(!cause.is_empty()),
        other => panic!("expected unreadable marker, got {:?}", other),
    }
}
