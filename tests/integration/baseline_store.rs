//! Integration tests for baseline persistence

use super::test_utils::Fixture;
use hashguard::error::StorageError;
use hashguard::store::{BaselineStore, JsonBaselineStore};
use hashguard::tree::scanner::scan;
use hashguard::types::{Digest, Snapshot};
use std::fs;

/// Test that a scanned snapshot survives save and load unchanged
#[test]
fn test_scanned_snapshot_roundtrip() {
    let fixture = Fixture::new();
    fixture.write("a.txt", "alpha");
    fixture.write("dir/b.txt", "beta");

    let store = JsonBaselineStore::new(&fixture.baseline);
    let snapshot = scan(&fixture.data).unwrap();
    store.save(&snapshot).unwrap();

    assert_eq!(store.load().unwrap(), snapshot);
}

/// Test that the first load with no baseline is an empty snapshot
#[test]
fn test_first_run_loads_empty() {
    let fixture = Fixture::new();
    let store = JsonBaselineStore::new(&fixture.baseline);
    assert_eq!(store.load().unwrap(), Snapshot::empty());
}

/// Test that a baseline file written by hand in the documented format loads
#[test]
fn test_loads_flat_json_object() {
    let fixture = Fixture::new();
    let hash = "ab".repeat(32);
    let contents = format!(
        "{{\n    \"/srv/a\": \"{}\",\n    \"/srv/b\": \"{}\"\n}}",
        hash, "Error: [Errno 13] Permission denied: '/srv/b'"
    );
    fs::write(&fixture.baseline, contents).unwrap();

    let loaded = JsonBaselineStore::new(&fixture.baseline).load().unwrap();
    assert_eq!(loaded.get("/srv/a"), Some(&Digest::Hash(hash)));
    assert_eq!(
        loaded.get("/srv/b"),
        Some(&Digest::Unreadable(
            "[Errno 13] Permission denied: '/srv/b'".to_string()
        ))
    );
}

/// Test that truncated data is reported as corrupt rather than empty
#[test]
fn test_truncated_baseline_is_corrupt() {
    let fixture = Fixture::new();
    fixture.write("a.txt", "alpha");
    let store = JsonBaselineStore::new(&fixture.baseline);
    store.save(&scan(&fixture.data).unwrap()).unwrap();

    let full = fs::read(&fixture.baseline).unwrap();
    fs::write(&fixture.baseline, &full[..full.len() / 2]).unwrap();

    match store.load() {
        Err(StorageError::BaselineCorrupt { path, .. }) => assert_eq!(path, fixture.baseline),
        other => panic!("expected corrupt baseline error, got {:?}", other),
    }
}

/// Test that a failed save keeps the previous baseline intact
#[cfg(unix)]
#[test]
fn test_failed_save_keeps_previous_baseline() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = Fixture::new();
    let dir = fixture.root().join("locked");
    fs::create_dir(&dir).unwrap();
    let path = dir.join("base.json");
    let store = JsonBaselineStore::new(&path);

    let original: Snapshot = vec![("/a".to_string(), Digest::Hash("1".repeat(64)))]
        .into_iter()
        .collect();
    store.save(&original).unwrap();

    fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();
    let writable = fs::write(dir.join("probe"), "x").is_ok();
    let replacement: Snapshot = vec![("/b".to_string(), Digest::Hash("2".repeat(64)))]
        .into_iter()
        .collect();
    let result = store.save(&replacement);
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();

    if writable {
        // Permissions are not enforced for this user
        return;
    }
    assert!(matches!(result, Err(StorageError::BaselineWrite { .. })));
    assert_eq!(store.load().unwrap(), original);
    assert!(!dir.join("base.json.tmp").exists());
}

/// Test that a digest which could not be loaded back is refused at save time
#[test]
fn test_unloadable_digest_is_not_saved() {
    let fixture = Fixture::new();
    let store = JsonBaselineStore::new(&fixture.baseline);
    let snapshot: Snapshot = vec![("/a".to_string(), Digest::Hash("h1".to_string()))]
        .into_iter()
        .collect();

    let result = store.save(&snapshot);
    assert!(matches!(result, Err(StorageError::InvalidDigest { .. })));
    assert!(!fixture.baseline.exists());
    assert_eq!(store.load().unwrap(), Snapshot::empty());
}
