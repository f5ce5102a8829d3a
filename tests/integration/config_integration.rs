//! Integration tests for layered configuration loading

use super::test_utils::{with_env_vars, Fixture};
use hashguard::config::{global_config_path, ConfigLoader, LOCAL_CONFIG_FILE};
use hashguard::tree::hasher::HashAlgorithm;
use std::fs;
use std::path::PathBuf;

/// Test that with no files present the defaults are used
#[test]
fn test_defaults_without_files() {
    let fixture = Fixture::new();
    let xdg = fixture.root().join("xdg");
    let config = with_env_vars(&[("XDG_CONFIG_HOME", xdg.to_str().unwrap())], || {
        ConfigLoader::load(&fixture.data).unwrap()
    });

    assert_eq!(config.baseline.path, PathBuf::from("file_hashes.json"));
    assert_eq!(config.scan.algorithm, HashAlgorithm::Blake3);
    assert_eq!(config.scan.chunk_size, 4096);
}

/// Test that the local file overrides the global file key by key
#[test]
fn test_local_file_overrides_global() {
    let fixture = Fixture::new();
    let xdg = fixture.root().join("xdg");
    fs::create_dir_all(xdg.join("hashguard")).unwrap();
    fs::write(
        xdg.join("hashguard/config.toml"),
        "[scan]\nalgorithm = \"sha256\"\nchunk_size = 1024\n",
    )
    .unwrap();
    fs::write(
        fixture.data.join(LOCAL_CONFIG_FILE),
        "[scan]\nchunk_size = 8192\nignore_patterns = [\".git\"]\n",
    )
    .unwrap();

    let (config, global) = with_env_vars(&[("XDG_CONFIG_HOME", xdg.to_str().unwrap())], || {
        (ConfigLoader::load(&fixture.data).unwrap(), global_config_path())
    });

    assert_eq!(global, Some(xdg.join("hashguard").join("config.toml")));
    assert_eq!(config.scan.algorithm, HashAlgorithm::Sha256);
    assert_eq!(config.scan.chunk_size, 8192);
    assert_eq!(config.scan.ignore_patterns, vec![".git"]);
}

/// Test that environment variables override file settings
#[test]
fn test_environment_overrides_files() {
    let fixture = Fixture::new();
    let xdg = fixture.root().join("xdg");
    fs::write(
        fixture.data.join(LOCAL_CONFIG_FILE),
        "[scan]\nchunk_size = 8192\n",
    )
    .unwrap();

    let config = with_env_vars(
        &[
            ("XDG_CONFIG_HOME", xdg.to_str().unwrap()),
            ("HASHGUARD__SCAN__CHUNK_SIZE", "65536"),
            ("HASHGUARD__SCAN__IGNORE_PATTERNS", ".git,target"),
        ],
        || ConfigLoader::load(&fixture.data).unwrap(),
    );

    assert_eq!(config.scan.chunk_size, 65536);
    assert_eq!(config.scan.ignore_patterns, vec![".git", "target"]);
}

/// Test loading an explicit config file
#[test]
fn test_load_from_file() {
    let fixture = Fixture::new();
    let path = fixture.root().join("custom.toml");
    fs::write(
        &path,
        "[baseline]\npath = \"/var/lib/hashguard/srv.json\"\n\n[logging]\nlevel = \"warn\"\n",
    )
    .unwrap();

    let config = with_env_vars(&[], || ConfigLoader::load_from_file(&path).unwrap());
    assert_eq!(
        config.baseline.path,
        PathBuf::from("/var/lib/hashguard/srv.json")
    );
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.scan.chunk_size, 4096);
}

/// Test that an explicit config file must exist
#[test]
fn test_load_from_missing_file_fails() {
    let fixture = Fixture::new();
    let result = with_env_vars(&[], || {
        ConfigLoader::load_from_file(&fixture.root().join("absent.toml"))
    });
    assert!(result.is_err());
}

/// Test that an unknown algorithm is a load error
#[test]
fn test_unknown_algorithm_is_rejected() {
    let fixture = Fixture::new();
    let path = fixture.root().join("bad.toml");
    fs::write(&path, "[scan]\nalgorithm = \"md5\"\n").unwrap();

    let result = with_env_vars(&[], || ConfigLoader::load_from_file(&path));
    assert!(result.is_err());
}
