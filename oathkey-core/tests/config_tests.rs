//! Profile store integration tests

use oathkey_core::config::toml_config::{load_store_from_path, save_store_to_path, ProfileStore};
use oathkey_core::config::OtpProfile;
use tempfile::tempdir;

#[test]
fn roundtrip_preserves_all_fields() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");

    let mut store = ProfileStore::default();
    store.upsert(OtpProfile {
        name: "work".to_string(),
        issuer: Some("Acme Inc".to_string()),
        account: Some("jane@acme.example".to_string()),
        algorithm: "sha256".to_string(),
        digits: 8,
        period: 60,
    });

    save_store_to_path(&store, &path).unwrap();
    let loaded = load_store_from_path(&path).unwrap();

    let profile = loaded.find("work").unwrap();
    assert_eq!(profile.issuer.as_deref(), Some("Acme Inc"));
    assert_eq!(profile.account.as_deref(), Some("jane@acme.example"));
    assert_eq!(profile.algorithm, "sha256");
    assert_eq!(profile.digits, 8);
    assert_eq!(profile.period, 60);
}

#[test]
fn save_creates_parent_directories() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("config.toml");

    let store = ProfileStore::default();
    save_store_to_path(&store, &path).unwrap();
    assert!(path.exists());
}

#[test]
fn save_rejects_invalid_profiles() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");

    let mut store = ProfileStore::default();
    store.upsert(OtpProfile::new("bad".to_string(), "sha1".to_string(), 9, 30));

    assert!(save_store_to_path(&store, &path).is_err());
    assert!(!path.exists());
}

#[test]
fn multiple_profiles_are_independent() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");

    let mut store = ProfileStore::default();
    store.upsert(OtpProfile::new("a".to_string(), "sha1".to_string(), 6, 30));
    store.upsert(OtpProfile::new("b".to_string(), "md5".to_string(), 8, 30));

    save_store_to_path(&store, &path).unwrap();
    let mut loaded = load_store_from_path(&path).unwrap();

    assert_eq!(loaded.profiles.len(), 2);
    assert!(loaded.remove("a"));
    assert!(loaded.find("b").is_some());
}
