//! Tests for the filesystem blob backend.

use skinss_core::AssetKind;
use skinss_storage::{AssetStore, FileSystemAssets};
use tempfile::TempDir;

#[tokio::test]
async fn test_put_and_get() {
    let temp_dir = TempDir::new().unwrap();
    let assets = FileSystemAssets::new(temp_dir.path()).unwrap();

    let data = b"not really a png, storage does not care";
    assets.put("alice", AssetKind::Skin, data).await.unwrap();

    let retrieved = assets.get("alice", AssetKind::Skin).await.unwrap();
    assert_eq!(retrieved.as_deref(), Some(data.as_slice()));

    // Stored under the expected flat layout.
    assert!(temp_dir.path().join("alice.skin").exists());
}

#[tokio::test]
async fn test_get_absent_is_none() {
    let temp_dir = TempDir::new().unwrap();
    let assets = FileSystemAssets::new(temp_dir.path()).unwrap();

    let retrieved = assets.get("nobody", AssetKind::Cape).await.unwrap();
    assert!(retrieved.is_none());
}

#[tokio::test]
async fn test_put_overwrites_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let assets = FileSystemAssets::new(temp_dir.path()).unwrap();

    assets.put("alice", AssetKind::Cape, b"old").await.unwrap();
    assets.put("alice", AssetKind::Cape, b"new").await.unwrap();

    let retrieved = assets.get("alice", AssetKind::Cape).await.unwrap();
    assert_eq!(retrieved.as_deref(), Some(b"new".as_slice()));

    // No temp file left behind after the rename.
    assert!(!temp_dir.path().join("alice.cape.tmp").exists());
}

#[tokio::test]
async fn test_kinds_are_independent() {
    let temp_dir = TempDir::new().unwrap();
    let assets = FileSystemAssets::new(temp_dir.path()).unwrap();

    assets.put("alice", AssetKind::Skin, b"skin").await.unwrap();
    assets.put("alice", AssetKind::Cape, b"cape").await.unwrap();

    assets.delete("alice", AssetKind::Skin).await.unwrap();

    assert!(!assets.exists("alice", AssetKind::Skin).await.unwrap());
    assert!(assets.exists("alice", AssetKind::Cape).await.unwrap());
}

#[tokio::test]
async fn test_delete_absent_is_noop() {
    let temp_dir = TempDir::new().unwrap();
    let assets = FileSystemAssets::new(temp_dir.path()).unwrap();

    // Never uploaded; delete must still succeed.
    assets.delete("ghost", AssetKind::Skin).await.unwrap();
    assets.delete("ghost", AssetKind::Skin).await.unwrap();
}

#[tokio::test]
async fn test_unsafe_identifier_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let assets = FileSystemAssets::new(temp_dir.path()).unwrap();

    for id in ["", "..", "../escape", "a/b"] {
        let result = assets.put(id, AssetKind::Skin, b"data").await;
        assert!(result.is_err(), "identifier {:?} should be rejected", id);
    }
}
