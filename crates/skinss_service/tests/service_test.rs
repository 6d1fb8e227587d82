//! End-to-end tests for the asset service facade.

use skinss_core::{Profile, SkinModel, content_digest};
use skinss_error::{SkinssErrorKind, UploadErrorKind};
use skinss_service::SkinService;
use tempfile::TempDir;

const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn png_bytes() -> Vec<u8> {
    let mut data = PNG_HEADER.to_vec();
    data.extend_from_slice(b"fake png payload");
    data
}

fn gif_bytes() -> Vec<u8> {
    let mut data = b"GIF89a".to_vec();
    data.extend_from_slice(b"fake gif payload");
    data
}

#[tokio::test]
async fn test_upload_skin_slim() {
    let temp_dir = TempDir::new().unwrap();
    let service = SkinService::open(temp_dir.path()).unwrap();

    let data = png_bytes();
    let receipt = service.upload_skin("alice", &data, Some("slim")).await.unwrap();

    assert_eq!(receipt.model, SkinModel::Slim);
    assert_eq!(receipt.skin_hash, content_digest(&data));

    let meta = service.metadata("alice").await.unwrap();
    assert!(meta.has_skin);
    assert_eq!(meta.model, SkinModel::Slim);
    assert_eq!(meta.skin_hash, receipt.skin_hash);

    let asset = service.fetch_skin("alice").await.unwrap().unwrap();
    assert_eq!(asset.data, data);
    assert_eq!(asset.model, SkinModel::Slim);
}

#[tokio::test]
async fn test_model_hint_resolution() {
    let temp_dir = TempDir::new().unwrap();
    let service = SkinService::open(temp_dir.path()).unwrap();

    let data = png_bytes();

    let receipt = service.upload_skin("a", &data, Some("Slim")).await.unwrap();
    assert_eq!(receipt.model, SkinModel::Slim);

    let receipt = service.upload_skin("b", &data, Some("thin")).await.unwrap();
    assert_eq!(receipt.model, SkinModel::Default);

    let receipt = service.upload_skin("c", &data, None).await.unwrap();
    assert_eq!(receipt.model, SkinModel::Default);
}

#[tokio::test]
async fn test_delete_skin_retains_model() {
    let temp_dir = TempDir::new().unwrap();
    let service = SkinService::open(temp_dir.path()).unwrap();

    service
        .upload_skin("alice", &png_bytes(), Some("slim"))
        .await
        .unwrap();
    service.delete_skin("alice").await.unwrap();

    let meta = service.metadata("alice").await.unwrap();
    assert!(!meta.has_skin);
    assert_eq!(meta.skin_hash, "");
    assert_eq!(meta.model, SkinModel::Slim);

    assert!(service.fetch_skin("alice").await.unwrap().is_none());
}

#[tokio::test]
async fn test_cape_gif_flag_and_content_type() {
    let temp_dir = TempDir::new().unwrap();
    let service = SkinService::open(temp_dir.path()).unwrap();

    let gif = gif_bytes();
    let receipt = service.upload_cape("alice", &gif).await.unwrap();
    assert!(receipt.cape_is_gif);
    assert_eq!(receipt.cape_hash, content_digest(&gif));

    let asset = service.fetch_cape("alice").await.unwrap().unwrap();
    assert!(asset.is_gif);
    assert_eq!(asset.content_type(), "image/gif");

    // Re-upload as PNG flips the flag.
    let png = png_bytes();
    let receipt = service.upload_cape("alice", &png).await.unwrap();
    assert!(!receipt.cape_is_gif);

    let asset = service.fetch_cape("alice").await.unwrap().unwrap();
    assert_eq!(asset.data, png);
    assert_eq!(asset.content_type(), "image/png");
}

#[tokio::test]
async fn test_delete_cape_clears_gif_flag() {
    let temp_dir = TempDir::new().unwrap();
    let service = SkinService::open(temp_dir.path()).unwrap();

    service.upload_cape("alice", &gif_bytes()).await.unwrap();
    service.delete_cape("alice").await.unwrap();

    let meta = service.metadata("alice").await.unwrap();
    assert!(!meta.has_cape);
    assert!(!meta.cape_is_gif);
    assert_eq!(meta.cape_hash, "");

    assert!(service.fetch_cape("alice").await.unwrap().is_none());
}

#[tokio::test]
async fn test_empty_body_rejected_without_mutation() {
    let temp_dir = TempDir::new().unwrap();
    let service = SkinService::open(temp_dir.path()).unwrap();

    let data = png_bytes();
    service
        .upload_skin("alice", &data, Some("slim"))
        .await
        .unwrap();
    let before = service.metadata("alice").await.unwrap();

    let err = service.upload_skin("alice", &[], None).await.unwrap_err();
    match err.kind() {
        SkinssErrorKind::Upload(upload) => {
            assert_eq!(upload.kind, UploadErrorKind::EmptyBody);
        }
        other => panic!("unexpected error kind: {:?}", other),
    }

    // Prior blob and record are untouched.
    assert_eq!(service.metadata("alice").await.unwrap(), before);
    let asset = service.fetch_skin("alice").await.unwrap().unwrap();
    assert_eq!(asset.data, data);
}

#[tokio::test]
async fn test_jpeg_skin_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let service = SkinService::open(temp_dir.path()).unwrap();

    let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];
    let err = service.upload_skin("alice", &jpeg, None).await.unwrap_err();
    match err.kind() {
        SkinssErrorKind::Upload(upload) => {
            assert!(matches!(
                upload.kind,
                UploadErrorKind::UnsupportedFormat(_)
            ));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }

    let meta = service.metadata("alice").await.unwrap();
    assert_eq!(meta, Profile::default());
}

#[tokio::test]
async fn test_gif_skin_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let service = SkinService::open(temp_dir.path()).unwrap();

    // GIF is valid for capes only.
    let err = service
        .upload_skin("alice", &gif_bytes(), None)
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), SkinssErrorKind::Upload(_)));
}

#[tokio::test]
async fn test_unknown_identifier_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let service = SkinService::open(temp_dir.path()).unwrap();

    assert!(service.fetch_skin("nobody").await.unwrap().is_none());
    assert!(service.fetch_cape("nobody").await.unwrap().is_none());
    assert_eq!(
        service.metadata("nobody").await.unwrap(),
        Profile::default()
    );
}

#[tokio::test]
async fn test_deleting_everything_leaves_default_shaped_record() {
    let temp_dir = TempDir::new().unwrap();
    let service = SkinService::open(temp_dir.path()).unwrap();

    service.upload_skin("alice", &png_bytes(), None).await.unwrap();
    service.upload_cape("alice", &gif_bytes()).await.unwrap();
    service.delete_skin("alice").await.unwrap();
    service.delete_cape("alice").await.unwrap();

    // The record is still materialized on disk, but reads like the default.
    let meta = service.metadata("alice").await.unwrap();
    assert_eq!(meta, Profile::default());
    assert!(temp_dir.path().join("alice.json").exists());
}
