//! The asset service facade.

use crate::{CapeUploadReceipt, SkinUploadReceipt};
use skinss_core::{AssetKind, ImageFormat, Profile, SkinModel, content_digest};
use skinss_error::{SkinssResult, UploadError, UploadErrorKind};
use skinss_storage::{AssetStore, FileSystemAssets, ProfileStore};
use std::path::Path;
use std::sync::Arc;

/// A skin blob plus the model variant recorded for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinAsset {
    /// Raw PNG bytes
    pub data: Vec<u8>,
    /// Body-model variant from the profile record
    pub model: SkinModel,
}

/// A cape blob plus its animated-container flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapeAsset {
    /// Raw PNG or GIF bytes
    pub data: Vec<u8>,
    /// Whether the blob is an animated GIF container
    pub is_gif: bool,
}

impl CapeAsset {
    /// Content type to serve this cape with.
    pub fn content_type(&self) -> &'static str {
        if self.is_gif { "image/gif" } else { "image/png" }
    }
}

/// The operation set external callers invoke.
///
/// Uploads validate first (empty body, then signature classification), write
/// the blob, then mutate and save the profile record — the record save is
/// the commit point, so a validation failure mutates nothing and a reader
/// never observes a record claiming a blob that was never written.
pub struct SkinService {
    assets: Arc<dyn AssetStore>,
    profiles: ProfileStore,
}

impl SkinService {
    /// Create a service over an arbitrary blob backend and profile store.
    pub fn new(assets: Arc<dyn AssetStore>, profiles: ProfileStore) -> Self {
        Self { assets, profiles }
    }

    /// Convenience constructor: filesystem blobs and sidecars under one data
    /// directory.
    pub fn open(data_dir: impl AsRef<Path>) -> SkinssResult<Self> {
        let data_dir = data_dir.as_ref();
        let assets = FileSystemAssets::new(data_dir)?;
        let profiles = ProfileStore::new(data_dir)?;
        Ok(Self::new(Arc::new(assets), profiles))
    }

    /// Store a skin for `identifier`.
    ///
    /// The payload must carry the full 8-byte PNG signature. `model_hint` is
    /// case-normalized; only `"slim"` selects the slim variant.
    ///
    /// # Errors
    ///
    /// [`UploadErrorKind::EmptyBody`] for a zero-length payload,
    /// [`UploadErrorKind::UnsupportedFormat`] for anything that is not PNG.
    /// Either failure leaves prior state untouched.
    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    pub async fn upload_skin(
        &self,
        identifier: &str,
        data: &[u8],
        model_hint: Option<&str>,
    ) -> SkinssResult<SkinUploadReceipt> {
        if data.is_empty() {
            return Err(UploadError::new(UploadErrorKind::EmptyBody).into());
        }
        if ImageFormat::sniff(data) != ImageFormat::Png {
            return Err(UploadError::new(UploadErrorKind::UnsupportedFormat(
                "skin must be PNG".to_string(),
            ))
            .into());
        }

        let model = SkinModel::resolve(model_hint);
        let hash = content_digest(data);

        // Blob first, record second: the record save commits the upload.
        self.assets.put(identifier, AssetKind::Skin, data).await?;

        let mut profile = self.profiles.load_or_default(identifier).await?;
        profile.apply_skin_upload(hash.clone(), model);
        self.profiles.save(identifier, &profile).await?;

        tracing::info!(identifier = %identifier, model = %model, hash = %hash, "Skin uploaded");
        Ok(SkinUploadReceipt {
            skin_hash: hash,
            model,
        })
    }

    /// Store a cape for `identifier`. Accepts PNG or GIF payloads.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`SkinService::upload_skin`], with GIF additionally
    /// accepted.
    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    pub async fn upload_cape(
        &self,
        identifier: &str,
        data: &[u8],
    ) -> SkinssResult<CapeUploadReceipt> {
        if data.is_empty() {
            return Err(UploadError::new(UploadErrorKind::EmptyBody).into());
        }
        let is_gif = match ImageFormat::sniff(data) {
            ImageFormat::Png => false,
            ImageFormat::Gif => true,
            ImageFormat::Unknown => {
                return Err(UploadError::new(UploadErrorKind::UnsupportedFormat(
                    "cape must be PNG or GIF".to_string(),
                ))
                .into());
            }
        };

        let hash = content_digest(data);

        self.assets.put(identifier, AssetKind::Cape, data).await?;

        let mut profile = self.profiles.load_or_default(identifier).await?;
        profile.apply_cape_upload(hash.clone(), is_gif);
        self.profiles.save(identifier, &profile).await?;

        tracing::info!(identifier = %identifier, is_gif = is_gif, hash = %hash, "Cape uploaded");
        Ok(CapeUploadReceipt {
            cape_hash: hash,
            cape_is_gif: is_gif,
        })
    }

    /// Remove the skin for `identifier`. Succeeds whether or not a skin
    /// exists; the recorded model variant is retained.
    #[tracing::instrument(skip(self))]
    pub async fn delete_skin(&self, identifier: &str) -> SkinssResult<()> {
        self.assets.delete(identifier, AssetKind::Skin).await?;

        let mut profile = self.profiles.load_or_default(identifier).await?;
        profile.clear_skin();
        self.profiles.save(identifier, &profile).await?;

        tracing::info!(identifier = %identifier, "Skin deleted");
        Ok(())
    }

    /// Remove the cape for `identifier`. Succeeds whether or not a cape
    /// exists.
    #[tracing::instrument(skip(self))]
    pub async fn delete_cape(&self, identifier: &str) -> SkinssResult<()> {
        self.assets.delete(identifier, AssetKind::Cape).await?;

        let mut profile = self.profiles.load_or_default(identifier).await?;
        profile.clear_cape();
        self.profiles.save(identifier, &profile).await?;

        tracing::info!(identifier = %identifier, "Cape deleted");
        Ok(())
    }

    /// The profile record for `identifier` — the default record when nothing
    /// has ever been uploaded.
    #[tracing::instrument(skip(self))]
    pub async fn metadata(&self, identifier: &str) -> SkinssResult<Profile> {
        self.profiles.load_or_default(identifier).await
    }

    /// Fetch the skin blob and its model variant, or `None` when absent.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_skin(&self, identifier: &str) -> SkinssResult<Option<SkinAsset>> {
        // Blob first, then record: mirrors the write ordering, so the model
        // read here is at least as new as the blob.
        let Some(data) = self.assets.get(identifier, AssetKind::Skin).await? else {
            return Ok(None);
        };
        let profile = self.profiles.load_or_default(identifier).await?;
        Ok(Some(SkinAsset {
            data,
            model: profile.model,
        }))
    }

    /// Fetch the cape blob and its animated-container flag, or `None` when
    /// absent.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_cape(&self, identifier: &str) -> SkinssResult<Option<CapeAsset>> {
        let Some(data) = self.assets.get(identifier, AssetKind::Cape).await? else {
            return Ok(None);
        };
        let profile = self.profiles.load_or_default(identifier).await?;
        Ok(Some(CapeAsset {
            data,
            is_gif: profile.cape_is_gif,
        }))
    }
}
