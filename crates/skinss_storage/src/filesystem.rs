//! Filesystem-backed blob storage.
//!
//! Blobs live flat in the data directory as `{identifier}.{kind}` files,
//! replaced atomically via a temp file and rename.

use crate::AssetStore;
use crate::identifier;
use skinss_core::AssetKind;
use skinss_error::{SkinssResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Filesystem blob storage backend.
///
/// One file per `(identifier, kind)` pair: `{base_path}/{identifier}.skin`
/// and `{base_path}/{identifier}.cape`. Overwrites replace the file
/// atomically so a concurrent reader sees either the old blob or the new
/// one, never a partial write.
pub struct FileSystemAssets {
    base_path: PathBuf,
}

impl FileSystemAssets {
    /// Create a new filesystem backend rooted at `base_path`.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> SkinssResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem asset store");
        Ok(Self { base_path })
    }

    /// Blob path for `(identifier, kind)`.
    fn blob_path(&self, identifier: &str, kind: AssetKind) -> SkinssResult<PathBuf> {
        identifier::validate(identifier)?;
        Ok(self
            .base_path
            .join(format!("{}.{}", identifier, kind.as_str())))
    }
}

/// Write `data` to `path` through a sibling temp file and rename.
///
/// Rename within one directory is atomic on POSIX filesystems, which is what
/// keeps partial writes invisible to readers.
pub(crate) async fn write_atomic(path: &Path, data: &[u8]) -> SkinssResult<()> {
    // Append rather than swap the extension: `{id}.skin`, `{id}.cape`, and
    // `{id}.json` must not share one temp name.
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    tokio::fs::write(&temp_path, data).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            temp_path.display(),
            e
        )))
    })?;

    tokio::fs::rename(&temp_path, path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )))
    })?;

    Ok(())
}

#[async_trait::async_trait]
impl AssetStore for FileSystemAssets {
    #[tracing::instrument(skip(self, data), fields(size = data.len(), kind = %kind))]
    async fn put(&self, identifier: &str, kind: AssetKind, data: &[u8]) -> SkinssResult<()> {
        let path = self.blob_path(identifier, kind)?;
        write_atomic(&path, data).await?;

        tracing::info!(
            identifier = %identifier,
            kind = %kind,
            size = data.len(),
            "Stored asset blob"
        );
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(kind = %kind))]
    async fn get(&self, identifier: &str, kind: AssetKind) -> SkinssResult<Option<Vec<u8>>> {
        let path = self.blob_path(identifier, kind)?;

        match tokio::fs::read(&path).await {
            Ok(data) => {
                tracing::debug!(
                    identifier = %identifier,
                    kind = %kind,
                    size = data.len(),
                    "Retrieved asset blob"
                );
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self), fields(kind = %kind))]
    async fn delete(&self, identifier: &str, kind: AssetKind) -> SkinssResult<()> {
        let path = self.blob_path(identifier, kind)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(identifier = %identifier, kind = %kind, "Deleted asset blob");
                Ok(())
            }
            // Deleting an absent blob is a no-op, not an error.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "delete {}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self), fields(kind = %kind))]
    async fn exists(&self, identifier: &str, kind: AssetKind) -> SkinssResult<bool> {
        let path = self.blob_path(identifier, kind)?;
        Ok(tokio::fs::try_exists(&path).await.unwrap_or(false))
    }
}
