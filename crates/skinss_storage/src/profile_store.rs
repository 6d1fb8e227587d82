//! Profile record persistence.

use crate::filesystem::write_atomic;
use crate::identifier;
use skinss_core::Profile;
use skinss_error::{ProfileError, ProfileErrorKind, SkinssResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Persists one [`Profile`] sidecar per identifier as `{base_path}/{id}.json`.
///
/// The sidecar is pretty-printed JSON and is always rewritten as a full
/// replacement. A missing sidecar is not an error: `load_or_default` makes
/// the default-record rule explicit instead of leaving it to ambient
/// fallback behavior.
pub struct ProfileStore {
    base_path: PathBuf,
}

impl ProfileStore {
    /// Create a profile store rooted at `base_path`.
    ///
    /// Creates the directory if it doesn't exist.
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

        Ok(Self { base_path })
    }

    /// Sidecar path for an identifier.
    fn profile_path(&self, identifier: &str) -> SkinssResult<PathBuf> {
        identifier::validate(identifier)?;
        Ok(self.base_path.join(format!("{}.json", identifier)))
    }

    /// Load the profile record for `identifier`, or the default record if
    /// none has been persisted yet.
    ///
    /// # Errors
    ///
    /// - A sidecar that exists but cannot be parsed is a
    ///   [`ProfileErrorKind::Corrupt`] failure, propagated rather than
    ///   silently defaulted.
    /// - Any other read failure surfaces as a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn load_or_default(&self, identifier: &str) -> SkinssResult<Profile> {
        let path = self.profile_path(identifier)?;

        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(identifier = %identifier, "No profile sidecar, using default");
                return Ok(Profile::default());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into());
            }
        };

        serde_json::from_slice(&raw).map_err(|e| {
            ProfileError::new(ProfileErrorKind::Corrupt(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()
        })
    }

    /// Serialize `profile` and replace any prior sidecar for `identifier`.
    ///
    /// Written atomically (temp file + rename); callers treat this write as
    /// the commit point after a blob write.
    #[tracing::instrument(skip(self, profile))]
    pub async fn save(&self, identifier: &str, profile: &Profile) -> SkinssResult<()> {
        let path = self.profile_path(identifier)?;

        let json = serde_json::to_vec_pretty(profile)
            .map_err(|e| ProfileError::new(ProfileErrorKind::Serialize(e.to_string())))?;

        write_atomic(&path, &json).await?;

        tracing::info!(identifier = %identifier, "Saved profile sidecar");
        Ok(())
    }

    /// The data directory this store writes into.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
