//! Blob storage trait definition.

use skinss_core::AssetKind;
use skinss_error::SkinssResult;

/// Trait for pluggable blob storage backends.
///
/// Implementations persist the raw binary content of one asset kind per
/// identifier. Validation and profile bookkeeping happen above this seam, in
/// the service facade.
#[async_trait::async_trait]
pub trait AssetStore: Send + Sync {
    /// Write `data` as the current blob for `(identifier, kind)`, fully
    /// replacing any prior blob. Readers must never observe a partial write.
    async fn put(&self, identifier: &str, kind: AssetKind, data: &[u8]) -> SkinssResult<()>;

    /// Read the current blob for `(identifier, kind)`.
    ///
    /// Returns `None` when no blob exists; absence is a normal signal, not a
    /// failure.
    async fn get(&self, identifier: &str, kind: AssetKind) -> SkinssResult<Option<Vec<u8>>>;

    /// Remove the current blob if present. A no-op when already absent.
    async fn delete(&self, identifier: &str, kind: AssetKind) -> SkinssResult<()>;

    /// Check whether a blob exists for `(identifier, kind)`.
    async fn exists(&self, identifier: &str, kind: AssetKind) -> SkinssResult<bool>;
}
