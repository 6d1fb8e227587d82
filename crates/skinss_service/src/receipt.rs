//! Upload receipts.

use serde::Serialize;
use skinss_core::SkinModel;

/// Result of a successful skin upload.
///
/// Serializes in camelCase so the HTTP layer can embed it directly in the
/// response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinUploadReceipt {
    /// Content fingerprint of the stored skin
    pub skin_hash: String,
    /// Resolved body-model variant
    pub model: SkinModel,
}

/// Result of a successful cape upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapeUploadReceipt {
    /// Content fingerprint of the stored cape
    pub cape_hash: String,
    /// Whether the stored cape is an animated GIF container
    pub cape_is_gif: bool,
}
