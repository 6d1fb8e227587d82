//! Content fingerprinting.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of a byte buffer as lowercase hex.
///
/// Used purely as a content fingerprint for change detection and
/// cache-busting, not as a security boundary.
///
/// # Examples
///
/// ```
/// use skinss_core::content_digest;
///
/// assert_eq!(
///     content_digest(b"abc"),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn content_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
