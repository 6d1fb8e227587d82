//! Identifier validation.

use skinss_error::{SkinssResult, StorageError, StorageErrorKind};

/// Validate that an identifier is safe to embed in a file name.
///
/// Identifiers are opaque keys, but they become path segments in the data
/// directory, so anything empty or capable of escaping the directory is
/// rejected before a path is ever built.
pub(crate) fn validate(identifier: &str) -> SkinssResult<()> {
    if identifier.is_empty() {
        return Err(StorageError::new(StorageErrorKind::InvalidIdentifier(
            "empty identifier".to_string(),
        ))
        .into());
    }
    if identifier == "." || identifier == ".." {
        return Err(StorageError::new(StorageErrorKind::InvalidIdentifier(
            identifier.to_string(),
        ))
        .into());
    }
    if identifier
        .chars()
        .any(|c| c == '/' || c == '\\' || c == '\0')
    {
        return Err(StorageError::new(StorageErrorKind::InvalidIdentifier(
            identifier.to_string(),
        ))
        .into());
    }
    Ok(())
}
