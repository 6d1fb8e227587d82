//! Top-level error wrapper types.

use crate::{ConfigError, ProfileError, ServerError, StorageError, UploadError};

/// This is the foundation error enum for the skinss workspace. Each member
/// crate surfaces failures through one of these domains.
///
/// # Examples
///
/// ```
/// use skinss_error::{SkinssError, ConfigError};
///
/// let cfg_err = ConfigError::new("PORT is not a number");
/// let err: SkinssError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SkinssErrorKind {
    /// Durable storage read/write failure
    #[from(StorageError)]
    Storage(StorageError),
    /// Profile record failure (corrupt or unserializable metadata)
    #[from(ProfileError)]
    Profile(ProfileError),
    /// Upload validation failure
    #[from(UploadError)]
    Upload(UploadError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Skinss error with kind discrimination.
///
/// # Examples
///
/// ```
/// use skinss_error::{SkinssResult, StorageError, StorageErrorKind};
///
/// fn might_fail() -> SkinssResult<()> {
///     Err(StorageError::new(StorageErrorKind::FileWrite("disk full".into())))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Skinss Error: {}", _0)]
pub struct SkinssError(Box<SkinssErrorKind>);

impl SkinssError {
    /// Create a new error from a kind.
    pub fn new(kind: SkinssErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SkinssErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to SkinssErrorKind
impl<T> From<T> for SkinssError
where
    T: Into<SkinssErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for skinss operations.
///
/// # Examples
///
/// ```
/// use skinss_error::{SkinssResult, ProfileError, ProfileErrorKind};
///
/// fn load() -> SkinssResult<String> {
///     Err(ProfileError::new(ProfileErrorKind::Corrupt("truncated".into())))?
/// }
/// ```
pub type SkinssResult<T> = std::result::Result<T, SkinssError>;
