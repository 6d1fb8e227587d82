//! Upload validation error types.

/// Kinds of upload validation failures.
///
/// Validation runs before any write, so a rejected upload leaves both the
/// blob and the profile record untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum UploadErrorKind {
    /// Upload body had zero length
    #[display("Empty upload body")]
    EmptyBody,
    /// Payload failed signature classification for the target asset kind
    #[display("Unsupported format: {}", _0)]
    UnsupportedFormat(String),
}

/// Upload validation error with location tracking.
///
/// # Examples
///
/// ```
/// use skinss_error::{UploadError, UploadErrorKind};
///
/// let err = UploadError::new(UploadErrorKind::EmptyBody);
/// assert!(format!("{}", err).contains("Empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upload Error: {} at line {} in {}", kind, line, file)]
pub struct UploadError {
    /// The kind of error that occurred
    pub kind: UploadErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl UploadError {
    /// Create a new upload error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UploadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
