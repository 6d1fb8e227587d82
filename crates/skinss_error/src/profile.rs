//! Profile record error types.

/// Kinds of profile record errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProfileErrorKind {
    /// Persisted profile document could not be parsed
    #[display("Corrupt profile record: {}", _0)]
    Corrupt(String),
    /// Profile record could not be serialized
    #[display("Failed to serialize profile record: {}", _0)]
    Serialize(String),
}

/// Profile record error with location tracking.
///
/// Raised when the metadata sidecar for an identifier cannot be read back or
/// written out. A corrupt record fails only that identifier; other
/// identifiers are unaffected.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Profile Error: {} at line {} in {}", kind, line, file)]
pub struct ProfileError {
    /// The kind of error that occurred
    pub kind: ProfileErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProfileError {
    /// Create a new profile error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProfileErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
