//! Discord-specific error types.

/// Kinds of Discord integration errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DiscordErrorKind {
    /// Failed to connect to the Discord gateway
    #[display("Connection failed: {}", _0)]
    ConnectionFailed(String),
    /// Failed to download an attachment
    #[display("Attachment download failed: {}", _0)]
    Download(String),
}

/// Discord error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Discord Error: {} at line {} in {}", kind, line, file)]
pub struct DiscordError {
    /// The kind of error that occurred
    pub kind: DiscordErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DiscordError {
    /// Create a new Discord error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DiscordErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
