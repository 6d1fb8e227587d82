//! Error types for the skinss asset server.
//!
//! This crate provides the foundation error types used throughout the skinss
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use skinss_error::{SkinssResult, UploadError, UploadErrorKind};
//!
//! fn validate(body: &[u8]) -> SkinssResult<()> {
//!     if body.is_empty() {
//!         Err(UploadError::new(UploadErrorKind::EmptyBody))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate(&[]).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod profile;
mod server;
mod storage;
mod upload;

pub use config::ConfigError;
pub use error::{SkinssError, SkinssErrorKind, SkinssResult};
pub use profile::{ProfileError, ProfileErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use upload::{UploadError, UploadErrorKind};
