//! Core domain types for the skinss asset server.
//!
//! Everything in this crate is pure: signature classification, content
//! hashing, model-hint resolution, and the profile record type perform no
//! I/O and are deterministic over their inputs. Durable storage lives in
//! `skinss_storage`, orchestration in `skinss_service`.
//!
//! # Example
//!
//! ```
//! use skinss_core::{content_digest, ImageFormat, SkinModel};
//!
//! let png_header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
//! assert_eq!(ImageFormat::sniff(&png_header), ImageFormat::Png);
//! assert_eq!(SkinModel::resolve(Some("Slim")), SkinModel::Slim);
//! assert_eq!(content_digest(b"abc").len(), 64);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod digest;
mod format;
mod kind;
mod model;
mod profile;

pub use digest::content_digest;
pub use format::ImageFormat;
pub use kind::AssetKind;
pub use model::SkinModel;
pub use profile::Profile;
