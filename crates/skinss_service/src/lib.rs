//! Asset service facade for the skinss asset server.
//!
//! [`SkinService`] is the single entry point every ingestion channel (HTTP,
//! Discord) calls: it validates uploads against the expected image container
//! formats, persists the blob, and keeps the profile sidecar consistent with
//! what is on disk. Callers never talk to the stores directly, so validation
//! rules exist in exactly one place.
//!
//! # Example
//!
//! ```rust
//! use skinss_service::SkinService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = SkinService::open("/tmp/skinss-data")?;
//!
//! let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
//! let receipt = service.upload_skin("alice", &png, Some("slim")).await?;
//! println!("stored skin {}", receipt.skin_hash);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod receipt;
mod service;

pub use receipt::{CapeUploadReceipt, SkinUploadReceipt};
pub use service::{CapeAsset, SkinAsset, SkinService};
