//! Durable blob and profile storage for the skinss asset server.
//!
//! This crate owns the on-disk layout: per identifier, up to three artifacts
//! live side by side in one data directory — a skin blob (`{id}.skin`), a
//! cape blob (`{id}.cape`), and a JSON profile sidecar (`{id}.json`). There
//! is no index file; the identifier namespace is the filesystem itself.
//!
//! # Features
//!
//! - **Pluggable blob backend**: the [`AssetStore`] trait separates blob I/O
//!   from the rest of the system
//! - **Atomic replacement**: every write goes to a temp file first and is
//!   renamed into place, so readers never observe a partial blob or sidecar
//! - **Load-or-default profiles**: a missing sidecar reads back as the
//!   default record; only an unparseable sidecar is an error
//!
//! # Example
//!
//! ```rust
//! use skinss_core::AssetKind;
//! use skinss_storage::{AssetStore, FileSystemAssets, ProfileStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let assets = FileSystemAssets::new("/tmp/skinss-data")?;
//! let profiles = ProfileStore::new("/tmp/skinss-data")?;
//!
//! assets.put("d9a77b0c", AssetKind::Skin, b"...png bytes...").await?;
//! let blob = assets.get("d9a77b0c", AssetKind::Skin).await?;
//! assert!(blob.is_some());
//!
//! let profile = profiles.load_or_default("d9a77b0c").await?;
//! profiles.save("d9a77b0c", &profile).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset_store;
mod filesystem;
mod identifier;
mod profile_store;

pub use asset_store::AssetStore;
pub use filesystem::FileSystemAssets;
pub use profile_store::ProfileStore;
pub use skinss_error::{StorageError, StorageErrorKind};
