//! Discord ingestion channel for the skinss asset server.
//!
//! An alternate upload path: users drop image attachments in a configured
//! channel and the bot stores them against their numeric Discord user id.
//! The attachment filename only picks the asset kind (a name containing
//! "cape" targets the cape slot, everything else the skin slot) — content
//! validation is the [`skinss_service::SkinService`] facade's signature
//! sniffing, exactly as for HTTP uploads, so a mislabeled file is rejected
//! rather than stored.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod handler;

pub use client::SkinssBot;
pub use config::BotConfig;
pub use error::{DiscordError, DiscordErrorKind};
pub use handler::SkinssHandler;
