//! Configuration for the Discord bot.

use skinss_error::ConfigError;
use std::path::PathBuf;

/// Configuration for the skinss Discord bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// Discord bot token
    pub token: String,
    /// Channel to watch for uploads; `None` watches every channel the bot
    /// can read
    pub channel_id: Option<u64>,
    /// Directory holding blobs and profile sidecars
    pub data_dir: PathBuf,
}

impl BotConfig {
    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `SKINSS_DISCORD_TOKEN` (required)
    /// - `SKINSS_DISCORD_CHANNEL` (optional numeric channel id)
    /// - `SKINSS_DATA_DIR` (default: "./data")
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var("SKINSS_DISCORD_TOKEN")
            .map_err(|_| ConfigError::new("SKINSS_DISCORD_TOKEN not set"))?;

        let channel_id = match std::env::var("SKINSS_DISCORD_CHANNEL") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|_| {
                ConfigError::new(format!("SKINSS_DISCORD_CHANNEL {:?} is not a number", raw))
            })?),
            Err(_) => None,
        };

        let data_dir = std::env::var("SKINSS_DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        Ok(Self {
            token,
            channel_id,
            data_dir: data_dir.into(),
        })
    }
}
