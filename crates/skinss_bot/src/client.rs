//! Bot client setup and lifecycle management.

use crate::{BotConfig, DiscordError, DiscordErrorKind, SkinssHandler};
use serenity::Client;
use serenity::model::id::ChannelId;
use skinss_service::SkinService;
use std::sync::Arc;
use tracing::{info, instrument};

/// Discord client for the skinss ingestion bot.
///
/// # Example
/// ```no_run
/// use skinss_bot::{BotConfig, SkinssBot};
/// use skinss_service::SkinService;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = BotConfig::from_env()?;
///     let service = Arc::new(SkinService::open(&config.data_dir)?);
///
///     let mut bot = SkinssBot::new(&config, service).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct SkinssBot {
    client: Client,
}

impl SkinssBot {
    /// Create a new bot instance over the shared service facade.
    ///
    /// # Errors
    /// Returns an error if the bot token is invalid or the Serenity client
    /// fails to initialize.
    #[instrument(skip(config, service), fields(channel = ?config.channel_id))]
    pub async fn new(config: &BotConfig, service: Arc<SkinService>) -> Result<Self, DiscordError> {
        info!("Initializing skinss Discord bot");

        let channel_id = config.channel_id.map(ChannelId::new);
        let handler = SkinssHandler::new(service, channel_id);
        let intents = SkinssHandler::intents();

        let client = Client::builder(&config.token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                    "Failed to build client: {}",
                    e
                )))
            })?;

        Ok(Self { client })
    }

    /// Start the bot. Blocks until the bot is shut down.
    ///
    /// # Errors
    /// Returns an error if the client fails to start or encounters a fatal
    /// gateway error.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<(), DiscordError> {
        info!("Starting skinss Discord bot");

        self.client.start().await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                "Client error: {}",
                e
            )))
        })?;

        Ok(())
    }
}
