//! Serenity event handler turning attachments into facade uploads.

use crate::{DiscordError, DiscordErrorKind};
use serenity::async_trait;
use serenity::model::channel::{Attachment, Message};
use serenity::model::gateway::Ready;
use serenity::model::id::ChannelId;
use serenity::prelude::{Context, EventHandler, GatewayIntents};
use skinss_core::AssetKind;
use skinss_service::SkinService;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Event handler for the skinss ingestion bot.
pub struct SkinssHandler {
    service: Arc<SkinService>,
    http: reqwest::Client,
    channel_id: Option<ChannelId>,
}

/// Pick the target asset slot from an attachment filename.
///
/// A filename containing "cape" targets the cape slot, anything else the
/// skin slot. This is only routing; the facade's signature sniffing decides
/// whether the content is accepted.
fn kind_for_filename(filename: &str) -> AssetKind {
    if filename.to_ascii_lowercase().contains("cape") {
        AssetKind::Cape
    } else {
        AssetKind::Skin
    }
}

impl SkinssHandler {
    /// Creates a new handler over the shared service facade.
    pub fn new(service: Arc<SkinService>, channel_id: Option<ChannelId>) -> Self {
        Self {
            service,
            http: reqwest::Client::new(),
            channel_id,
        }
    }

    /// Gateway intents the handler needs.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }

    /// Download an attachment body.
    async fn download(&self, attachment: &Attachment) -> Result<Vec<u8>, DiscordError> {
        let response = self
            .http
            .get(&attachment.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::Download(format!(
                    "{}: {}",
                    attachment.filename, e
                )))
            })?;

        let bytes = response.bytes().await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::Download(format!(
                "{}: {}",
                attachment.filename, e
            )))
        })?;

        Ok(bytes.to_vec())
    }

    /// Store one attachment for `identifier` and describe the outcome.
    #[instrument(skip(self, data), fields(size = data.len(), kind = %kind))]
    async fn ingest(&self, identifier: &str, kind: AssetKind, data: &[u8]) -> String {
        match kind {
            AssetKind::Skin => match self.service.upload_skin(identifier, data, None).await {
                Ok(receipt) => format!("Skin updated ({})", receipt.skin_hash),
                Err(e) => {
                    warn!(identifier = %identifier, error = %e, "Skin upload rejected");
                    format!("Skin rejected: {}", e)
                }
            },
            AssetKind::Cape => match self.service.upload_cape(identifier, data).await {
                Ok(receipt) => format!(
                    "Cape updated ({}{})",
                    receipt.cape_hash,
                    if receipt.cape_is_gif { ", animated" } else { "" }
                ),
                Err(e) => {
                    warn!(identifier = %identifier, error = %e, "Cape upload rejected");
                    format!("Cape rejected: {}", e)
                }
            },
        }
    }
}

#[async_trait]
impl EventHandler for SkinssHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "Skinss bot connected");
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        if let Some(channel_id) = self.channel_id {
            if msg.channel_id != channel_id {
                return;
            }
        }
        if msg.attachments.is_empty() {
            return;
        }

        // The author's numeric id is the identifier, same namespace as the
        // HTTP path segment.
        let identifier = msg.author.id.get().to_string();

        for attachment in &msg.attachments {
            let kind = kind_for_filename(&attachment.filename);

            let reply = match self.download(attachment).await {
                Ok(data) => self.ingest(&identifier, kind, &data).await,
                Err(e) => {
                    warn!(error = %e, "Attachment download failed");
                    format!("Could not download {}", attachment.filename)
                }
            };

            if let Err(e) = msg.channel_id.say(&ctx.http, reply).await {
                warn!(error = %e, "Failed to send reply");
            }
        }
    }
}
