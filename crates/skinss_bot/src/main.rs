use anyhow::Result;
use skinss_bot::{BotConfig, SkinssBot};
use skinss_service::SkinService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = BotConfig::from_env()?;

    info!(
        data_dir = %config.data_dir.display(),
        channel = ?config.channel_id,
        "Starting skinss Discord bot"
    );

    let service = Arc::new(SkinService::open(&config.data_dir)?);

    let mut bot = SkinssBot::new(&config, service).await?;
    bot.start().await?;
    Ok(())
}
