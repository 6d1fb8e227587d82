use anyhow::Result;
use clap::Parser;
use skinss_server::{ApiState, ServerConfig, create_router};
use skinss_service::SkinService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Skinss asset server", long_about = None)]
struct Args {
    /// Directory to store blobs and profile sidecars (overrides SKINSS_DATA_DIR)
    #[arg(short, long)]
    data_dir: Option<String>,

    /// Port to listen on (overrides SKINSS_PORT / PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir.into();
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    info!(
        data_dir = %config.data_dir.display(),
        port = config.port,
        "Starting skinss HTTP server"
    );

    let service = Arc::new(SkinService::open(&config.data_dir)?);
    let router = create_router(ApiState::new(service));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Skinss HTTP running on port {}", config.port);

    axum::serve(listener, router).await?;
    Ok(())
}
