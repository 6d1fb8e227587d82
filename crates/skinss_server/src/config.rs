//! Configuration for the HTTP server.

use skinss_error::ConfigError;
use std::path::PathBuf;

/// Configuration for the skinss HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerConfig {
    /// Directory holding blobs and profile sidecars
    pub data_dir: PathBuf,
    /// Port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Create a new server configuration.
    pub fn new(data_dir: impl Into<PathBuf>, port: u16) -> Self {
        Self {
            data_dir: data_dir.into(),
            port,
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `SKINSS_DATA_DIR` (default: "./data")
    /// - `SKINSS_PORT`, falling back to `PORT` (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = std::env::var("SKINSS_DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        let port = match std::env::var("SKINSS_PORT").or_else(|_| std::env::var("PORT")) {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                ConfigError::new(format!("port value {:?} is not a number", raw))
            })?,
            Err(_) => 8080,
        };

        Ok(Self::new(data_dir, port))
    }
}
