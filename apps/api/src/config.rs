use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::match_client::DEFAULT_MATCH_ENDPOINT;

/// Application configuration loaded from environment variables.
/// Every variable has a default; a `.env` file is honoured when present.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub match_endpoint_url: String,
    pub export_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            match_endpoint_url: env_or("MATCH_ENDPOINT_URL", DEFAULT_MATCH_ENDPOINT),
            export_dir: PathBuf::from(env_or("EXPORT_DIR", "exports")),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
