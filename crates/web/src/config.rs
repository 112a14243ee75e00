use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_BUSY_TIMEOUT_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// How long a write waits for a locked database before failing
    pub busy_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(port) => port.parse().context("PORT must be a number")?,
            Err(_) => 3001,
        };

        let busy_timeout_ms = match std::env::var("DB_BUSY_TIMEOUT_MS") {
            Ok(ms) => ms
                .parse()
                .context("DB_BUSY_TIMEOUT_MS must be a number of milliseconds")?,
            Err(_) => DEFAULT_BUSY_TIMEOUT_MS,
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://trainapp.db".to_string()),
            busy_timeout: Duration::from_millis(busy_timeout_ms),
        })
    }
}
