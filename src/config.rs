// src/config.rs
use std::{net::SocketAddr, time::Duration};

use thiserror::Error;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_BACKEND_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("LISTEN_ADDR is not a socket address: {0}")]
    ListenAddr(String),

    #[error("BACKEND_BASE_URL must start with http:// or https://, got {0:?}")]
    BackendUrl(String),

    #[error("BACKEND_TIMEOUT_SECS must be a positive integer, got {0:?}")]
    Timeout(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub backend_base_url: String,
    pub backend_timeout: Duration,
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_raw = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::ListenAddr(listen_raw.clone()))?;

        let backend_base_url = lookup("BACKEND_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BACKEND_BASE_URL.to_string())
            .trim()
            .to_string();
        if !(backend_base_url.starts_with("http://") || backend_base_url.starts_with("https://")) {
            return Err(ConfigError::BackendUrl(backend_base_url));
        }

        let backend_timeout = match lookup("BACKEND_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::Timeout(raw)),
            },
        };

        Ok(Self { listen_addr, backend_base_url, backend_timeout })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            backend_base_url: DEFAULT_BACKEND_BASE_URL.to_string(),
            backend_timeout: Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS),
        }
    }
}
