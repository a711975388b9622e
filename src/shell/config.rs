// Runtime configuration read from the process environment.
//
// Variables
// - DB_TYPE: store backend, "memory" (default). "postgres" is recognised but has no backend yet.
// - HTTP_ADDR: socket address to listen on, "0.0.0.0:8080" by default.

use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported store backend: {0}")]
    UnsupportedBackend(String),

    #[error("invalid store backend: {0:?}")]
    InvalidBackend(String),

    #[error("invalid HTTP_ADDR {value:?}: {reason}")]
    InvalidAddress { value: String, reason: String },
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "memory" => Ok(Backend::Memory),
            "postgres" => Err(ConfigError::UnsupportedBackend("postgres".into())),
            _ => Err(ConfigError::InvalidBackend(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend: Backend,
    pub http_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("DB_TYPE") {
            Some(value) => value.parse()?,
            None => Backend::Memory,
        };
        let raw_addr = lookup("HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());
        let http_addr = raw_addr
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidAddress {
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { backend, http_addr })
    }
}
