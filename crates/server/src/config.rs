//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DATABASE_URL` - Postgres connection string
//!
//! ## Optional
//! - `CAKERY_HOST` - Bind address (default: 127.0.0.1)
//! - `CAKERY_PORT` - Listen port (default: 8080)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Postgres database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url: SecretString = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_owned()))?
            .into();

        let host = match std::env::var("CAKERY_HOST") {
            Ok(raw) => raw.parse().map_err(|e| {
                ConfigError::InvalidEnvVar("CAKERY_HOST".to_owned(), format!("{e}"))
            })?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match std::env::var("CAKERY_PORT") {
            Ok(raw) => raw.parse().map_err(|e| {
                ConfigError::InvalidEnvVar("CAKERY_PORT".to_owned(), format!("{e}"))
            })?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Socket address to bind the listener to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
