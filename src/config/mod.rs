pub mod database;

use std::env;
use anyhow::{Context, Result};
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use sqlx::SqlitePool;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://papaleguas.db?mode=rwc";
pub const DEFAULT_SESSION_SECRET: &str = "dev-secret-key-change-in-production";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub session_secret: String,
    pub server_host: String,
    pub server_port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Every setting has a development default; a warning is logged whenever
    /// one of the insecure defaults ends up in use.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            tracing::warn!("DATABASE_URL not set, using {}", DEFAULT_DATABASE_URL);
            DEFAULT_DATABASE_URL.to_string()
        });

        let session_secret = lookup("SESSION_SECRET").unwrap_or_else(|| {
            tracing::warn!("⚠️  SESSION_SECRET not set, using the development secret");
            DEFAULT_SESSION_SECRET.to_string()
        });

        let server_port = match lookup("SERVER_PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("SERVER_PORT must be a port number, got {:?}", port))?,
            None => 5000,
        };

        Ok(Self {
            database_url,
            session_secret,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Key used to encrypt session cookies. SHA-512 stretches a secret of any
    /// length to the 64 bytes the cookie key requires.
    pub fn cookie_key(&self) -> Key {
        let digest = Sha512::digest(self.session_secret.as_bytes());
        Key::from(digest.as_slice())
    }
}

/// Process-wide context shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub database_pool: SqlitePool,
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(config: AppConfig, database_pool: SqlitePool) -> Self {
        let cookie_key = config.cookie_key();
        Self {
            config,
            database_pool,
            cookie_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.session_secret, DEFAULT_SESSION_SECRET);
        assert_eq!(config.server_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_environment_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SESSION_SECRET", "short"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8081"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.session_secret, "short");
        assert_eq!(config.server_address(), "127.0.0.1:8081");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[("SERVER_PORT", "http")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_cookie_key_is_deterministic_for_short_secrets() {
        let config = AppConfig::from_lookup(lookup_from(&[("SESSION_SECRET", "abc")])).unwrap();
        assert_eq!(config.cookie_key().master(), config.cookie_key().master());

        let other = AppConfig::from_lookup(lookup_from(&[("SESSION_SECRET", "abd")])).unwrap();
        assert_ne!(config.cookie_key().master(), other.cookie_key().master());
    }
}
