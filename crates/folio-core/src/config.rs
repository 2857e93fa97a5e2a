//! Configuration module
//!
//! This module provides the configuration structure for the API service,
//! including database, asset store, CORS, and email settings. Values are
//! read from the environment with sensible defaults for local development.

use std::env;
use std::str::FromStr;

use crate::storage_types::AssetBackend;

// Common constants
const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_DB_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    // Database configuration
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    // Asset store configuration
    pub asset_backend: AssetBackend,
    pub asset_api_endpoint: Option<String>,
    pub asset_api_key: Option<String>,
    pub local_asset_path: Option<String>,
    // Email / contact notifications
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_from: Option<String>,
}

impl Config {
    /// Load configuration from the environment (and a `.env` file if present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        // Load .env if present; ignore errors (production sets real env vars)
        let _ = dotenvy::dotenv();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let asset_backend = env_or("ASSET_BACKEND", AssetBackend::Local);

        Ok(Config {
            server_port: env_or("SERVER_PORT", DEFAULT_SERVER_PORT),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            cors_origins: env_list("CORS_ORIGINS", &["http://localhost:3000"]),
            database_url,
            db_max_connections: env_or("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            db_timeout_seconds: env_or("DB_TIMEOUT_SECONDS", DEFAULT_DB_TIMEOUT_SECS),
            asset_backend,
            asset_api_endpoint: env_opt("ASSET_API_ENDPOINT"),
            asset_api_key: env_opt("ASSET_API_KEY"),
            local_asset_path: env_opt("LOCAL_ASSET_PATH"),
            smtp_host: env_opt("SMTP_HOST"),
            smtp_port: env_or("SMTP_PORT", 587),
            smtp_user: env_opt("SMTP_USER"),
            smtp_password: env_opt("SMTP_PASSWORD"),
            smtp_from: env_opt("SMTP_FROM"),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Whether contact acknowledgement emails are configured.
    pub fn email_enabled(&self) -> bool {
        self.smtp_host.is_some() && self.smtp_from.is_some()
    }
}

/// Read an env var and parse it, falling back to `default` when unset or malformed.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

/// Read a non-empty env var.
fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Read a comma-separated env var into a list, falling back to `defaults`.
fn env_list(key: &str, defaults: &[&str]) -> Vec<String> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => v
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => defaults.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_falls_back_on_unset_and_malformed() {
        env::remove_var("FOLIO_TEST_UNSET");
        assert_eq!(env_or("FOLIO_TEST_UNSET", 7u16), 7);

        env::set_var("FOLIO_TEST_MALFORMED", "not-a-number");
        assert_eq!(env_or("FOLIO_TEST_MALFORMED", 7u16), 7);
        env::remove_var("FOLIO_TEST_MALFORMED");
    }

    #[test]
    fn env_list_splits_and_trims() {
        env::set_var("FOLIO_TEST_LIST", "https://a.example, https://b.example ,");
        let list = env_list("FOLIO_TEST_LIST", &["x"]);
        assert_eq!(list, vec!["https://a.example", "https://b.example"]);
        env::remove_var("FOLIO_TEST_LIST");

        let defaults = env_list("FOLIO_TEST_LIST", &["http://localhost:3000"]);
        assert_eq!(defaults, vec!["http://localhost:3000"]);
    }
}
