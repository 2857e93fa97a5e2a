//! Startup configuration validation.

use anyhow::{bail, Result};
use folio_core::{AssetBackend, Config};

/// Fail fast on configurations the service cannot run with.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server_port == 0 {
        bail!("SERVER_PORT must be non-zero");
    }

    if config.database_url.trim().is_empty() {
        bail!("DATABASE_URL must not be empty");
    }

    if config.asset_backend == AssetBackend::Http && config.asset_api_endpoint.is_none() {
        bail!("ASSET_API_ENDPOINT is required when ASSET_BACKEND=http");
    }

    // SMTP is optional, but a half-configured block is almost certainly a mistake.
    if config.smtp_host.is_some() != config.smtp_from.is_some() {
        tracing::warn!(
            "SMTP configuration incomplete (need both SMTP_HOST and SMTP_FROM); contact emails stay disabled"
        );
    }

    Ok(())
}
