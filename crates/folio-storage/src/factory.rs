//! Backend construction from configuration.

use std::sync::Arc;

use folio_core::{AssetBackend, Config};

use crate::http::HttpAssetStore;
use crate::local::LocalAssetStore;
use crate::traits::{AssetStore, StorageError, StorageResult};

const DEFAULT_LOCAL_ASSET_PATH: &str = "./data/assets";

/// Build the configured asset store backend.
pub async fn create_asset_store(config: &Config) -> StorageResult<Arc<dyn AssetStore>> {
    match config.asset_backend {
        AssetBackend::Http => {
            let endpoint = config.asset_api_endpoint.clone().ok_or_else(|| {
                StorageError::ConfigError(
                    "ASSET_API_ENDPOINT is required for the http asset backend".to_string(),
                )
            })?;
            let store = HttpAssetStore::new(endpoint, config.asset_api_key.clone())?;
            tracing::info!(backend = %AssetBackend::Http, "Asset store initialized");
            Ok(Arc::new(store))
        }
        AssetBackend::Local => {
            let path = config
                .local_asset_path
                .clone()
                .unwrap_or_else(|| DEFAULT_LOCAL_ASSET_PATH.to_string());
            let store = LocalAssetStore::new(path.clone()).await?;
            tracing::info!(backend = %AssetBackend::Local, path = %path, "Asset store initialized");
            Ok(Arc::new(store))
        }
    }
}
