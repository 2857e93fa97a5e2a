//! Asset store setup.

use anyhow::Result;
use folio_core::Config;
use folio_storage::{create_asset_store, AssetStore};
use std::sync::Arc;

pub async fn setup_asset_store(config: &Config) -> Result<Arc<dyn AssetStore>> {
    let store = create_asset_store(config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize asset store: {}", e))?;

    Ok(store)
}
