use crate::traits::{AssetStore, StorageError, StorageResult};
use async_trait::async_trait;
use folio_core::AssetBackend;
use reqwest::StatusCode;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Remote media API asset store.
///
/// Assets are managed by an external media service; this backend only issues
/// deletions (`DELETE {endpoint}/assets/{id}`) with bearer authentication.
/// A 404 from the remote is treated as success so removal stays idempotent.
#[derive(Clone)]
pub struct HttpAssetStore {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpAssetStore {
    pub fn new(endpoint: String, api_key: Option<String>) -> StorageResult<Self> {
        if endpoint.trim().is_empty() {
            return Err(StorageError::ConfigError(
                "Asset API endpoint must not be empty".to_string(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StorageError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(HttpAssetStore {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn asset_url(&self, asset_id: &str) -> StorageResult<String> {
        if asset_id.is_empty() || asset_id.contains('/') || asset_id.contains("..") {
            return Err(StorageError::InvalidAssetId(format!(
                "Asset id '{}' contains invalid characters",
                asset_id
            )));
        }
        Ok(format!("{}/assets/{}", self.endpoint, asset_id))
    }
}

#[async_trait]
impl AssetStore for HttpAssetStore {
    async fn remove(&self, asset_id: &str) -> StorageResult<()> {
        let url = self.asset_url(asset_id)?;

        let mut request = self.client.delete(&url);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StorageError::BackendError(format!("Delete request failed: {}", e)))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            // Unknown id: already gone, removal is idempotent
            StatusCode::NOT_FOUND => Ok(()),
            status => Err(StorageError::DeleteFailed(format!(
                "Remote returned {} for asset {}",
                status, asset_id
            ))),
        }
    }

    fn backend_type(&self) -> AssetBackend {
        AssetBackend::Http
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_trailing_slash_is_normalized() {
        let store = HttpAssetStore::new("https://media.example/api/".to_string(), None).unwrap();
        assert_eq!(
            store.asset_url("abc123").unwrap(),
            "https://media.example/api/assets/abc123"
        );
    }

    #[test]
    fn asset_ids_with_path_characters_are_rejected() {
        let store = HttpAssetStore::new("https://media.example".to_string(), None).unwrap();
        assert!(store.asset_url("").is_err());
        assert!(store.asset_url("a/b").is_err());
        assert!(store.asset_url("..").is_err());
    }

    #[test]
    fn empty_endpoint_is_a_config_error() {
        assert!(HttpAssetStore::new("  ".to_string(), None).is_err());
    }
}
