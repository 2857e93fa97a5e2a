use crate::traits::{AssetStore, StorageError, StorageResult};
use async_trait::async_trait;
use folio_core::AssetBackend;
use std::path::PathBuf;
use tokio::fs;

/// Local filesystem asset store
///
/// Assets live as flat files under a base directory, named by their asset id.
/// Used for development and tests; removal of a missing file succeeds so the
/// backend stays idempotent like the remote one.
#[derive(Clone)]
pub struct LocalAssetStore {
    base_path: PathBuf,
}

impl LocalAssetStore {
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create asset directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalAssetStore { base_path })
    }

    /// Convert an asset id to a filesystem path, rejecting ids that could
    /// escape the base directory.
    fn id_to_path(&self, asset_id: &str) -> StorageResult<PathBuf> {
        if asset_id.is_empty()
            || asset_id.contains("..")
            || asset_id.contains('/')
            || asset_id.contains('\\')
        {
            return Err(StorageError::InvalidAssetId(format!(
                "Asset id '{}' contains invalid characters",
                asset_id
            )));
        }
        Ok(self.base_path.join(asset_id))
    }
}

#[async_trait]
impl AssetStore for LocalAssetStore {
    async fn remove(&self, asset_id: &str) -> StorageResult<()> {
        let path = self.id_to_path(asset_id)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            // Unknown id: already gone, removal is idempotent
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::DeleteFailed(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn backend_type(&self) -> AssetBackend {
        AssetBackend::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn remove_deletes_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalAssetStore::new(dir.path()).await.unwrap();

        let path = dir.path().join("asset1");
        tokio::fs::write(&path, b"bytes").await.unwrap();
        assert!(path.exists());

        store.remove("asset1").await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn remove_unknown_id_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalAssetStore::new(dir.path()).await.unwrap();
        store.remove("never-existed").await.unwrap();
    }

    #[tokio::test]
    async fn traversal_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalAssetStore::new(dir.path()).await.unwrap();
        assert!(store.remove("../outside").await.is_err());
        assert!(store.remove("a/b").await.is_err());
        assert!(store.remove("").await.is_err());
    }
}
