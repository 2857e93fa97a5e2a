//! Asset store trait
//!
//! This module defines the AssetStore trait that all asset backends must
//! implement.

use async_trait::async_trait;
use folio_core::AssetBackend;
use thiserror::Error;

/// Asset store operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Invalid asset id: {0}")]
    InvalidAssetId(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for asset store operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Asset store abstraction
///
/// Backends hold binary media referenced by records via an opaque asset id.
/// The record store never talks to this directly; only the lifecycle
/// coordinator does, and only to remove assets that records no longer
/// reference.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Remove an asset by its opaque id.
    ///
    /// Removal is idempotent: removing an id that does not exist succeeds.
    /// This makes at-least-once dispatch from the lifecycle coordinator safe
    /// without a deduplication token.
    async fn remove(&self, asset_id: &str) -> StorageResult<()>;

    /// Get the storage backend type
    fn backend_type(&self) -> AssetBackend;
}
