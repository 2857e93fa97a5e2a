//! Asset store abstraction.
//!
//! Records reference externally-stored media (thumbnails) by an opaque asset
//! id. This crate defines the [`AssetStore`] trait the lifecycle coordinator
//! talks to, plus two backends: a remote media API over HTTP and a local
//! filesystem directory for development.

mod factory;
mod http;
mod local;
mod traits;

pub use factory::create_asset_store;
pub use http::HttpAssetStore;
pub use local::LocalAssetStore;
pub use traits::{AssetStore, StorageError, StorageResult};

// Backend selection lives in folio-core so configuration can name it.
pub use folio_core::AssetBackend;
