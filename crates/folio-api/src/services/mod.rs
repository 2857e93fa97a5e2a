//! Content orchestration services.
//!
//! Handlers stay thin; the services own validation, allow-listed merging,
//! derived-field recompute, conflict checks, and asset-lifecycle dispatch.

pub mod asset_lifecycle;
mod blog;
mod contact;
mod video;

pub use asset_lifecycle::AssetLifecycleCoordinator;
pub use blog::BlogService;
pub use contact::ContactService;
pub use video::VideoService;
