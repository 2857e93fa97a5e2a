//! Application state and sub-state extractors.
//!
//! AppState is split into domain sub-states so handlers can extract only what
//! they need via Axum's `FromRef`, and to avoid a single god object with
//! duplicate repositories.

use folio_core::Config;
use folio_db::{BlogRepository, ContactRepository, VideoRepository};
use folio_worker::TaskDispatcher;
use sqlx::PgPool;

use crate::services::{BlogService, ContactService, VideoService};

// ----- Sub-state types -----

/// Database pool and repositories.
#[derive(Clone)]
#[allow(dead_code)] // Used via FromRef and in setup::services; not all fields referenced in every build
pub struct DbState {
    pub pool: PgPool,
    pub blog_repository: BlogRepository,
    pub video_repository: VideoRepository,
    pub contact_repository: ContactRepository,
}

/// Content services: orchestration over repositories, asset lifecycle, and
/// notifications.
#[derive(Clone)]
pub struct ContentState {
    pub blogs: BlogService,
    pub videos: VideoService,
    pub contacts: ContactService,
}

// ----- AppState -----

/// Main application state: aggregates sub-states for dependency injection.
#[derive(Clone)]
#[allow(dead_code)] // Config and production flag are wired for handlers that gate on them
pub struct AppState {
    pub db: DbState,
    pub content: ContentState,
    pub dispatcher: TaskDispatcher,
    pub config: Config,
    pub is_production: bool,
}

// ----- FromRef for sub-state extraction -----

impl axum::extract::FromRef<std::sync::Arc<AppState>> for DbState {
    fn from_ref(state: &std::sync::Arc<AppState>) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<std::sync::Arc<AppState>> for ContentState {
    fn from_ref(state: &std::sync::Arc<AppState>) -> Self {
        state.content.clone()
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
