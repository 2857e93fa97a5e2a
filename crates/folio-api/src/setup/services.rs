//! Service and repository wiring.

use anyhow::{Context, Result};
use folio_core::Config;
use folio_db::{BlogRepository, ContactRepository, VideoRepository};
use folio_storage::AssetStore;
use folio_worker::TaskDispatcher;
use sqlx::PgPool;
use std::sync::Arc;

use crate::notify::{NoopNotifier, Notifier, SmtpNotifier};
use crate::services::{AssetLifecycleCoordinator, BlogService, ContactService, VideoService};
use crate::state::{AppState, ContentState, DbState};

pub fn initialize_services(
    config: &Config,
    pool: PgPool,
    store: Arc<dyn AssetStore>,
) -> Result<Arc<AppState>> {
    // Record types are registered exactly once; repeated calls are no-ops.
    let registry = folio_core::record_registry();
    tracing::info!(
        record_types = registry.iter().count(),
        "Record type registry ready"
    );

    let dispatcher = TaskDispatcher::new();
    let lifecycle = AssetLifecycleCoordinator::new(store, dispatcher.clone());

    let blog_repository = BlogRepository::new(pool.clone());
    let video_repository = VideoRepository::new(pool.clone());
    let contact_repository = ContactRepository::new(pool.clone());

    let notifier: Arc<dyn Notifier> = match (&config.smtp_host, &config.smtp_from) {
        (Some(host), Some(from)) => {
            let smtp = SmtpNotifier::new(
                host,
                config.smtp_port,
                config.smtp_user.clone(),
                config.smtp_password.clone(),
                from.clone(),
            )
            .context("Failed to initialize SMTP notifier")?;
            tracing::info!(host = %host, "Contact acknowledgement emails enabled");
            Arc::new(smtp)
        }
        _ => {
            tracing::info!("SMTP not configured; contact acknowledgement emails disabled");
            Arc::new(NoopNotifier)
        }
    };

    let state = AppState {
        db: DbState {
            pool,
            blog_repository: blog_repository.clone(),
            video_repository: video_repository.clone(),
            contact_repository: contact_repository.clone(),
        },
        content: ContentState {
            blogs: BlogService::new(blog_repository, lifecycle.clone()),
            videos: VideoService::new(video_repository, lifecycle),
            contacts: ContactService::new(contact_repository, notifier, dispatcher.clone()),
        },
        dispatcher,
        config: config.clone(),
        is_production: config.is_production(),
    };

    Ok(Arc::new(state))
}
