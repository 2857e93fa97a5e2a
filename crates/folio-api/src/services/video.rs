use folio_core::models::{CreateVideoRequest, UpdateVideoRequest, Video};
use folio_core::{record_registry, validation, AppError, ContentKind};
use folio_db::{ContentQuery, ListParams, Page, VideoRepository};
use uuid::Uuid;

use crate::services::AssetLifecycleCoordinator;

/// Orchestrates the video record lifecycle.
#[derive(Clone)]
pub struct VideoService {
    repository: VideoRepository,
    lifecycle: AssetLifecycleCoordinator,
}

impl VideoService {
    pub fn new(repository: VideoRepository, lifecycle: AssetLifecycleCoordinator) -> Self {
        Self {
            repository,
            lifecycle,
        }
    }

    fn parse_id(id: &str) -> Result<Uuid, AppError> {
        Uuid::parse_str(id).map_err(|_| AppError::InvalidInput("Invalid video ID".to_string()))
    }

    pub async fn list(&self, params: &ListParams) -> Result<Page<Video>, AppError> {
        let query = ContentQuery::from_params(params);
        self.repository.list(&query).await
    }

    pub async fn get(&self, id: &str) -> Result<Video, AppError> {
        let id = Self::parse_id(id)?;
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video not found".to_string()))
    }

    pub async fn create(&self, request: CreateVideoRequest) -> Result<Video, AppError> {
        validation::require_non_empty("title", &request.title).map_err(AppError::InvalidInput)?;
        validation::require_non_empty("thumbnail", &request.thumbnail)
            .map_err(AppError::InvalidInput)?;
        validation::require_non_empty("platform", &request.platform)
            .map_err(AppError::InvalidInput)?;
        validation::require_non_empty("redirect_url", &request.redirect_url)
            .map_err(AppError::InvalidInput)?;
        validation::require_non_empty("category", &request.category)
            .map_err(AppError::InvalidInput)?;
        validation::require_tags(&request.tags).map_err(AppError::InvalidInput)?;

        // Uniqueness pre-check; the unique index still backstops races and
        // surfaces as Conflict through the error mapping.
        if self
            .repository
            .redirect_url_exists(request.redirect_url.trim())
            .await?
        {
            return Err(AppError::Conflict(
                "A video with this redirect URL already exists".to_string(),
            ));
        }

        let descriptor = record_registry().descriptor(ContentKind::Video);
        let search_title = descriptor
            .recompute("search_title", request.title.trim())
            .unwrap_or_default();

        self.repository.create(&request, &search_title).await
    }

    pub async fn update(&self, id: &str, request: UpdateVideoRequest) -> Result<Video, AppError> {
        let id = Self::parse_id(id)?;

        if let Some(ref title) = request.title {
            validation::require_non_empty("title", title).map_err(AppError::InvalidInput)?;
        }
        if let Some(ref tags) = request.tags {
            validation::require_tags(tags).map_err(AppError::InvalidInput)?;
        }

        let existing = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

        let descriptor = record_registry().descriptor(ContentKind::Video);
        let search_title = request
            .title
            .as_deref()
            .and_then(|t| descriptor.recompute("search_title", t.trim()));

        let updated = self
            .repository
            .update(id, &request, search_title.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

        self.lifecycle.reconcile(
            ContentKind::Video,
            id,
            existing.asset_id(),
            updated.asset_id(),
        );

        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<Video, AppError> {
        let id = Self::parse_id(id)?;

        let deleted = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

        self.lifecycle
            .reconcile(ContentKind::Video, id, deleted.asset_id(), None);

        Ok(deleted)
    }
}
