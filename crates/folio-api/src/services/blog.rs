use folio_core::models::{Blog, CreateBlogRequest, UpdateBlogRequest};
use folio_core::{record_registry, validation, AppError, ContentKind};
use folio_db::{BlogRepository, ContentQuery, ListParams, Page};
use uuid::Uuid;

use crate::services::AssetLifecycleCoordinator;

/// Orchestrates the blog record lifecycle.
#[derive(Clone)]
pub struct BlogService {
    repository: BlogRepository,
    lifecycle: AssetLifecycleCoordinator,
}

impl BlogService {
    pub fn new(repository: BlogRepository, lifecycle: AssetLifecycleCoordinator) -> Self {
        Self {
            repository,
            lifecycle,
        }
    }

    /// Identifier well-formedness check; runs before any store access.
    fn parse_id(id: &str) -> Result<Uuid, AppError> {
        Uuid::parse_str(id).map_err(|_| AppError::InvalidInput("Invalid blog ID".to_string()))
    }

    pub async fn list(&self, params: &ListParams) -> Result<Page<Blog>, AppError> {
        let query = ContentQuery::from_params(params);
        self.repository.list(&query).await
    }

    pub async fn get(&self, id: &str) -> Result<Blog, AppError> {
        let id = Self::parse_id(id)?;
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))
    }

    pub async fn create(&self, request: CreateBlogRequest) -> Result<Blog, AppError> {
        validation::require_non_empty("title", &request.title).map_err(AppError::InvalidInput)?;
        validation::require_non_empty("content", &request.content)
            .map_err(AppError::InvalidInput)?;
        validation::require_non_empty("thumbnail", &request.thumbnail)
            .map_err(AppError::InvalidInput)?;
        validation::require_tags(&request.tags).map_err(AppError::InvalidInput)?;

        let descriptor = record_registry().descriptor(ContentKind::Blog);
        let search_title = descriptor
            .recompute("search_title", request.title.trim())
            .unwrap_or_default();

        self.repository.create(&request, &search_title).await
    }

    pub async fn update(&self, id: &str, request: UpdateBlogRequest) -> Result<Blog, AppError> {
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
            .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

        // Title change recomputes the derived search key in the same write.
        let descriptor = record_registry().descriptor(ContentKind::Blog);
        let search_title = request
            .title
            .as_deref()
            .and_then(|t| descriptor.recompute("search_title", t.trim()));

        let updated = self
            .repository
            .update(id, &request, search_title.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

        // The write is committed; cleanup of a replaced thumbnail runs in the
        // background and cannot affect this result.
        self.lifecycle
            .reconcile(ContentKind::Blog, id, existing.asset_id(), updated.asset_id());

        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<Blog, AppError> {
        let id = Self::parse_id(id)?;

        let deleted = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

        self.lifecycle
            .reconcile(ContentKind::Blog, id, deleted.asset_id(), None);

        Ok(deleted)
    }
}
