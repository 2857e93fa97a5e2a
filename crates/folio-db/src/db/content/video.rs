use chrono::Utc;
use folio_core::models::{CreateVideoRequest, UpdateVideoRequest, Video};
use folio_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use crate::page::Page;
use crate::query::{BindValue, ContentQuery, PredicateBuilder, SqlPredicate};

/// Videos have no body column; otherwise the text field set matches blogs.
const TEXT_FIELDS: &[&str] = &[
    "title",
    "description",
    "category",
    "array_to_string(tags, ' ')",
];

/// Repository for video entries.
#[derive(Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn predicate(query: &ContentQuery) -> SqlPredicate {
        let mut b = PredicateBuilder::new();
        b.eq_bool("active", query.flag);
        b.eq_text("category", query.category.as_deref());
        b.eq_text("platform", query.platform.as_deref());
        b.contains_any(TEXT_FIELDS, query.like_pattern().as_deref());
        b.build()
    }

    /// Uniqueness pre-check for the redirect URL. The unique index remains
    /// the authority; a concurrent insert still surfaces as Conflict.
    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "select"))]
    pub async fn redirect_url_exists(&self, redirect_url: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<Postgres, bool>(
            "SELECT EXISTS(SELECT 1 FROM videos WHERE redirect_url = $1)",
        )
        .bind(redirect_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    #[tracing::instrument(skip(self, request), fields(db.table = "videos", db.operation = "insert"))]
    pub async fn create(
        &self,
        request: &CreateVideoRequest,
        search_title: &str,
    ) -> Result<Video, AppError> {
        let now = Utc::now();
        let video = sqlx::query_as::<Postgres, Video>(
            r#"
            INSERT INTO videos (
                id, title, search_title, description, category, tags,
                thumbnail, thumbnail_asset_id, platform, redirect_url, active,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, true, $11, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.title.trim())
        .bind(search_title)
        .bind(&request.description)
        .bind(request.category.trim())
        .bind(&request.tags)
        .bind(request.thumbnail.trim())
        .bind(&request.thumbnail_asset_id)
        .bind(request.platform.trim())
        .bind(request.redirect_url.trim())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(video)
    }

    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        let video = sqlx::query_as::<Postgres, Video>("SELECT * FROM videos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(video)
    }

    /// Paginated listing; page fetch and count share one rendered predicate.
    #[tracing::instrument(skip(self, query), fields(db.table = "videos", db.operation = "select"))]
    pub async fn list(&self, query: &ContentQuery) -> Result<Page<Video>, AppError> {
        let pred = Self::predicate(query);

        let page_sql = format!(
            "SELECT * FROM videos {} ORDER BY created_at DESC LIMIT ${} OFFSET ${}",
            pred.where_sql(),
            pred.next_param(),
            pred.next_param() + 1
        );
        let mut page_query = sqlx::query_as::<Postgres, Video>(&page_sql);
        for bind in pred.binds() {
            page_query = match bind {
                BindValue::Bool(v) => page_query.bind(*v),
                BindValue::Text(s) => page_query.bind(s.clone()),
            };
        }
        let items = page_query
            .bind(query.limit)
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await?;

        let count_sql = format!("SELECT COUNT(*) FROM videos {}", pred.where_sql());
        let mut count_query = sqlx::query_scalar::<Postgres, i64>(&count_sql);
        for bind in pred.binds() {
            count_query = match bind {
                BindValue::Bool(v) => count_query.bind(*v),
                BindValue::Text(s) => count_query.bind(s.clone()),
            };
        }
        let total = count_query.fetch_one(&self.pool).await?;

        Ok(Page::new(items, total, query.page, query.limit))
    }

    #[tracing::instrument(skip(self, request), fields(db.table = "videos", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateVideoRequest,
        search_title: Option<&str>,
    ) -> Result<Option<Video>, AppError> {
        let video = sqlx::query_as::<Postgres, Video>(
            r#"
            UPDATE videos SET
                title = COALESCE($2, title),
                search_title = COALESCE($3, search_title),
                description = COALESCE($4, description),
                category = COALESCE($5, category),
                tags = COALESCE($6, tags),
                thumbnail = COALESCE($7, thumbnail),
                thumbnail_asset_id = COALESCE($8, thumbnail_asset_id),
                platform = COALESCE($9, platform),
                redirect_url = COALESCE($10, redirect_url),
                active = COALESCE($11, active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.title)
        .bind(search_title)
        .bind(&request.description)
        .bind(&request.category)
        .bind(&request.tags)
        .bind(&request.thumbnail)
        .bind(&request.thumbnail_asset_id)
        .bind(&request.platform)
        .bind(&request.redirect_url)
        .bind(request.active)
        .fetch_optional(&self.pool)
        .await?;

        Ok(video)
    }

    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        let video =
            sqlx::query_as::<Postgres, Video>("DELETE FROM videos WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ListParams;

    #[test]
    fn video_text_filter_excludes_body_column() {
        let params = ListParams {
            query: Some("ab".to_string()),
            ..Default::default()
        };
        let query = ContentQuery::from_params(&params);
        let pred = VideoRepository::predicate(&query);
        let sql = pred.where_sql();
        assert!(sql.contains("title ILIKE $1"));
        assert!(sql.contains("description ILIKE $1"));
        assert!(sql.contains("category ILIKE $1"));
        assert!(sql.contains("array_to_string(tags, ' ') ILIKE $1"));
        assert!(!sql.contains("content"));
    }

    #[test]
    fn platform_filter_is_exact_equality() {
        let params = ListParams {
            platform: Some("youtube".to_string()),
            query: Some("ab".to_string()),
            ..Default::default()
        };
        let query = ContentQuery::from_params(&params);
        let pred = VideoRepository::predicate(&query);
        assert!(pred.where_sql().starts_with("WHERE platform = $1 AND ("));
        assert_eq!(
            pred.binds()[0],
            BindValue::Text("youtube".to_string())
        );
        assert_eq!(pred.binds()[1], BindValue::Text("%ab%".to_string()));
    }
}
