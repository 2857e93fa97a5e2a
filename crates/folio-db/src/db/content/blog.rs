use chrono::Utc;
use folio_core::models::{Blog, CreateBlogRequest, UpdateBlogRequest};
use folio_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use crate::page::Page;
use crate::query::{BindValue, ContentQuery, PredicateBuilder, SqlPredicate};

/// Column expressions searched by the free-text filter. Tags are flattened
/// to a single string so a substring can match any tag.
const TEXT_FIELDS: &[&str] = &[
    "title",
    "description",
    "content",
    "category",
    "array_to_string(tags, ' ')",
];

/// Repository for blog posts.
#[derive(Clone)]
pub struct BlogRepository {
    pool: PgPool,
}

impl BlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Render the listing predicate. Shared by the page fetch and the count
    /// so both reads always see identical criteria.
    fn predicate(query: &ContentQuery) -> SqlPredicate {
        let mut b = PredicateBuilder::new();
        b.eq_bool("published", query.flag);
        b.eq_text("category", query.category.as_deref());
        b.contains_any(TEXT_FIELDS, query.like_pattern().as_deref());
        b.build()
    }

    #[tracing::instrument(skip(self, request), fields(db.table = "blogs", db.operation = "insert"))]
    pub async fn create(
        &self,
        request: &CreateBlogRequest,
        search_title: &str,
    ) -> Result<Blog, AppError> {
        let now = Utc::now();
        let blog = sqlx::query_as::<Postgres, Blog>(
            r#"
            INSERT INTO blogs (
                id, title, search_title, content, description, category, tags,
                thumbnail, thumbnail_asset_id, published, duration,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, true, $10, $11, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.title.trim())
        .bind(search_title)
        .bind(&request.content)
        .bind(&request.description)
        .bind(request.category.trim())
        .bind(&request.tags)
        .bind(request.thumbnail.trim())
        .bind(&request.thumbnail_asset_id)
        .bind(request.duration)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(blog)
    }

    #[tracing::instrument(skip(self), fields(db.table = "blogs", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<Blog>, AppError> {
        let blog = sqlx::query_as::<Postgres, Blog>("SELECT * FROM blogs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(blog)
    }

    /// Paginated listing: one bounded fetch plus an unbounded count under the
    /// same predicate. No snapshot isolation between the two reads.
    #[tracing::instrument(skip(self, query), fields(db.table = "blogs", db.operation = "select"))]
    pub async fn list(&self, query: &ContentQuery) -> Result<Page<Blog>, AppError> {
        let pred = Self::predicate(query);

        let page_sql = format!(
            "SELECT * FROM blogs {} ORDER BY created_at DESC LIMIT ${} OFFSET ${}",
            pred.where_sql(),
            pred.next_param(),
            pred.next_param() + 1
        );
        let mut page_query = sqlx::query_as::<Postgres, Blog>(&page_sql);
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

        let count_sql = format!("SELECT COUNT(*) FROM blogs {}", pred.where_sql());
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

    /// Partial update: absent fields keep their stored value. `search_title`
    /// travels with `title` so the derived key never diverges.
    #[tracing::instrument(skip(self, request), fields(db.table = "blogs", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateBlogRequest,
        search_title: Option<&str>,
    ) -> Result<Option<Blog>, AppError> {
        let blog = sqlx::query_as::<Postgres, Blog>(
            r#"
            UPDATE blogs SET
                title = COALESCE($2, title),
                search_title = COALESCE($3, search_title),
                content = COALESCE($4, content),
                description = COALESCE($5, description),
                category = COALESCE($6, category),
                tags = COALESCE($7, tags),
                thumbnail = COALESCE($8, thumbnail),
                thumbnail_asset_id = COALESCE($9, thumbnail_asset_id),
                published = COALESCE($10, published),
                duration = COALESCE($11, duration),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.title)
        .bind(search_title)
        .bind(&request.content)
        .bind(&request.description)
        .bind(&request.category)
        .bind(&request.tags)
        .bind(&request.thumbnail)
        .bind(&request.thumbnail_asset_id)
        .bind(request.published)
        .bind(request.duration)
        .fetch_optional(&self.pool)
        .await?;

        Ok(blog)
    }

    /// Delete and return the removed record snapshot.
    #[tracing::instrument(skip(self), fields(db.table = "blogs", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<Option<Blog>, AppError> {
        let blog = sqlx::query_as::<Postgres, Blog>("DELETE FROM blogs WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(blog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ListParams;

    #[test]
    fn predicate_covers_all_blog_text_fields() {
        let params = ListParams {
            query: Some("at".to_string()),
            ..Default::default()
        };
        let query = ContentQuery::from_params(&params);
        let pred = BlogRepository::predicate(&query);

        let sql = pred.where_sql();
        for field in ["title", "description", "content", "category"] {
            assert!(sql.contains(&format!("{} ILIKE $1", field)), "missing {}", field);
        }
        assert!(sql.contains("array_to_string(tags, ' ') ILIKE $1"));
        assert_eq!(pred.binds().len(), 1);
    }

    #[test]
    fn no_filters_means_unconditional_predicate() {
        let query = ContentQuery::from_params(&ListParams::default());
        let pred = BlogRepository::predicate(&query);
        assert_eq!(pred.where_sql(), "");
    }

    #[test]
    fn published_and_category_precede_text_filter() {
        let params = ListParams {
            published: Some("true".to_string()),
            category: Some("General".to_string()),
            query: Some("rust".to_string()),
            ..Default::default()
        };
        let query = ContentQuery::from_params(&params);
        let pred = BlogRepository::predicate(&query);
        assert!(pred.where_sql().starts_with("WHERE published = $1 AND category = $2 AND ("));
        assert_eq!(pred.next_param(), 4);
    }
}
