use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A blog post. `search_title` is derived (lowercase of `title`) and is
/// recomputed on every write that changes the title; it never diverges.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub search_title: String,
    pub content: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub thumbnail: String,
    /// Opaque id of the thumbnail in the external asset store, if attached.
    pub thumbnail_asset_id: Option<String>,
    pub published: bool,
    pub duration: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// The external asset currently attached to this record, if any.
    pub fn asset_id(&self) -> Option<&str> {
        self.thumbnail_asset_id.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBlogRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "super::default_category")]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub thumbnail: String,
    #[serde(default)]
    pub thumbnail_asset_id: Option<String>,
    #[serde(default)]
    pub duration: Option<i32>,
}

/// Partial update. Only the fields named here are mutable; unknown JSON keys
/// are dropped during deserialization and never reach the store.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub thumbnail: Option<String>,
    pub thumbnail_asset_id: Option<String>,
    pub published: Option<bool>,
    pub duration: Option<i32>,
}

impl UpdateBlogRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.thumbnail.is_none()
            && self.thumbnail_asset_id.is_none()
            && self.published.is_none()
            && self.duration.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_are_silently_dropped() {
        let raw = r#"{"title": "New title", "searchTitle": "hacked", "search_title": "hacked", "id": "not-allowed"}"#;
        let update: UpdateBlogRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(update.title.as_deref(), Some("New title"));
        assert!(update.content.is_none());
        // Anything outside the allow-list never reaches the merge.
        assert!(!update.is_empty());
    }

    #[test]
    fn create_defaults_category_and_description() {
        let raw = r#"{"title": "T", "content": "C", "thumbnail": "https://cdn/img.png", "tags": ["a"]}"#;
        let req: CreateBlogRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.category, "General");
        assert_eq!(req.description, "");
        assert!(req.thumbnail_asset_id.is_none());
    }

    #[test]
    fn blank_asset_id_reads_as_unattached() {
        let mut blog = sample_blog();
        blog.thumbnail_asset_id = Some(String::new());
        assert_eq!(blog.asset_id(), None);
        blog.thumbnail_asset_id = Some("abc123".to_string());
        assert_eq!(blog.asset_id(), Some("abc123"));
    }

    fn sample_blog() -> Blog {
        Blog {
            id: Uuid::new_v4(),
            title: "T".into(),
            search_title: "t".into(),
            content: "C".into(),
            description: String::new(),
            category: "General".into(),
            tags: vec!["a".into()],
            thumbnail: "https://cdn/img.png".into(),
            thumbnail_asset_id: None,
            published: true,
            duration: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
