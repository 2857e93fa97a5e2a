use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A video entry. The video itself lives on an external platform; we store
/// the redirect URL (globally unique across videos) and the thumbnail asset.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Video {
    pub id: Uuid,
    pub title: String,
    pub search_title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub thumbnail: String,
    pub thumbnail_asset_id: Option<String>,
    pub platform: String,
    pub redirect_url: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Video {
    pub fn asset_id(&self) -> Option<&str> {
        self.thumbnail_asset_id.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVideoRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "super::default_category")]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub thumbnail: String,
    #[serde(default)]
    pub thumbnail_asset_id: Option<String>,
    pub platform: String,
    pub redirect_url: String,
}

/// Partial update; the allow-list is the field set below.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateVideoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub thumbnail: Option<String>,
    pub thumbnail_asset_id: Option<String>,
    pub platform: Option<String>,
    pub redirect_url: Option<String>,
    pub active: Option<bool>,
}

impl UpdateVideoRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.thumbnail.is_none()
            && self.thumbnail_asset_id.is_none()
            && self.platform.is_none()
            && self.redirect_url.is_none()
            && self.active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_requires_platform_and_redirect_url() {
        let raw = r#"{"title": "T", "thumbnail": "https://cdn/t.png", "tags": ["a"]}"#;
        let parsed: Result<CreateVideoRequest, _> = serde_json::from_str(raw);
        assert!(parsed.is_err());
    }

    #[test]
    fn update_ignores_unknown_keys() {
        let raw = r#"{"active": false, "view_count": 9000}"#;
        let update: UpdateVideoRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(update.active, Some(false));
        assert!(update.redirect_url.is_none());
    }
}
