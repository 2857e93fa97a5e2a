use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Resolution state of a contact inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Pending,
    Resolved,
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactStatus::Pending => f.write_str("pending"),
            ContactStatus::Resolved => f.write_str("resolved"),
        }
    }
}

/// A contact inquiry. Contacts carry no external asset and are independent
/// of the asset lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Contact {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateContactRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateContactStatusRequest {
    pub status: ContactStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ContactStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&ContactStatus::Resolved).unwrap(),
            "\"resolved\""
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let parsed: Result<UpdateContactStatusRequest, _> =
            serde_json::from_str(r#"{"status": "closed"}"#);
        assert!(parsed.is_err());
    }
}
