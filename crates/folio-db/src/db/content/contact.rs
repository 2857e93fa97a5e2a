use chrono::Utc;
use folio_core::models::{Contact, ContactStatus, CreateContactRequest};
use folio_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Repository for contact inquiries.
#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self, request), fields(db.table = "contacts", db.operation = "insert"))]
    pub async fn create(&self, request: &CreateContactRequest) -> Result<Contact, AppError> {
        let now = Utc::now();
        let contact = sqlx::query_as::<Postgres, Contact>(
            r#"
            INSERT INTO contacts (id, full_name, email, phone, message, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.full_name.trim())
        .bind(request.email.trim())
        .bind(request.phone.trim())
        .bind(&request.message)
        .bind(ContactStatus::Pending)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(contact)
    }

    #[tracing::instrument(skip(self), fields(db.table = "contacts", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<Contact>, AppError> {
        let contact = sqlx::query_as::<Postgres, Contact>("SELECT * FROM contacts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(contact)
    }

    /// All inquiries, newest first.
    #[tracing::instrument(skip(self), fields(db.table = "contacts", db.operation = "select"))]
    pub async fn list(&self) -> Result<Vec<Contact>, AppError> {
        let contacts =
            sqlx::query_as::<Postgres, Contact>("SELECT * FROM contacts ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(contacts)
    }

    #[tracing::instrument(skip(self), fields(db.table = "contacts", db.operation = "update", db.record_id = %id))]
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> Result<Option<Contact>, AppError> {
        let contact = sqlx::query_as::<Postgres, Contact>(
            "UPDATE contacts SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contact)
    }

    #[tracing::instrument(skip(self), fields(db.table = "contacts", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<Option<Contact>, AppError> {
        let contact =
            sqlx::query_as::<Postgres, Contact>("DELETE FROM contacts WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(contact)
    }
}
