use std::sync::Arc;

use folio_core::models::{Contact, ContactStatus, CreateContactRequest};
use folio_core::{validation, AppError};
use folio_db::ContactRepository;
use folio_worker::TaskDispatcher;
use uuid::Uuid;

use crate::notify::Notifier;

const ACK_SUBJECT: &str = "We received your query";

/// Orchestrates contact inquiries and their acknowledgement emails.
#[derive(Clone)]
pub struct ContactService {
    repository: ContactRepository,
    notifier: Arc<dyn Notifier>,
    dispatcher: TaskDispatcher,
}

impl ContactService {
    pub fn new(
        repository: ContactRepository,
        notifier: Arc<dyn Notifier>,
        dispatcher: TaskDispatcher,
    ) -> Self {
        Self {
            repository,
            notifier,
            dispatcher,
        }
    }

    fn parse_id(id: &str) -> Result<Uuid, AppError> {
        Uuid::parse_str(id).map_err(|_| AppError::InvalidInput("Invalid contact ID".to_string()))
    }

    pub async fn create(&self, request: CreateContactRequest) -> Result<Contact, AppError> {
        validation::require_non_empty("full_name", &request.full_name)
            .map_err(AppError::InvalidInput)?;
        validation::require_non_empty("email", &request.email).map_err(AppError::InvalidInput)?;
        validation::require_non_empty("phone", &request.phone).map_err(AppError::InvalidInput)?;
        validation::require_non_empty("message", &request.message)
            .map_err(AppError::InvalidInput)?;

        let contact = self.repository.create(&request).await?;

        // Acknowledgement email is best-effort; a failed send is logged by
        // the dispatcher and never fails the create.
        let notifier = self.notifier.clone();
        let to = contact.email.clone();
        let body = ack_body(&contact.full_name, &contact.message);
        self.dispatcher.dispatch("contact-ack-email", async move {
            notifier.send(&to, ACK_SUBJECT, &body).await
        });

        Ok(contact)
    }

    pub async fn list(&self) -> Result<Vec<Contact>, AppError> {
        self.repository.list().await
    }

    pub async fn get(&self, id: &str) -> Result<Contact, AppError> {
        let id = Self::parse_id(id)?;
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))
    }

    pub async fn update_status(&self, id: &str, status: ContactStatus) -> Result<Contact, AppError> {
        let id = Self::parse_id(id)?;
        self.repository
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<Contact, AppError> {
        let id = Self::parse_id(id)?;
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))
    }
}

fn ack_body(full_name: &str, message: &str) -> String {
    format!(
        "<h2>Hello {}</h2>\
         <p>Your message has been received.</p>\
         <p><strong>Message:</strong> {}</p>",
        full_name, message
    )
}
