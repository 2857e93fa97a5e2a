use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use folio_core::models::{CreateContactRequest, UpdateContactStatusRequest};

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

/// Submit a contact inquiry
///
/// Triggers a best-effort acknowledgement email; a failed send never fails
/// the create.
#[utoipa::path(
    post,
    path = "/api/v0/contacts",
    tag = "contacts",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Contact saved"),
        (status = 400, description = "Missing required fields", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateContactRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let contact = state.content.contacts.create(request).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// List all contact inquiries, newest first
#[utoipa::path(
    get,
    path = "/api/v0/contacts",
    tag = "contacts",
    responses(
        (status = 200, description = "All contacts, newest first"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let contacts = state.content.contacts.list().await?;
    Ok(Json(contacts))
}

/// Fetch a single contact inquiry
#[utoipa::path(
    get,
    path = "/api/v0/contacts/{id}",
    tag = "contacts",
    params(("id" = String, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact fetched"),
        (status = 400, description = "Invalid contact ID", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let contact = state.content.contacts.get(&id).await?;
    Ok(Json(contact))
}

/// Update a contact's resolution status
#[utoipa::path(
    patch,
    path = "/api/v0/contacts/{id}",
    tag = "contacts",
    params(("id" = String, Path, description = "Contact ID")),
    request_body = UpdateContactStatusRequest,
    responses(
        (status = 200, description = "Status updated"),
        (status = 400, description = "Invalid contact ID or status", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn update_contact_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateContactStatusRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let contact = state
        .content
        .contacts
        .update_status(&id, request.status)
        .await?;
    Ok(Json(contact))
}

/// Delete a contact inquiry
#[utoipa::path(
    delete,
    path = "/api/v0/contacts/{id}",
    tag = "contacts",
    params(("id" = String, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact deleted; returns the removed record"),
        (status = 400, description = "Invalid contact ID", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let contact = state.content.contacts.delete(&id).await?;
    Ok(Json(contact))
}
