use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use folio_core::models::{CreateVideoRequest, UpdateVideoRequest};
use folio_db::ListParams;

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

/// List videos with filtering and pagination
#[utoipa::path(
    get,
    path = "/api/v0/videos",
    tag = "videos",
    params(
        ("query" = Option<String>, Query, description = "Case-insensitive substring matched against title, description, category and tags"),
        ("category" = Option<String>, Query, description = "Exact category filter"),
        ("platform" = Option<String>, Query, description = "Exact platform filter"),
        ("active" = Option<String>, Query, description = "Filter by active flag (true/false)"),
        ("page" = Option<String>, Query, description = "Page number, default 1"),
        ("limit" = Option<String>, Query, description = "Page size, default 10, max 50")
    ),
    responses(
        (status = 200, description = "One page of videos with totals"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, HttpAppError> {
    let page = state.content.videos.list(&params).await?;
    Ok(Json(page))
}

/// Fetch a single video
#[utoipa::path(
    get,
    path = "/api/v0/videos/{id}",
    tag = "videos",
    params(("id" = String, Path, description = "Video ID")),
    responses(
        (status = 200, description = "Video fetched"),
        (status = 400, description = "Invalid video ID", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let video = state.content.videos.get(&id).await?;
    Ok(Json(video))
}

/// Create a video entry
#[utoipa::path(
    post,
    path = "/api/v0/videos",
    tag = "videos",
    request_body = CreateVideoRequest,
    responses(
        (status = 201, description = "Video created"),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 409, description = "A video with this redirect URL already exists", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_video(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateVideoRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let video = state.content.videos.create(request).await?;
    Ok((StatusCode::CREATED, Json(video)))
}

/// Update a video (allow-listed partial merge)
#[utoipa::path(
    put,
    path = "/api/v0/videos/{id}",
    tag = "videos",
    params(("id" = String, Path, description = "Video ID")),
    request_body = UpdateVideoRequest,
    responses(
        (status = 200, description = "Video updated"),
        (status = 400, description = "Invalid video ID or fields", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 409, description = "Redirect URL already in use", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn update_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateVideoRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let video = state.content.videos.update(&id, request).await?;
    Ok(Json(video))
}

/// Delete a video and its attached thumbnail asset
#[utoipa::path(
    delete,
    path = "/api/v0/videos/{id}",
    tag = "videos",
    params(("id" = String, Path, description = "Video ID")),
    responses(
        (status = 200, description = "Video deleted; returns the removed record"),
        (status = 400, description = "Invalid video ID", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let video = state.content.videos.delete(&id).await?;
    Ok(Json(video))
}
