use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use folio_core::models::{CreateBlogRequest, UpdateBlogRequest};
use folio_db::ListParams;

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

/// List blog posts with filtering and pagination
#[utoipa::path(
    get,
    path = "/api/v0/blogs",
    tag = "blogs",
    params(
        ("query" = Option<String>, Query, description = "Case-insensitive substring matched against title, description, content, category and tags"),
        ("category" = Option<String>, Query, description = "Exact category filter"),
        ("published" = Option<String>, Query, description = "Filter by publication flag (true/false)"),
        ("page" = Option<String>, Query, description = "Page number, default 1"),
        ("limit" = Option<String>, Query, description = "Page size, default 10, max 50")
    ),
    responses(
        (status = 200, description = "One page of blog posts with totals"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_blogs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, HttpAppError> {
    let page = state.content.blogs.list(&params).await?;
    Ok(Json(page))
}

/// Fetch a single blog post
#[utoipa::path(
    get,
    path = "/api/v0/blogs/{id}",
    tag = "blogs",
    params(("id" = String, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Blog fetched"),
        (status = 400, description = "Invalid blog ID", body = ErrorResponse),
        (status = 404, description = "Blog not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let blog = state.content.blogs.get(&id).await?;
    Ok(Json(blog))
}

/// Create a blog post
#[utoipa::path(
    post,
    path = "/api/v0/blogs",
    tag = "blogs",
    request_body = CreateBlogRequest,
    responses(
        (status = 201, description = "Blog created"),
        (status = 400, description = "Missing required fields", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_blog(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateBlogRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let blog = state.content.blogs.create(request).await?;
    Ok((StatusCode::CREATED, Json(blog)))
}

/// Update a blog post (allow-listed partial merge)
#[utoipa::path(
    put,
    path = "/api/v0/blogs/{id}",
    tag = "blogs",
    params(("id" = String, Path, description = "Blog ID")),
    request_body = UpdateBlogRequest,
    responses(
        (status = 200, description = "Blog updated"),
        (status = 400, description = "Invalid blog ID or fields", body = ErrorResponse),
        (status = 404, description = "Blog not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn update_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateBlogRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let blog = state.content.blogs.update(&id, request).await?;
    Ok(Json(blog))
}

/// Delete a blog post and its attached thumbnail asset
#[utoipa::path(
    delete,
    path = "/api/v0/blogs/{id}",
    tag = "blogs",
    params(("id" = String, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Blog deleted; returns the removed record"),
        (status = 400, description = "Invalid blog ID", body = ErrorResponse),
        (status = 404, description = "Blog not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let blog = state.content.blogs.delete(&id).await?;
    Ok(Json(blog))
}
