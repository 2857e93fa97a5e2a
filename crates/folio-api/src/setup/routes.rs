//! Route registration, CORS, and request tracing.

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use folio_core::Config;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

use crate::api_doc::ApiDoc;
use crate::handlers::{blogs, contacts, videos};
use crate::state::AppState;

pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router> {
    let cors = cors_layer(config)?;

    let api = Router::new()
        .route("/blogs", get(blogs::list_blogs).post(blogs::create_blog))
        .route(
            "/blogs/{id}",
            get(blogs::get_blog)
                .put(blogs::update_blog)
                .delete(blogs::delete_blog),
        )
        .route(
            "/videos",
            get(videos::list_videos).post(videos::create_video),
        )
        .route(
            "/videos/{id}",
            get(videos::get_video)
                .put(videos::update_video)
                .delete(videos::delete_video),
        )
        .route(
            "/contacts",
            get(contacts::list_contacts).post(contacts::create_contact),
        )
        .route(
            "/contacts/{id}",
            get(contacts::get_contact)
                .patch(contacts::update_contact_status)
                .delete(contacts::delete_contact),
        );

    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/v0", api)
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(router)
}

/// Liveness probe.
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let origins = config
        .cors_origins
        .iter()
        .map(|o| o.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid CORS origin")?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}
