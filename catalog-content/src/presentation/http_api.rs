//! HTTP API for the content catalog.

use crate::application_service::cached_content_service::CachedContentService;
use crate::domain::content::{Content, ContentId};
use crate::domain::mapper::ContentInput;
use crate::port::content_store::StoreError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state shared across handlers.
pub type AppState = Arc<CachedContentService>;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/v1/content",
            get(list_contents).post(create_content),
        )
        .route(
            "/api/v1/content/{id}",
            get(get_content).patch(update_content).delete(delete_content),
        )
        .route(
            "/api/v1/content/{id}/genre",
            post(add_genres).delete(remove_genres),
        )
        .with_state(state)
}

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentFilterQuery {
    pub title: Option<String>,
    pub genre: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn not_found(id: ContentId) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Content not found: {}", id),
        }),
    )
        .into_response()
}

fn store_fault(err: StoreError) -> Response {
    tracing::error!("Store fault: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

fn found_or_404(id: ContentId, result: Result<Option<Content>, StoreError>) -> Response {
    match result {
        Ok(Some(content)) => Json(content).into_response(),
        Ok(None) => not_found(id),
        Err(e) => store_fault(e),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// List contents, optionally filtered by title and genre.
async fn list_contents(
    State(state): State<AppState>,
    Query(query): Query<ContentFilterQuery>,
) -> Response {
    tracing::info!("[GET] /api/v1/content");

    let result = if query.title.is_some() || query.genre.is_some() {
        state
            .get_filtered(query.title.as_deref(), query.genre.as_deref())
            .await
    } else {
        state.get_many().await
    };

    match result {
        Ok(contents) if contents.is_empty() => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No content found".to_string(),
            }),
        )
            .into_response(),
        Ok(contents) => Json(contents).into_response(),
        Err(e) => store_fault(e),
    }
}

/// Get a single content.
async fn get_content(State(state): State<AppState>, Path(id): Path<ContentId>) -> Response {
    tracing::info!("[GET] /api/v1/content/{}", id);
    found_or_404(id, state.get(id).await)
}

/// Create new content.
async fn create_content(
    State(state): State<AppState>,
    Json(input): Json<ContentInput>,
) -> Response {
    tracing::info!("[POST] /api/v1/content");
    match state.create(&input).await {
        Ok(content) => Json(content).into_response(),
        Err(e) => store_fault(e),
    }
}

/// Patch an existing content.
async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<ContentId>,
    Json(input): Json<ContentInput>,
) -> Response {
    tracing::info!("[PATCH] /api/v1/content/{}", id);
    found_or_404(id, state.update(id, &input).await)
}

/// Delete a content. Answers with the deleted id, or the nil id when nothing
/// was stored under `id`.
async fn delete_content(State(state): State<AppState>, Path(id): Path<ContentId>) -> Response {
    tracing::info!("[DELETE] /api/v1/content/{}", id);
    match state.delete(id).await {
        Ok(deleted) => Json(deleted).into_response(),
        Err(e) => store_fault(e),
    }
}

async fn add_genres(
    State(state): State<AppState>,
    Path(id): Path<ContentId>,
    Json(genres): Json<Vec<String>>,
) -> Response {
    tracing::info!("[POST] /api/v1/content/{}/genre", id);
    found_or_404(id, state.add_genres(id, &genres).await)
}

async fn remove_genres(
    State(state): State<AppState>,
    Path(id): Path<ContentId>,
    Json(genres): Json<Vec<String>>,
) -> Response {
    tracing::info!("[DELETE] /api/v1/content/{}/genre", id);
    found_or_404(id, state.remove_genres(id, &genres).await)
}
