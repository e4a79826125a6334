//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, DeleteResponse, LinkSummary};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com", "code": "promo1" }
/// ```
///
/// `code` is optional; without it a unique code is allocated automatically.
///
/// # Errors
///
/// Returns 400 for a missing or invalid URL, or an invalid code.
/// Returns 409 when the requested code is already taken.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkSummary>), AppError> {
    payload.validate()?;

    let url = payload
        .url
        .ok_or_else(|| AppError::bad_request("URL is required", json!({})))?;

    let link = state.links.create_link(&url, payload.code).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists all links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkSummary>>, AppError> {
    let links = state.links.list_links().await?;

    Ok(Json(links.into_iter().map(LinkSummary::from).collect()))
}

/// Returns a single link with its click telemetry.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 if the code is unknown.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkSummary>, AppError> {
    let link = state.links.get_link_by_code(&code).await?;

    Ok(Json(link.into()))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Errors
///
/// Returns 404 if the code is unknown; deleting is never reported as a
/// success for a code that did not exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.links.delete_link(&code).await?;

    Ok(Json(DeleteResponse { ok: true }))
}
