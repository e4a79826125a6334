//! Handler for short link redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;
use tracing::warn;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_valid_code;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Reject paths that are not syntactically short codes before any store
///    access, so this catch-all segment never shadows other routes with a
///    store lookup
/// 2. Look up the link
/// 3. Queue a click event for the background worker and respond immediately
///    with 302 Found
///
/// # Click Tracking
///
/// Every successful resolve queues exactly one increment carrying the
/// resolve-time timestamp. The redirect never waits on the telemetry write;
/// a full queue is logged and the redirect still goes out. 302 rather than
/// 301 keeps clients re-requesting, which is what makes the counter
/// meaningful.
///
/// # Errors
///
/// Returns 404 Not Found for malformed or unknown codes.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !is_valid_code(&code) {
        return Err(AppError::not_found("Not found", json!({})));
    }

    let link = state.links.get_link_by_code(&code).await?;

    let event = ClickEvent::new(link.code.clone(), Utc::now());
    if let Err(e) = state.click_tx.try_send(event) {
        warn!(code = %link.code, error = %e, "click queue full, click not recorded");
    }

    Ok((StatusCode::FOUND, [(header::LOCATION, link.target_url)]).into_response())
}
