//! Application error taxonomy and HTTP boundary mapping.
//!
//! Every failure the service can surface is an [`AppError`] variant. The
//! variant decides the HTTP status; the message and structured details end up
//! in the JSON error body, except for server-side failures, which are logged
//! and replaced with a generic body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// JSON error body: `{"error": {"code": ..., "message": ..., "details": ...}}`.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    /// Malformed input (bad URL, bad code syntax) - 400.
    Validation { message: String, details: Value },
    /// Unknown code on lookup, redirect, or delete - 404.
    NotFound { message: String, details: Value },
    /// Duplicate code on creation - 409.
    Conflict { message: String, details: Value },
    /// The generator could not find a free code within the retry budget - 500.
    AllocationExhausted { message: String, details: Value },
    /// The link store is unreachable or timed out - 500.
    Unavailable { message: String, details: Value },
    /// Any other unexpected failure - 500.
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn allocation_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::AllocationExhausted {
            message: message.into(),
            details,
        }
    }

    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::NotFound { message, .. }
            | Self::Conflict { message, .. }
            | Self::AllocationExhausted { message, .. }
            | Self::Unavailable { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            // Server-side failures: log the diagnostic, leak nothing.
            AppError::AllocationExhausted { message, details } => {
                tracing::error!(%message, %details, "code allocation exhausted");
                scrubbed()
            }
            AppError::Unavailable { message, details } => {
                tracing::error!(%message, %details, "link store unavailable");
                scrubbed()
            }
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "internal error");
                scrubbed()
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

fn scrubbed() -> (StatusCode, &'static str, String, Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "Internal server error".to_string(),
        json!({}),
    )
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                AppError::unavailable("Link store unavailable", json!({}))
            }
            _ => AppError::internal("Database error", json!({})),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(e.field_errors()).unwrap_or_else(|_| json!({})),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_message() {
        let err = AppError::conflict("Code already exists", json!({ "code": "short1" }));
        assert_eq!(err.to_string(), "Code already exists");
    }

    #[test]
    fn test_constructors_pick_variant() {
        assert!(matches!(
            AppError::bad_request("x", json!({})),
            AppError::Validation { .. }
        ));
        assert!(matches!(
            AppError::not_found("x", json!({})),
            AppError::NotFound { .. }
        ));
        assert!(matches!(
            AppError::allocation_exhausted("x", json!({})),
            AppError::AllocationExhausted { .. }
        ));
        assert!(matches!(
            AppError::unavailable("x", json!({})),
            AppError::Unavailable { .. }
        ));
    }
}
