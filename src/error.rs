//! Application error type and its HTTP representation.
//!
//! Every fallible operation in the service returns [`AppError`]. Each variant
//! maps to exactly one HTTP status code in [`IntoResponse`]:
//!
//! | Variant | Status |
//! |---|---|
//! | [`AppError::Validation`] | 422 Unprocessable Entity |
//! | [`AppError::NotFound`] | 404 Not Found |
//! | [`AppError::DuplicateCode`] | 409 Conflict |
//! | [`AppError::CodeSpaceExhausted`] | 503 Service Unavailable |
//! | [`AppError::Internal`] | 500 Internal Server Error |

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Name of the unique constraint protecting `urls.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "urls_short_code_key";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serialized error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input, e.g. an empty or non-absolute `long_url`.
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The short code is already taken. Retryable with a fresh code.
    #[error("{message}")]
    DuplicateCode { message: String, details: Value },

    /// The generator ran out of attempts without finding a free code.
    #[error("{message}")]
    CodeSpaceExhausted { message: String, details: Value },

    #[error("{message}")]
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
    pub fn duplicate_code(code: &str) -> Self {
        Self::DuplicateCode {
            message: format!("Short code '{}' already exists.", code),
            details: json!({ "short_code": code }),
        }
    }
    pub fn code_space_exhausted(attempts: usize) -> Self {
        Self::CodeSpaceExhausted {
            message: "Failed to generate a unique short code".to_string(),
            details: json!({ "attempts": attempts }),
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns the HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::DuplicateCode { .. } => StatusCode::CONFLICT,
            AppError::CodeSpaceExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::DuplicateCode { message, details } => ("duplicate_code", message, details),
            AppError::CodeSpaceExhausted { message, details } => {
                ("code_space_exhausted", message, details)
            }
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::DuplicateCode {
                message: "Unique constraint violation".to_string(),
                details: json!({ "constraint": db.constraint() }),
            };
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(errors.field_errors()).unwrap_or(Value::Null);
        AppError::bad_request("Request validation failed", details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Request body is not valid JSON for this endpoint",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(
            "Invalid path parameter",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::rejection::MissingJsonContentType;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("bad", json!({})).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::not_found("missing", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::duplicate_code("abc123").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::code_space_exhausted(10).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::internal("boom", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("URL with ID '7' not found.", json!({ "id": 7 }));
        assert_eq!(err.to_string(), "URL with ID '7' not found.");
    }

    #[test]
    fn test_error_info_contents() {
        let info = AppError::duplicate_code("Ab3dE9").to_error_info();
        assert_eq!(info.code, "duplicate_code");
        assert!(info.message.contains("Ab3dE9"));
        assert_eq!(info.details["short_code"], "Ab3dE9");
    }

    #[test]
    fn test_json_rejection_is_validation() {
        let rejection = MissingJsonContentType::default();
        let err = AppError::from(JsonRejection::from(rejection));

        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_error_info().code, "validation_error");
        assert!(err.to_error_info().details["reason"].is_string());
    }

    #[test]
    fn test_sqlx_row_not_found_is_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
