use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::error::DbErr;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::config::AppConfigError;
use crate::validation::InputError;

fn current_request_id() -> Option<String> {
    crate::tracing::current_request_id().map(|rid| rid.as_str().to_string())
}

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "error": "Bad Request",
    "message": "Missing one or more input fields: city, contact_email",
    "details": null,
    "request_id": "req-abc123xyz",
    "timestamp": "2024-12-09T10:30:00.000Z"
}))]
pub struct ErrorResponse {
    /// HTTP status category (e.g., "Not Found", "Bad Request", "Internal Server Error")
    #[schema(example = "Not Found")]
    pub error: String,
    /// Human-readable error description
    #[schema(example = "Warehouse with ID 42 not found")]
    pub message: String,
    /// Diagnostic detail for server-side failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Request identifier echoed from the `x-request-id` header
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "req-abc123xyz")]
    pub request_id: Option<String>,
    /// RFC 3339 timestamp of the failure
    pub timestamp: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ValidationError(#[from] InputError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] AppConfigError),
}

impl ServiceError {
    pub fn warehouse_not_found(id: i32) -> Self {
        ServiceError::NotFound(format!("Warehouse with ID {} not found", id))
    }

    pub fn inventory_not_found(id: i32) -> Self {
        ServiceError::NotFound(format!("Inventory item with ID {} not found", id))
    }

    /// Wraps a store failure, logging and counting it on the way.
    pub fn db_error(error: DbErr) -> Self {
        tracing::error!(error = %error, "database operation failed");
        metrics::counter!("warehouse_db.operation.error", 1);
        ServiceError::DatabaseError(error)
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ValidationError(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::DatabaseError(_) | Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short message for the response body.
    pub fn response_message(&self) -> String {
        match self {
            Self::DatabaseError(_) => "Database error".to_string(),
            Self::Configuration(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }

    /// Diagnostic text attached to server-side failures only.
    pub fn details(&self) -> Option<String> {
        match self {
            Self::DatabaseError(e) => Some(e.to_string()),
            Self::Configuration(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::BadRequest(rejection.body_text())
    }
}

/// Non-numeric ids can never match a row, so they surface as not found.
impl From<PathRejection> for ServiceError {
    fn from(rejection: PathRejection) -> Self {
        ServiceError::NotFound(format!("No record for path: {}", rejection.body_text()))
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let err = ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.response_message(),
            details: self.details(),
            request_id: current_request_id(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(err)).into_response()
    }
}
