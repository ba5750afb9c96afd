use crate::errors::ServiceError;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Unwraps a numeric path id. Anything unparsable is reported as not found.
pub fn path_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ServiceError> {
    path.map(|Path(id)| id).map_err(ServiceError::from)
}

/// Unwraps a JSON body, turning syntax and content-type failures into a 400.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ServiceError> {
    body.map(|Json(value)| value).map_err(ServiceError::from)
}
