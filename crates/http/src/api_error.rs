//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into HTTP responses with a JSON body and the status
//! code for the error kind. Handlers return `Result<_, ApiError>`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use contactbook_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Serializes as `{"error": "message"}`. `Internal` logs the real error
/// server-side and returns a static message, so no internal detail leaks.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — unknown filter/sort field or invalid body.
    BadRequest(String),
    /// 404 Not Found — no contact with the requested id.
    NotFound(String),
    /// 500 Internal Server Error — store failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn contact_not_found() -> Self {
        Self::NotFound("contact not found".to_owned())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => msg,
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                "internal server error".to_owned()
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

/// Malformed or incomplete request bodies share the `{"error": ...}` shape.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Query(e) => Self::BadRequest(e.to_string()),
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ref e if e.is_not_found() => Self::contact_not_found(),
            _ => Self::Internal(err.into()),
        }
    }
}
