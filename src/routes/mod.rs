use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

pub mod resources;

/// Uniform error body returned by every non-2xx response.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
    pub timestamp: NaiveDateTime,
}

impl ApiError {
    /// Classify a failure into the uniform error shape.
    ///
    /// The timestamp is taken at classification time, not when the underlying
    /// failure occurred.
    pub fn new(status: StatusCode, message: impl Into<String>, path: &str) -> Self {
        Self {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
            path: path.to_string(),
            timestamp: Utc::now().naive_utc(),
        }
    }
}

/// Build an error response with the uniform body.
pub fn error_response(status: StatusCode, message: impl Into<String>, path: &str) -> HttpResponse {
    HttpResponse::build(status).json(ApiError::new(status, message, path))
}

/// Keep undeserializable JSON bodies in the uniform error shape.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let response = error_response(StatusCode::BAD_REQUEST, err.to_string(), req.path());
    actix_web::error::InternalError::from_response(err, response).into()
}
