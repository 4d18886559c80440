use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: ApiErrorInfo,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorInfo {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

/// HTTP-facing error. Domain errors convert into it with `From`.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    code: String,
    message: String,
    details: Option<String>,
}

impl AppError {
    fn new(status: StatusCode, code: &str, message: &str) -> Self {
        Self {
            status,
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    pub fn not_found(code: &str, message: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, code, message)
    }

    /// Store failures: the cause goes to `details`, not `message`.
    pub fn storage(code: &str, details: impl fmt::Display) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, code, "Storage failure")
            .with_details(details.to_string())
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status_code(&self) -> StatusCode { self.status }

    pub fn code(&self) -> &str { &self.code }

    fn to_response_data(&self) -> ApiErrorResponse {
        ApiErrorResponse {
            error: ApiErrorInfo {
                code: self.code.clone(),
                message: self.message.clone(),
                details: self.details.clone(),
            },
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                code = %self.code,
                details = ?self.details,
                "{}",
                self.message
            );
        }
        let response_data = self.to_response_data();
        (self.status, Json(response_data)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_body() {
        let err = AppError::not_found("EVENT_NOT_FOUND", "Event not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let body = serde_json::to_value(err.to_response_data()).unwrap();
        assert_eq!(body["error"]["code"], "EVENT_NOT_FOUND");
        assert_eq!(body["error"]["message"], "Event not found");
        assert!(body["error"]["details"].is_null());
    }

    #[test]
    fn storage_keeps_cause_in_details() {
        let err = AppError::storage("DATABASE_ERROR", "connection reset");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "DATABASE_ERROR");
        assert_eq!(err.details.as_deref(), Some("connection reset"));
    }

    #[test]
    fn storage_responds_with_500() {
        let err = AppError::storage("DATABASE_ERROR", "connection reset");
        assert_eq!(err.to_string(), "Storage failure");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
