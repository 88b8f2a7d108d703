use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const INVALID_INPUT_MESSAGE: &str = "Input must be a non-empty string.";
pub const INVALID_PERCENT_MESSAGE: &str = "Percent must be a number.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("{0}")]
    InvalidArgument(&'static str),

    #[error("Invalid hex color code.")]
    InvalidFormat,
}

impl ColorError {
    pub fn invalid_input() -> Self {
        ColorError::InvalidArgument(INVALID_INPUT_MESSAGE)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ColorError::InvalidArgument(_) => "invalid_argument",
            ColorError::InvalidFormat => "invalid_format",
        }
    }
}

pub type ColorResult<T> = Result<T, ColorError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            AppError::Color(ref e) => {
                tracing::debug!("Color error: {}", e);
                (StatusCode::BAD_REQUEST, e.kind(), e.to_string())
            }
            AppError::BadRequest(ref msg) => {
                tracing::debug!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone())
            }
            AppError::NotFound(ref msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "not_found", msg.clone())
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    msg.clone(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ColorError::invalid_input().to_string(),
            "Input must be a non-empty string."
        );
        assert_eq!(
            ColorError::InvalidFormat.to_string(),
            "Invalid hex color code."
        );
    }

    #[test]
    fn test_color_error_status() {
        let response = AppError::from(ColorError::InvalidFormat).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::NotFound("/nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
