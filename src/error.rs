use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::models::ErrorResponse;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {}", .0.join(" "))]
    Validation(Vec<String>),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get an error message safe for logging
    /// Validation messages are fixed strings, so no user input is echoed
    pub fn log_safe(&self) -> String {
        match self {
            Error::Validation(errors) => {
                format!("Validation failed with {} error(s): {}", errors.len(), errors.join(" "))
            }
            Error::Rejected { status, message } => format!("Request rejected ({status}): {message}"),
            Error::Template(_) => "Template rendering failed".to_string(),
            Error::Io(_) => "IO operation failed".to_string(),
            Error::Config(msg) => format!("Configuration error: {msg}"),
            Error::Internal(msg) => {
                let lower = msg.to_lowercase();
                if lower.contains("secret") || lower.contains("token") || lower.contains("key") {
                    "Internal error (details redacted)".to_string()
                } else {
                    format!("Internal error: {msg}")
                }
            }
        }
    }
}

// Every failure reaches the client as {"status": "error", "errors": [...]}
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let log_line = self.log_safe();

        let (status, errors) = match self {
            Error::Validation(errors) => {
                tracing::warn!("Rejected submission: {}", log_line);
                (StatusCode::BAD_REQUEST, errors)
            }
            Error::Rejected { status, message } => {
                tracing::warn!("{}", log_line);
                (status, vec![message])
            }
            _ => {
                tracing::error!("Request error: {}", log_line);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["Internal server error".to_string()],
                )
            }
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            errors,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_joins_messages() {
        let err = Error::Validation(vec![
            "Name must be at least 2 characters long.".to_string(),
            "Please provide a valid email address.".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation error: Name must be at least 2 characters long. Please provide a valid email address."
        );
    }

    #[test]
    fn test_log_safe_redacts_secrets() {
        let err = Error::Internal("bad secret value".to_string());
        assert_eq!(err.log_safe(), "Internal error (details redacted)");
    }

    #[test]
    fn test_status_codes() {
        let response = Error::Validation(vec!["nope".to_string()]).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = Error::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = Error::Rejected {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "Failed to buffer the request body: length limit exceeded".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_io_error_is_internal() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken").into();
        assert_eq!(err.log_safe(), "IO operation failed");
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
