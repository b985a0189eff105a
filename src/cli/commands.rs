use axum::http::StatusCode;

use crate::api::models::{ErrorResponse, SubmitResponse};
use crate::contact::{self, ContactSubmission};
use crate::{Error, Result};

/// Status code and JSON body the server would answer a submission with
pub fn check_submission(submission: &ContactSubmission) -> Result<(StatusCode, String)> {
    let (status, body) = match contact::validate_and_process(submission) {
        Ok(ack) => (
            StatusCode::OK,
            serde_json::to_string_pretty(&SubmitResponse {
                status: "success".to_string(),
                message: ack.message,
            }),
        ),
        Err(Error::Validation(errors)) => (
            StatusCode::BAD_REQUEST,
            serde_json::to_string_pretty(&ErrorResponse {
                status: "error".to_string(),
                errors,
            }),
        ),
        Err(e) => return Err(e),
    };

    let body = body.map_err(|e| Error::Internal(format!("JSON encoding failed: {e}")))?;
    Ok((status, body))
}

/// Print the outcome of a local submission check; returns whether it was accepted
pub fn check(submission: &ContactSubmission) -> Result<bool> {
    let (status, body) = check_submission(submission)?;

    println!("HTTP {status}");
    println!("{body}");

    Ok(status.is_success())
}
