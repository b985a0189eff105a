use axum::{extract::rejection::FormRejection, Form, Json};
use tracing::{debug, info, warn};

use crate::{
    api::models::*,
    contact::{self, ContactSubmission},
    utils::sanitize::truncate,
    Error, Result,
};

/// POST /submit-contact - Validate and acknowledge a contact form submission
pub async fn submit_contact(
    form: std::result::Result<Form<ContactSubmission>, FormRejection>,
) -> Result<Json<SubmitResponse>> {
    // A body that is not a readable form is handled like an empty form so the client
    // still gets the field-level messages. Failures to read the body at all (size
    // limit, broken stream) keep their own status.
    let submission = match form {
        Ok(Form(submission)) => submission,
        Err(
            rejection @ (FormRejection::InvalidFormContentType(_)
            | FormRejection::FailedToDeserializeForm(_)
            | FormRejection::FailedToDeserializeFormBody(_)),
        ) => {
            warn!("Unreadable contact form body: {}", rejection);
            ContactSubmission::default()
        }
        Err(rejection) => {
            return Err(Error::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            });
        }
    };

    let ack = contact::validate_and_process(&submission)?;

    // No storage: the log line stands in for persisting the submission
    info!(
        "Received secure contact: {}, {}",
        ack.submission.name, ack.submission.email
    );
    debug!("Message preview: {}", truncate(&ack.submission.message, 80));

    Ok(Json(SubmitResponse {
        status: "success".to_string(),
        message: ack.message,
    }))
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}
