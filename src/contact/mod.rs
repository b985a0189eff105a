// Contact form validation and processing

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::sanitize::sanitize_input;
use crate::utils::validation::{contains_script_tag, has_min_length, is_valid_email};

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_MESSAGE_LENGTH: usize = 10;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long.";
pub const INVALID_EMAIL: &str = "Please provide a valid email address.";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long.";
pub const SCRIPT_NOT_ALLOWED: &str = "Script tags are not allowed for security reasons.";

/// A single contact form submission.
///
/// Lives for one request. Missing form fields deserialize to empty strings, so they
/// fail the length and format checks instead of rejecting the request outright.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Copy of the submission with every field passed through the sanitizer
    pub fn sanitized(&self) -> Self {
        Self {
            name: sanitize_input(&self.name),
            email: sanitize_input(&self.email),
            message: sanitize_input(&self.message),
        }
    }
}

/// Outcome of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    /// Sanitized fields, safe to embed in HTML
    pub submission: ContactSubmission,
    pub message: String,
}

/// Run every rule against the raw submission and collect the failures.
///
/// Rules are not short-circuited: each failing rule contributes its message, in the
/// order name, email, message, script tags.
pub fn validate(submission: &ContactSubmission) -> Vec<String> {
    let mut errors = Vec::new();

    if !has_min_length(&submission.name, MIN_NAME_LENGTH) {
        errors.push(NAME_TOO_SHORT.to_string());
    }

    if !is_valid_email(&submission.email) {
        errors.push(INVALID_EMAIL.to_string());
    }

    if !has_min_length(&submission.message, MIN_MESSAGE_LENGTH) {
        errors.push(MESSAGE_TOO_SHORT.to_string());
    }

    let fields = [&submission.name, &submission.email, &submission.message];
    if fields.iter().any(|field| contains_script_tag(field)) {
        errors.push(SCRIPT_NOT_ALLOWED.to_string());
    }

    errors
}

/// Validate a submission and, if it passes, sanitize it and build the acknowledgement
pub fn validate_and_process(submission: &ContactSubmission) -> Result<Acknowledgement> {
    let errors = validate(submission);
    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    let submission = submission.sanitized();
    let message = format!(
        "Thank you, {}! Your message has been received.",
        submission.name
    );

    Ok(Acknowledgement {
        submission,
        message,
    })
}
