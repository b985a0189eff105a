use askama::Template;
use axum::response::{Html, IntoResponse};

use crate::Result;

/// Landing page template
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    submit_url: &'static str,
    min_name_length: usize,
    min_message_length: usize,
}

/// GET / - Landing page with the contact form
pub async fn index() -> Result<impl IntoResponse> {
    let template = IndexTemplate {
        submit_url: "/submit-contact",
        min_name_length: crate::contact::MIN_NAME_LENGTH,
        min_message_length: crate::contact::MIN_MESSAGE_LENGTH,
    };

    Ok(Html(template.render()?))
}
