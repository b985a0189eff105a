use axum::http::{header, HeaderValue};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer, limit::RequestBodyLimitLayer, services::ServeDir,
    set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::api::handlers as api_handlers;
use crate::config::Settings;
use crate::web::handlers as web_handlers;

/// Create the router with all endpoints (form API + landing page)
pub fn create_router(settings: &Settings) -> Router {
    let web_routes = Router::new().route("/", get(web_handlers::index));

    let api_routes = Router::new()
        .route("/submit-contact", post(api_handlers::submit_contact))
        .route("/health", get(api_handlers::health_check));

    // Static file serving
    let static_routes =
        Router::new().nest_service("/static", ServeDir::new(&settings.server.static_dir));

    // Main router with middleware
    Router::new()
        .merge(web_routes)
        .merge(api_routes)
        .merge(static_routes)
        .layer(
            // Request body size limit - a contact form never needs more than a few KB
            RequestBodyLimitLayer::new(settings.server.max_request_body_size),
        )
        .layer(
            // Security headers
            SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::HeaderName::from_static("x-xss-protection"),
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(
                "default-src 'self'; script-src 'self'; style-src 'self'; img-src 'self' data:; object-src 'none'; base-uri 'self'; form-action 'self'",
            ),
        ))
        .layer(
            // Compression
            CompressionLayer::new(),
        )
        .layer(
            // Tracing
            TraceLayer::new_for_http(),
        )
}
