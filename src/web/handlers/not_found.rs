//! Fallback page for unknown routes.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
};

#[derive(Template, WebTemplate)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub path: String,
}

/// Renders `templates/404.html` with status 404.
pub async fn not_found_handler(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "No route matched");

    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            path: uri.path().to_string(),
        },
    )
}
