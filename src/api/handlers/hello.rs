//! Greeting endpoint used as a liveness probe by the frontend.

use axum::Json;

use crate::api::dto::short_url::MessageResponse;

/// # Endpoint
///
/// `GET /api/hello`
pub async fn hello_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from the URL Shortener API."))
}
