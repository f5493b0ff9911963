//! API route configuration.

use crate::api::handlers::{
    delete_url_handler, list_all_handler, list_visible_handler, new_url_handler, redirect_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL routes, nested under `/api/shorturl`.
///
/// # Endpoints
///
/// - `POST   /new`      - Find or create the short URL for a long URL
/// - `GET    /all`      - List every short URL
/// - `GET    /visible`  - List short URLs that are not deleted
/// - `GET    /{num}`    - Redirect to the original URL and count the visit
/// - `DELETE /{num}`    - Toggle the soft-delete flag
pub fn shorturl_routes() -> Router<AppState> {
    Router::new()
        .route("/new", post(new_url_handler))
        .route("/all", get(list_all_handler))
        .route("/visible", get(list_visible_handler))
        .route("/{num}", get(redirect_handler).delete(delete_url_handler))
}
