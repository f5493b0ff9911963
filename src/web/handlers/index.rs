//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;

use crate::domain::entities::{ListFilter, ShortUrl};
use crate::error::AppError;
use crate::state::AppState;
use axum::extract::State;

/// Template for the home page.
///
/// Renders `templates/index.html` with the shortening form and every
/// visible short URL.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub urls: Vec<ShortUrl>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> Result<IndexTemplate, AppError> {
    let urls = state.catalog_service.list(ListFilter::Visible).await?;
    Ok(IndexTemplate { urls })
}
