//! Handlers for creating, listing and deleting short URLs.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::short_url::{ListItem, MessageResponse, NewUrlRequest, NewUrlResponse};
use crate::application::services::AdmitUrl;
use crate::domain::entities::ListFilter;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_id::parse_short_id;

/// Finds or creates the short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorturl/new`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.google.com/", "title": "Google" }
/// ```
///
/// # Flow
///
/// 1. Reject malformed bodies and non-URLs
/// 2. Resolve the URL's host
/// 3. Return the existing record for the URL, or create one
///
/// # Errors
///
/// Returns 400 `{"error": "invalid URL"}` for any input problem, including an
/// unresolvable host. Returns 500 `{"error": "server error"}` if storage fails.
pub async fn new_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewUrlRequest>, JsonRejection>,
) -> Result<Json<NewUrlResponse>, AppError> {
    let Json(mut payload) = payload.map_err(|e| {
        AppError::bad_request("Malformed request body", json!({ "reason": e.body_text() }))
    })?;

    payload.url = payload.url.map(|u| u.trim().to_string());
    payload.validate()?;

    let url = payload
        .url
        .ok_or_else(|| AppError::bad_request("`url` is required", json!({})))?;

    tracing::debug!(%url, "POST /api/shorturl/new");

    if !state.reachability_service.verify_host(&url).await {
        return Err(AppError::bad_request(
            "Host could not be resolved",
            json!({ "url": url }),
        ));
    }

    let record = state
        .admission_service
        .admit(AdmitUrl {
            url,
            title: payload.title,
        })
        .await?;

    Ok(Json(record.into()))
}

/// Lists every short URL, deleted ones included.
///
/// # Endpoint
///
/// `GET /api/shorturl/all`
///
/// # Response
///
/// ```json
/// [{ "original_url": "https://www.google.com/", "short_url": 1 }]
/// ```
pub async fn list_all_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ListItem>>, AppError> {
    list(&state, ListFilter::All).await
}

/// Lists short URLs that are not deleted.
///
/// # Endpoint
///
/// `GET /api/shorturl/visible`
pub async fn list_visible_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ListItem>>, AppError> {
    list(&state, ListFilter::Visible).await
}

async fn list(state: &AppState, filter: ListFilter) -> Result<Json<Vec<ListItem>>, AppError> {
    let records = state.catalog_service.list(filter).await?;
    Ok(Json(records.into_iter().map(ListItem::from).collect()))
}

/// Toggles the soft-delete flag of a short URL.
///
/// # Endpoint
///
/// `DELETE /api/shorturl/{num}`
///
/// # Response
///
/// ```json
/// { "message": "3 deleted" }
/// ```
///
/// Calling it again on the same record answers `"3 undeleted"`.
///
/// # Errors
///
/// Returns 400 `{"error": "invalid URL"}` if `num` is not a positive integer
/// or no record has that id.
pub async fn delete_url_handler(
    Path(num): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_short_id(&num)?;

    let deletion = state.catalog_service.toggle_deleted(id).await?;

    Ok(Json(MessageResponse::new(format!(
        "{id} {}",
        deletion.as_str()
    ))))
}
