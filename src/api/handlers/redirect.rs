//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_id::parse_short_id;

/// Response header carrying the post-increment visit count.
pub const VISITS_HEADER: HeaderName = HeaderName::from_static("visits");

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{num}`
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL and a `visits` header
/// holding the visit count including this request.
///
/// # Errors
///
/// Returns 400 `{"error": "invalid URL"}` if `num` is not a positive integer,
/// is unknown, or belongs to a deleted record.
pub async fn redirect_handler(
    Path(num): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let id = parse_short_id(&num)?;

    let resolved = state.resolution_service.resolve(id).await?;

    let location = HeaderValue::from_str(&resolved.url).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid header value",
            json!({ "id": id, "reason": e.to_string() }),
        )
    })?;

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, location),
            (VISITS_HEADER, HeaderValue::from(resolved.visits)),
        ],
    )
        .into_response())
}
