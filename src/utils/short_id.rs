//! Parsing of short identifiers taken from request paths.

use serde_json::json;

use crate::error::AppError;

/// Parses a path segment into a short identifier.
///
/// Surrounding whitespace is ignored. Anything that is not an integer of at
/// least 1 is rejected.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for non-numeric, zero or negative input.
pub fn parse_short_id(raw: &str) -> Result<i64, AppError> {
    let trimmed = raw.trim();

    match trimmed.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(AppError::bad_request(
            "`num` should be a positive integer",
            json!({ "num": raw }),
        )),
    }
}
