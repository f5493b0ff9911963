//! Helpers shared by services and handlers.
//!
//! - [`url_parser`] - Splitting URLs into protocol, host and route
//! - [`short_id`] - Parsing short identifiers from request paths

pub mod short_id;
pub mod url_parser;
