//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod hello;
pub mod redirect;
pub mod short_url;

pub use health::health_handler;
pub use hello::hello_handler;
pub use redirect::redirect_handler;
pub use short_url::{delete_url_handler, list_all_handler, list_visible_handler, new_url_handler};
