//! HTML template rendering handlers.

mod index;
mod not_found;

pub use index::{IndexTemplate, index_handler};
pub use not_found::{NotFoundTemplate, not_found_handler};
