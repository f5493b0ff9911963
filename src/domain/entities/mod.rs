//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`ShortUrl`] - A stored URL mapping with its visit counter
//! - [`NewShortUrl`] - Input for creating a record (storage assigns the id)
//! - [`Protocol`] - The accepted URL protocols
//!
//! Entities are plain data. Business rules live in
//! [`crate::application::services`].

pub mod short_url;

pub use short_url::{DeletionState, ListFilter, NewShortUrl, Protocol, ShortUrl, UnknownProtocol};
