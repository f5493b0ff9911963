//! Web layer for the browser UI.
//!
//! Provides the home page and the 404 page. Uses Askama templates for
//! server-side rendering; the form itself posts JSON from `public/app.js`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
