//! Application layer services implementing business logic.
//!
//! Services consume the domain's collaborator traits and provide a small API
//! for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::AdmissionService`] - Create-or-find of short URLs
//! - [`services::ResolutionService`] - Identifier lookup with visit counting
//! - [`services::CatalogService`] - Listing and delete/undelete
//! - [`services::ReachabilityService`] - Host resolution checks

pub mod services;
