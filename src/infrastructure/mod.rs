//! Infrastructure layer for external integrations.
//!
//! Implements the collaborator traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`dns`] - Host name resolvers
//! - [`persistence`] - Storage implementations (PostgreSQL and in-memory)

pub mod dns;
pub mod persistence;
