//! Business logic services for the application layer.

pub mod admission_service;
pub mod catalog_service;
pub mod reachability_service;
pub mod resolution_service;

pub use admission_service::{AdmissionService, AdmitUrl};
pub use catalog_service::CatalogService;
pub use reachability_service::ReachabilityService;
pub use resolution_service::{ResolutionService, Resolved};
