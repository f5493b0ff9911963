//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    AdmissionService, CatalogService, ReachabilityService, ResolutionService,
};
use crate::domain::repositories::ShortUrlRepository;
use crate::domain::resolver::HostResolver;

/// Services behind `Arc`, built once over a single storage handle.
#[derive(Clone)]
pub struct AppState {
    pub admission_service: Arc<AdmissionService<dyn ShortUrlRepository>>,
    pub resolution_service: Arc<ResolutionService<dyn ShortUrlRepository>>,
    pub catalog_service: Arc<CatalogService<dyn ShortUrlRepository>>,
    pub reachability_service: Arc<ReachabilityService<dyn HostResolver>>,
}

impl AppState {
    /// Wires every service to the given storage and resolver.
    pub fn new(repository: Arc<dyn ShortUrlRepository>, resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            admission_service: Arc::new(AdmissionService::new(repository.clone())),
            resolution_service: Arc::new(ResolutionService::new(repository.clone())),
            catalog_service: Arc::new(CatalogService::new(repository)),
            reachability_service: Arc::new(ReachabilityService::new(resolver)),
        }
    }
}
