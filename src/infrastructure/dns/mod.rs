//! Host name resolution for URL admission.
//!
//! Provides two [`HostResolver`](crate::domain::resolver::HostResolver)
//! implementations:
//! - [`SystemResolver`] - OS resolver through `tokio::net::lookup_host`
//! - [`NullResolver`] - Accepts every host, for disabled verification

mod null_resolver;
mod system_resolver;

pub use null_resolver::NullResolver;
pub use system_resolver::SystemResolver;
