pub mod core;

use tracing_subscriber::EnvFilter;

pub use crate::core::catalog::{build_catalog, write_catalog, Catalog};
pub use crate::core::config::CatalogConfig;
pub use crate::core::error::{CatalogError, CatalogResult};
pub use crate::core::http::{Fetcher, HttpFetcher};

/// Initialize structured logging on stderr.
///
/// `RUST_LOG` wins over `default_filter` when set.
pub fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
