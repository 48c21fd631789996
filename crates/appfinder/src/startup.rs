//! Wiring of the catalog client, record cache, and orchestrator.

use crate::AppFinderConfig;
use appfinder_cache::{RecordCache, RedisBackend, RedisConfig};
use appfinder_catalog::CatalogClient;
use appfinder_error::AppFinderResult;
use appfinder_interface::{CacheBackend, CatalogSource, RecordStore};
use appfinder_social::{AppFinder, SharedFinder};
use std::sync::Arc;
use tracing::{info, instrument};

/// Build the shared orchestrator over any cache backend.
pub fn assemble_finder<B>(config: &AppFinderConfig, backend: B) -> AppFinderResult<SharedFinder>
where
    B: CacheBackend + 'static,
{
    let catalog: Arc<dyn CatalogSource> = Arc::new(CatalogClient::new(config.catalog.clone())?);
    let store: Arc<dyn RecordStore> = Arc::new(RecordCache::new(backend, config.cache.clone()));
    Ok(Arc::new(AppFinder::new(catalog, store)))
}

/// Connect to Redis, confirm it answers, and build the shared orchestrator.
///
/// # Errors
/// Fails if the cache is unreachable or rejects the credentials, or if the
/// catalog client cannot be built.
#[instrument(skip_all, fields(address = %redis.address))]
pub async fn connect_finder(
    config: &AppFinderConfig,
    redis: &RedisConfig,
) -> AppFinderResult<SharedFinder> {
    let backend = RedisBackend::connect(redis).await?;
    backend.ping().await?;
    info!("Cache reachable");

    assemble_finder(config, backend)
}
