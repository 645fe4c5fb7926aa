//! Caching layer for route sources.
//!
//! Feed-backed sources can be slow or rate limited, and route offerings for
//! a city pair change rarely. We cache each pair's result for a bounded time.
//! Errors are never cached, so a failed fetch is retried on the next query.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache as MokaCache;

use crate::domain::{CityName, Route};
use crate::source::{RouteSource, SourceError};

/// Cache key: directed (origin, destination) pair.
type PairKey = (CityName, CityName);

/// Cached route list.
type PairEntry = Arc<Vec<Route>>;

/// Configuration for the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached city pairs.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Route source with caching.
///
/// Wraps any `RouteSource` and memoises `fetch_routes` per city pair.
pub struct CachedRouteSource<S> {
    source: S,
    cache: MokaCache<PairKey, PairEntry>,
}

impl<S: RouteSource> CachedRouteSource<S> {
    /// Create a new cached source.
    pub fn new(source: S, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { source, cache }
    }

    /// Access the underlying source for lookups that bypass the cache.
    pub fn inner(&self) -> &S {
        &self.source
    }

    /// Get cache statistics.
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl<S: RouteSource> RouteSource for CachedRouteSource<S> {
    fn fetch_routes(
        &self,
        origin: &CityName,
        destination: &CityName,
    ) -> Result<Vec<Route>, SourceError> {
        let key = (origin.clone(), destination.clone());

        // Try cache first
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.as_ref().clone());
        }

        let routes = self.source.fetch_routes(origin, destination)?;
        self.cache.insert(key, Arc::new(routes.clone()));

        Ok(routes)
    }
}
