//! Reference data snapshots.
//!
//! The city registry and route source are immutable once built. When route
//! data is refreshed, a whole new [`ReferenceData`] is built and swapped in.
//! A query takes one `Arc` at the start and uses it throughout, so it never
//! sees a mix of old and new data.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use crate::cache::{CacheConfig, CachedRouteSource};
use crate::registry::CityRegistry;
use crate::source::{RouteSource, RouteTable, SourceError};

/// Route source shared across request handlers.
pub type SharedSource = Box<dyn RouteSource + Send + Sync>;

/// One consistent view of the reference data.
pub struct ReferenceData {
    /// Supported cities
    pub registry: CityRegistry,

    /// Where route offerings come from
    pub routes: SharedSource,
}

impl ReferenceData {
    /// Bundle a registry and a route source.
    pub fn new(registry: CityRegistry, routes: impl RouteSource + Send + Sync + 'static) -> Self {
        Self {
            registry,
            routes: Box::new(routes),
        }
    }

    /// Bundle a registry with a cached route table.
    pub fn cached(registry: CityRegistry, table: RouteTable, cache: &CacheConfig) -> Self {
        Self::new(registry, CachedRouteSource::new(table, cache))
    }
}

/// Holder of the current reference data snapshot.
pub struct SnapshotStore {
    current: RwLock<Arc<ReferenceData>>,
}

impl SnapshotStore {
    pub fn new(data: ReferenceData) -> Self {
        Self {
            current: RwLock::new(Arc::new(data)),
        }
    }

    /// The current snapshot.
    ///
    /// Holding the returned `Arc` keeps that snapshot alive even if it is
    /// replaced in the meantime.
    pub fn current(&self) -> Arc<ReferenceData> {
        // The guarded value is a plain Arc, so a poisoned lock is still usable
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in a new snapshot.
    pub fn replace(&self, data: ReferenceData) {
        let data = Arc::new(data);
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = data;
    }

    /// Reload the route table from a file, keeping the current registry.
    ///
    /// On success, replaces the current snapshot and returns the number of
    /// routes loaded. On failure, the existing snapshot is preserved and the
    /// error is returned.
    pub fn reload_from(&self, path: &Path, cache: &CacheConfig) -> Result<usize, SourceError> {
        let table = match RouteTable::load(path) {
            Ok(table) => table,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "route reload failed, keeping previous data");
                return Err(e);
            }
        };

        let count = table.route_count();
        let registry = self.current().registry.clone();
        self.replace(ReferenceData::cached(registry, table, cache));

        info!(path = %path.display(), routes = count, "route data reloaded");
        Ok(count)
    }

    /// [`reload_from`](Self::reload_from) on the blocking thread pool.
    pub async fn reload(
        self: Arc<Self>,
        path: PathBuf,
        cache: CacheConfig,
    ) -> Result<usize, SourceError> {
        tokio::task::spawn_blocking(move || self.reload_from(&path, &cache))
            .await
            .map_err(|e| SourceError::Unavailable(format!("reload task failed: {e}")))?
    }
}
