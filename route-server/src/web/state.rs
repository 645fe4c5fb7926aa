//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::PlannerConfig;
use crate::snapshot::SnapshotStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Current reference data (cities and routes)
    pub store: Arc<SnapshotStore>,

    /// Recommendation engine configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    ///
    /// The store is shared so a background task can refresh it.
    pub fn new(store: Arc<SnapshotStore>, config: PlannerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
