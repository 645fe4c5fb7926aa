//! Static route table, loaded from records.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::domain::{CityName, Route, TransportMode};

use super::error::SourceError;
use super::record::RouteRecord;
use super::RouteSource;

/// A pair already has a route for this mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate {mode} route from {origin} to {destination}")]
pub struct DuplicateMode {
    pub mode: TransportMode,
    pub origin: CityName,
    pub destination: CityName,
}

/// An in-memory table of routes keyed by directed city pair.
///
/// Every route has passed validation, and each pair holds at most one route
/// per transport mode.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<(CityName, CityName), Vec<Route>>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from records, validating each one.
    ///
    /// Fails on the first invalid record, or if a pair would get two routes
    /// for the same mode (including via a `bidirectional` record).
    ///
    /// The reverse copy of a `bidirectional` record has no departure or
    /// arrival time, since the timetable only describes the forward trip.
    pub fn from_records(
        records: impl IntoIterator<Item = RouteRecord>,
    ) -> Result<Self, SourceError> {
        let mut table = Self::new();

        for (index, record) in records.into_iter().enumerate() {
            let route = record.to_route().map_err(|e| SourceError::Invalid {
                index,
                reason: e.to_string(),
            })?;

            let invalid = |e: DuplicateMode| SourceError::Invalid {
                index,
                reason: e.to_string(),
            };

            if record.bidirectional {
                table
                    .insert(
                        record.destination.clone(),
                        record.origin.clone(),
                        unscheduled(&route),
                    )
                    .map_err(invalid)?;
            }

            table
                .insert(record.origin, record.destination, route)
                .map_err(invalid)?;
        }

        Ok(table)
    }

    /// Load a table from a JSON file of route records.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| SourceError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let table = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            pairs = table.pair_count(),
            routes = table.route_count(),
            "loaded route table"
        );
        Ok(table)
    }

    /// Parse a table from a JSON array of route records.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let records: Vec<RouteRecord> =
            serde_json::from_str(json).map_err(|e| SourceError::Json {
                message: e.to_string(),
            })?;

        Self::from_records(records)
    }

    /// Add a route for a directed pair.
    ///
    /// Fails if the pair already has a route for the mode.
    pub fn insert(
        &mut self,
        origin: CityName,
        destination: CityName,
        route: Route,
    ) -> Result<(), DuplicateMode> {
        let routes = self
            .routes
            .entry((origin.clone(), destination.clone()))
            .or_default();

        if routes.iter().any(|r| r.mode() == route.mode()) {
            return Err(DuplicateMode {
                mode: route.mode(),
                origin,
                destination,
            });
        }

        routes.push(route);
        Ok(())
    }

    /// Routes for a directed pair, in insertion order.
    pub fn get(&self, origin: &CityName, destination: &CityName) -> &[Route] {
        self.routes
            .get(&(origin.clone(), destination.clone()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of directed city pairs with at least one route.
    pub fn pair_count(&self) -> usize {
        self.routes.values().filter(|r| !r.is_empty()).count()
    }

    /// Total number of routes across all pairs.
    pub fn route_count(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.route_count() == 0
    }
}

/// Copy of a route without its clock times.
fn unscheduled(route: &Route) -> Route {
    let mut details = route.details().clone();
    details.departure = None;
    details.arrival = None;
    route.clone().with_details(details)
}

impl RouteSource for RouteTable {
    fn fetch_routes(
        &self,
        origin: &CityName,
        destination: &CityName,
    ) -> Result<Vec<Route>, SourceError> {
        Ok(self.get(origin, destination).to_vec())
    }
}
