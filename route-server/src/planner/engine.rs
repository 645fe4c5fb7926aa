//! Route comparison and recommendation.
//!
//! Given two cities and a preference, fetches the available routes from a
//! [`RouteSource`] and picks the one that best serves the preference.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::{City, CityName, Preference, Route, TransportMode};
use crate::registry::CityRegistry;
use crate::source::{RouteSource, SourceError};

use super::config::PlannerConfig;
use super::explain::justify;
use super::rank::rank_routes;

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Query is malformed, e.g. origin and destination are the same city
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// City is not in the supported-city registry
    #[error("unknown city: {0}")]
    UnknownCity(String),

    /// Nothing runs between the two cities
    #[error("no routes available")]
    NoRoutesAvailable,

    /// The route source failed
    #[error("route source failed: {0}")]
    Source(#[from] SourceError),
}

/// A route comparison request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteQuery {
    pub origin: CityName,
    pub destination: CityName,
    pub preference: Preference,
}

impl RouteQuery {
    /// Create a query from raw city names.
    ///
    /// A blank name, or the same name twice, is an `InvalidQuery`. Any other
    /// name that cannot be a city name cannot be in the registry either, so
    /// it is an `UnknownCity`.
    pub fn new(origin: &str, destination: &str, preference: Preference) -> Result<Self, PlanError> {
        let (raw_origin, raw_destination) = (origin.trim(), destination.trim());
        if !raw_origin.is_empty() && raw_origin.eq_ignore_ascii_case(raw_destination) {
            return Err(same_city(raw_origin));
        }

        let origin = parse_city("origin", raw_origin)?;
        let destination = parse_city("destination", raw_destination)?;

        Ok(Self {
            origin,
            destination,
            preference,
        })
    }
}

fn parse_city(field: &str, raw: &str) -> Result<CityName, PlanError> {
    CityName::parse(raw).map_err(|e| {
        if raw.is_empty() {
            PlanError::InvalidQuery(format!("{field}: {e}"))
        } else {
            PlanError::UnknownCity(raw.to_string())
        }
    })
}

fn same_city(name: impl std::fmt::Display) -> PlanError {
    PlanError::InvalidQuery(format!("origin and destination are both {name}"))
}

/// The recommended route for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// The chosen route.
    pub route: Route,

    /// The preference it was chosen for.
    pub preference: Preference,

    /// Why it was chosen.
    pub justification: String,

    /// Runner-up routes, best first.
    pub alternatives: Vec<Route>,
}

impl Recommendation {
    pub fn mode(&self) -> TransportMode {
        self.route.mode()
    }
}

/// Choose the best route for a preference.
///
/// Pure function of its inputs. All other routes are returned as
/// alternatives in rank order. Fails with `NoRoutesAvailable` on empty input.
pub fn recommend(routes: &[Route], preference: Preference) -> Result<Recommendation, PlanError> {
    let mut ranked = rank_routes(routes.to_vec(), preference).into_iter();
    let route = ranked.next().ok_or(PlanError::NoRoutesAvailable)?;
    let alternatives: Vec<Route> = ranked.collect();
    let justification = justify(&route, alternatives.first(), preference);

    Ok(Recommendation {
        route,
        preference,
        justification,
        alternatives,
    })
}

/// Result of planning a query.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    /// Origin, as spelled in the registry.
    pub origin: City,

    /// Destination, as spelled in the registry.
    pub destination: City,

    /// Every available route, in transport mode order.
    pub routes: Vec<Route>,

    pub recommendation: Recommendation,
}

/// Route recommendation engine.
///
/// Stateless: borrows its reference data and configuration, and every
/// method is a function of its arguments and that data.
pub struct Planner<'a, S: RouteSource + ?Sized> {
    registry: &'a CityRegistry,
    source: &'a S,
    config: &'a PlannerConfig,
}

impl<'a, S: RouteSource + ?Sized> Planner<'a, S> {
    /// Create a new planner.
    pub fn new(registry: &'a CityRegistry, source: &'a S, config: &'a PlannerConfig) -> Self {
        Self {
            registry,
            source,
            config,
        }
    }

    /// Check a city pair, returning the registry entries.
    ///
    /// Same-city queries are rejected before registry lookups.
    fn validate(
        &self,
        origin: &CityName,
        destination: &CityName,
    ) -> Result<(&'a City, &'a City), PlanError> {
        if origin == destination {
            return Err(same_city(origin));
        }

        let origin = self
            .registry
            .get(origin)
            .ok_or_else(|| PlanError::UnknownCity(origin.to_string()))?;
        let destination = self
            .registry
            .get(destination)
            .ok_or_else(|| PlanError::UnknownCity(destination.to_string()))?;

        Ok((origin, destination))
    }

    /// All available routes between two cities, one per mode.
    ///
    /// Modes the source has no data for are omitted; an empty result is not
    /// an error here. Routes are returned in transport mode order.
    pub fn compare_routes(
        &self,
        origin: &CityName,
        destination: &CityName,
    ) -> Result<Vec<Route>, PlanError> {
        self.validate(origin, destination)?;

        let fetched = self.source.fetch_routes(origin, destination)?;

        // Keep the first route per mode
        let mut seen = HashSet::new();
        let mut routes: Vec<Route> = fetched
            .into_iter()
            .filter(|route| {
                let first = seen.insert(route.mode());
                if !first {
                    warn!(
                        %origin,
                        %destination,
                        mode = %route.mode(),
                        "source returned duplicate mode, ignoring"
                    );
                }
                first
            })
            .collect();

        routes.sort_by_key(Route::mode);

        debug!(%origin, %destination, count = routes.len(), "compared routes");
        Ok(routes)
    }

    /// Choose the best route for a preference.
    ///
    /// Like [`recommend`], but keeps at most `max_alternatives` runners-up.
    pub fn recommend(
        &self,
        routes: &[Route],
        preference: Preference,
    ) -> Result<Recommendation, PlanError> {
        let mut recommendation = recommend(routes, preference)?;
        recommendation
            .alternatives
            .truncate(self.config.max_alternatives);
        Ok(recommendation)
    }

    /// Compare routes for a query and recommend one.
    pub fn plan(&self, query: &RouteQuery) -> Result<PlanOutcome, PlanError> {
        let (origin, destination) = self.validate(&query.origin, &query.destination)?;
        let routes = self.compare_routes(&query.origin, &query.destination)?;
        let recommendation = self.recommend(&routes, query.preference)?;

        debug!(
            origin = %origin.name,
            destination = %destination.name,
            preference = %query.preference,
            mode = %recommendation.mode(),
            "recommended route"
        );

        Ok(PlanOutcome {
            origin: origin.clone(),
            destination: destination.clone(),
            routes,
            recommendation,
        })
    }
}
