//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{City, ComfortRating, Route, TransportMode};
use crate::planner::{
    PlanOutcome, Recommendation, RouteTag, format_duration, format_inr, route_tags,
};

/// Request to list or search supported cities.
#[derive(Debug, Deserialize)]
pub struct CitySearchRequest {
    /// Name prefix to match (case-insensitive)
    pub q: Option<String>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// A supported city.
#[derive(Debug, Serialize, PartialEq)]
pub struct CityResult {
    /// City name
    pub name: String,

    /// State the city lies in
    pub state: Option<String>,
}

/// Response for city listing.
#[derive(Debug, Serialize)]
pub struct CityListResponse {
    pub cities: Vec<CityResult>,
}

/// A transport mode.
#[derive(Debug, Serialize)]
pub struct ModeResult {
    /// Wire identifier, e.g. "flight"
    pub id: &'static str,

    /// Display name, e.g. "Flight"
    pub name: &'static str,
}

/// Response for transport mode listing.
#[derive(Debug, Serialize)]
pub struct ModeListResponse {
    pub modes: Vec<ModeResult>,
}

/// Request to compare routes between two cities.
#[derive(Debug, Deserialize)]
pub struct RouteSearchRequest {
    /// Origin city name
    pub origin: String,

    /// Destination city name
    pub destination: String,

    /// "time", "cost" or "comfort" (defaults to time)
    pub preference: Option<String>,
}

/// A route option.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Transport mode
    pub mode: TransportMode,

    /// Journey time in hours
    pub duration_hours: f64,

    /// Journey time for display, e.g. "2h 30m"
    pub duration: String,

    /// Fare in rupees
    pub cost_inr: u32,

    /// Fare for display, e.g. "₹5,500"
    pub cost: String,

    /// Distance in kilometres
    pub distance_km: f64,

    /// Comfort rating
    pub comfort: ComfortRating,

    /// Operator or service name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Departure time, HH:MM
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<String>,

    /// Arrival time, HH:MM
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival: Option<String>,

    /// On-board amenities
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Highlights relative to the other compared routes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<RouteTag>,
}

/// The recommended option.
#[derive(Debug, Serialize)]
pub struct RecommendationResult {
    /// Recommended mode
    pub mode: TransportMode,

    /// Why this mode was chosen
    pub justification: String,

    /// The recommended route
    pub route: RouteResult,

    /// Runner-up routes, best first
    pub alternatives: Vec<RouteResult>,
}

/// Response for route comparison.
#[derive(Debug, Serialize)]
pub struct RouteSearchResponse {
    pub origin: CityResult,
    pub destination: CityResult,

    /// Preference key the recommendation answers
    pub preference: &'static str,

    /// Every available route, in transport mode order
    pub routes: Vec<RouteResult>,

    pub recommendation: RecommendationResult,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl CityResult {
    /// Create from a domain City.
    pub fn from_city(city: &City) -> Self {
        Self {
            name: city.name.as_str().to_string(),
            state: city.state.clone(),
        }
    }
}

impl ModeResult {
    pub fn from_mode(mode: TransportMode) -> Self {
        Self {
            id: mode.id(),
            name: mode.name(),
        }
    }
}

impl RouteResult {
    /// Create from a domain Route.
    pub fn from_route(route: &Route) -> Self {
        let details = route.details();
        Self {
            mode: route.mode(),
            duration_hours: route.duration_hours(),
            duration: format_duration(route.duration_minutes()),
            cost_inr: route.cost_inr(),
            cost: format_inr(route.cost_inr()),
            distance_km: route.distance_km(),
            comfort: route.comfort(),
            provider: details.provider.clone(),
            departure: details.departure.map(|t| t.format("%H:%M").to_string()),
            arrival: details.arrival.map(|t| t.format("%H:%M").to_string()),
            amenities: details.amenities.clone(),
            description: details.description.clone(),
            tags: Vec::new(),
        }
    }

    /// Create from a route, tagged against the routes it was compared with.
    pub fn from_compared(route: &Route, routes: &[Route], recommended: TransportMode) -> Self {
        Self {
            tags: route_tags(route, routes, recommended),
            ..Self::from_route(route)
        }
    }
}

impl RecommendationResult {
    /// Create from a recommendation, tagging routes against `compared`.
    pub fn from_recommendation(recommendation: &Recommendation, compared: &[Route]) -> Self {
        let mode = recommendation.mode();
        let result = |route: &Route| RouteResult::from_compared(route, compared, mode);
        Self {
            mode,
            justification: recommendation.justification.clone(),
            route: result(&recommendation.route),
            alternatives: recommendation.alternatives.iter().map(result).collect(),
        }
    }
}

impl RouteSearchResponse {
    /// Create from a planning outcome.
    pub fn from_outcome(outcome: &PlanOutcome) -> Self {
        let recommended = outcome.recommendation.mode();
        Self {
            origin: CityResult::from_city(&outcome.origin),
            destination: CityResult::from_city(&outcome.destination),
            preference: outcome.recommendation.preference.key(),
            routes: outcome
                .routes
                .iter()
                .map(|r| RouteResult::from_compared(r, &outcome.routes, recommended))
                .collect(),
            recommendation: RecommendationResult::from_recommendation(
                &outcome.recommendation,
                &outcome.routes,
            ),
        }
    }
}
