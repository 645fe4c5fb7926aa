//! Route records as they appear in data files, and their validation.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::{
    CityName, ComfortRating, DomainError, InvalidComfort, Route, RouteDetails, TransportMode,
};

/// Comfort as written in a data file: a rating name or a 1-5 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComfortSpec {
    Rating(ComfortRating),
    Score(u8),
}

impl ComfortSpec {
    fn rating(self) -> Result<ComfortRating, InvalidComfort> {
        match self {
            ComfortSpec::Rating(r) => Ok(r),
            ComfortSpec::Score(s) => ComfortRating::from_score(s),
        }
    }
}

/// One route offering, unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    pub origin: CityName,
    pub destination: CityName,
    pub mode: TransportMode,
    pub duration_hours: f64,
    pub cost_inr: u32,
    pub distance_km: f64,
    pub comfort: ComfortSpec,

    /// Also offer the same route in the opposite direction
    #[serde(default)]
    pub bidirectional: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Departure time, "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure: Option<String>,

    /// Arrival time, "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Why a record was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Comfort(#[from] InvalidComfort),

    #[error("origin and destination are both {0}")]
    SameCity(CityName),
}

impl RouteRecord {
    /// Validate the record into a domain route.
    pub fn to_route(&self) -> Result<Route, RecordError> {
        if self.origin == self.destination {
            return Err(RecordError::SameCity(self.origin.clone()));
        }

        let comfort = self.comfort.rating()?;
        let details = RouteDetails {
            provider: self.provider.clone(),
            departure: self.departure.as_deref().map(parse_clock).transpose()?,
            arrival: self.arrival.as_deref().map(parse_clock).transpose()?,
            amenities: self.amenities.clone(),
            description: self.description.clone(),
        };

        let route = Route::new(
            self.mode,
            self.duration_hours,
            self.cost_inr,
            self.distance_km,
            comfort,
        )?;

        Ok(route.with_details(details))
    }
}

/// Parse an "HH:MM" clock time.
fn parse_clock(s: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| DomainError::InvalidTime(s.to_string()))
}
