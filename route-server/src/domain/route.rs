//! Route type: one transport offering between two cities.

use chrono::NaiveTime;

use super::error::DomainError;
use super::{ComfortRating, TransportMode};

/// Optional descriptive information about a route.
///
/// None of this takes part in ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteDetails {
    /// Operator or service name, e.g. "Rajdhani Express"
    pub provider: Option<String>,

    /// Scheduled departure (local clock time)
    pub departure: Option<NaiveTime>,

    /// Scheduled arrival (local clock time, may be on a later day)
    pub arrival: Option<NaiveTime>,

    /// On-board amenities
    pub amenities: Vec<String>,

    /// Free-text description
    pub description: Option<String>,
}

/// A validated route for one transport mode between two cities.
///
/// Duration and distance are guaranteed positive and finite, so ranking code
/// can compare them without special cases.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    mode: TransportMode,
    duration_hours: f64,
    cost_inr: u32,
    distance_km: f64,
    comfort: ComfortRating,
    details: RouteDetails,
}

impl Route {
    /// Create a route, validating its numeric attributes.
    pub fn new(
        mode: TransportMode,
        duration_hours: f64,
        cost_inr: u32,
        distance_km: f64,
        comfort: ComfortRating,
    ) -> Result<Self, DomainError> {
        if !duration_hours.is_finite() || duration_hours <= 0.0 {
            return Err(DomainError::InvalidDuration(duration_hours));
        }

        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(DomainError::InvalidDistance(distance_km));
        }

        Ok(Self {
            mode,
            duration_hours,
            cost_inr,
            distance_km,
            comfort,
            details: RouteDetails::default(),
        })
    }

    /// Attach descriptive details.
    pub fn with_details(mut self, details: RouteDetails) -> Self {
        self.details = details;
        self
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Door-to-door travel time in hours.
    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Travel time rounded to whole minutes.
    pub fn duration_minutes(&self) -> u32 {
        (self.duration_hours * 60.0).round() as u32
    }

    /// Fare in Indian rupees.
    pub fn cost_inr(&self) -> u32 {
        self.cost_inr
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn comfort(&self) -> ComfortRating {
        self.comfort
    }

    pub fn details(&self) -> &RouteDetails {
        &self.details
    }
}
