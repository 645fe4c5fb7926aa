//! Domain types for the route recommender.
//!
//! This module contains the core value types for intercity travel options.
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod city;
mod comfort;
mod error;
mod mode;
mod preference;
mod route;

pub use city::{City, CityName, InvalidCityName};
pub use comfort::{ComfortRating, InvalidComfort};
pub use error::DomainError;
pub use mode::{InvalidTransportMode, TransportMode};
pub use preference::{InvalidPreference, Preference};
pub use route::{Route, RouteDetails};
