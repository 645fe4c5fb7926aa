//! Supported-city registry.
//!
//! The registry is read-only reference data: the fixed set of cities the
//! recommender answers queries for.

mod cities;
mod india;

pub use cities::{CityRegistry, CityRegistryBuilder};
pub use india::india;
