//! Route and pricing data sources.
//!
//! The recommender never embeds route data. It asks a [`RouteSource`] for the
//! offerings between two cities; sources validate their data before handing
//! it over, so the planner can trust every [`Route`](crate::domain::Route)
//! it receives.
//!
//! Data files are JSON arrays of route records:
//!
//! ```json
//! [
//!   {
//!     "origin": "Mumbai",
//!     "destination": "Delhi",
//!     "mode": "flight",
//!     "duration_hours": 2.5,
//!     "cost_inr": 5500,
//!     "distance_km": 1200,
//!     "comfort": "high",
//!     "bidirectional": true,
//!     "provider": "IndiGo",
//!     "departure": "08:15",
//!     "arrival": "10:45"
//!   }
//! ]
//! ```
//!
//! `comfort` may also be a 1-5 score.

mod error;
mod record;
mod sample;
mod table;

pub use error::SourceError;
pub use record::{ComfortSpec, RecordError, RouteRecord};
pub use sample::sample;
pub use table::{DuplicateMode, RouteTable};

use crate::domain::{CityName, Route};

/// Trait for providing routes between two cities.
///
/// This abstraction allows the planner to be tested with mock data and to
/// sit in front of static tables, files, or live feeds alike.
pub trait RouteSource {
    /// Get the available routes from `origin` to `destination`.
    ///
    /// Modes with no offering for the pair are simply absent. An empty
    /// vector means nothing runs between the two cities.
    fn fetch_routes(
        &self,
        origin: &CityName,
        destination: &CityName,
    ) -> Result<Vec<Route>, SourceError>;
}
