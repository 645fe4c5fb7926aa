//! Route recommendation engine.
//!
//! This module answers: "Of the ways to get from this city to that one,
//! which suits me best?"
//!
//! The engine is a pure computation over immutable reference data. It
//! compares the routes a source offers for a city pair, ranks them by the
//! traveller's preference with a deterministic tie-break, and explains its
//! choice.

mod config;
mod engine;
mod explain;
mod rank;
mod tags;

#[cfg(test)]
mod engine_tests;

pub use config::PlannerConfig;
pub use engine::{PlanError, PlanOutcome, Planner, Recommendation, RouteQuery, recommend};
pub use explain::{format_duration, format_inr, justify};
pub use rank::{best_route, preference_cmp, rank_routes};
pub use tags::{RouteTag, route_tags};
