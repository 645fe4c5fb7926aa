//! Built-in sample route data.

use super::error::SourceError;
use super::table::RouteTable;

const SAMPLE_ROUTES: &str = include_str!("../../data/sample_routes.json");

/// The bundled sample table, used when no routes file is configured.
///
/// Mumbai and Delhi are connected by all four modes in both directions;
/// other pairs carry a subset of modes in one direction only.
pub fn sample() -> Result<RouteTable, SourceError> {
    RouteTable::from_json(SAMPLE_ROUTES)
}
