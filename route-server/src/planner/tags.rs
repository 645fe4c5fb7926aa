//! Highlight tags for compared routes.

use std::fmt;

use serde::Serialize;

use crate::domain::{Route, TransportMode};

/// A highlight shown next to a route in a comparison.
///
/// Tags are relative to the set of routes being compared. Ties share a tag,
/// so two routes with the same fare are both "Cheapest".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RouteTag {
    Recommended,
    Fastest,
    Cheapest,
    #[serde(rename = "Most Comfortable")]
    MostComfortable,
}

impl RouteTag {
    pub fn label(&self) -> &'static str {
        match self {
            RouteTag::Recommended => "Recommended",
            RouteTag::Fastest => "Fastest",
            RouteTag::Cheapest => "Cheapest",
            RouteTag::MostComfortable => "Most Comfortable",
        }
    }
}

impl fmt::Display for RouteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tags for `route` among `routes`, in `RouteTag` order.
///
/// `recommended` is the mode of the recommended route. The extremum tags are
/// only given when there is something to compare against.
pub fn route_tags(route: &Route, routes: &[Route], recommended: TransportMode) -> Vec<RouteTag> {
    let mut tags = Vec::new();

    if route.mode() == recommended {
        tags.push(RouteTag::Recommended);
    }

    if routes.len() < 2 {
        return tags;
    }

    if routes
        .iter()
        .all(|other| route.duration_hours() <= other.duration_hours())
    {
        tags.push(RouteTag::Fastest);
    }

    if routes.iter().all(|other| route.cost_inr() <= other.cost_inr()) {
        tags.push(RouteTag::Cheapest);
    }

    if routes.iter().all(|other| route.comfort() >= other.comfort()) {
        tags.push(RouteTag::MostComfortable);
    }

    tags
}
