//! Route ranking by traveller preference.
//!
//! Ranks routes so the one that best serves the preference comes first.

use std::cmp::Ordering;

use crate::domain::{Preference, Route};

/// Compare two routes under a preference. `Less` means `a` is better.
///
/// Routes are ranked by:
/// 1. The preference's criterion (shorter duration, lower cost, or higher
///    comfort)
/// 2. Lower cost
/// 3. Shorter duration
/// 4. Transport mode declaration order (Train, Flight, Bus, Car)
///
/// This is a total order over routes with distinct modes, so the best route
/// is always unique.
pub fn preference_cmp(a: &Route, b: &Route, preference: Preference) -> Ordering {
    // Primary: the preference's own criterion
    let primary = match preference {
        Preference::TimeEfficiency => a.duration_hours().total_cmp(&b.duration_hours()),
        Preference::CostSavings => a.cost_inr().cmp(&b.cost_inr()),
        Preference::Comfort => b.comfort().cmp(&a.comfort()),
    };
    if primary != Ordering::Equal {
        return primary;
    }

    // Secondary: cheaper
    let cost = a.cost_inr().cmp(&b.cost_inr());
    if cost != Ordering::Equal {
        return cost;
    }

    // Tertiary: faster
    let duration = a.duration_hours().total_cmp(&b.duration_hours());
    if duration != Ordering::Equal {
        return duration;
    }

    a.mode().cmp(&b.mode())
}

/// Rank routes by preference.
///
/// Returns routes sorted best-first.
pub fn rank_routes(mut routes: Vec<Route>, preference: Preference) -> Vec<Route> {
    routes.sort_by(|a, b| preference_cmp(a, b, preference));
    routes
}

/// The single best route for a preference, if any.
pub fn best_route(routes: &[Route], preference: Preference) -> Option<&Route> {
    routes.iter().min_by(|a, b| preference_cmp(a, b, preference))
}
