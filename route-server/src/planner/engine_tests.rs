//! Unit tests for route comparison and recommendation.

use super::*;
use crate::domain::{CityName, ComfortRating, Preference, Route, TransportMode};
use crate::registry::india;
use crate::source::{RouteSource, SourceError};
use std::collections::HashMap;
use std::sync::Mutex;

fn name(s: &str) -> CityName {
    CityName::parse(s).unwrap()
}

fn route(mode: TransportMode, hours: f64, cost: u32, comfort: ComfortRating) -> Route {
    Route::new(mode, hours, cost, 1400.0, comfort).unwrap()
}

fn mumbai_delhi() -> Vec<Route> {
    vec![
        route(TransportMode::Train, 16.0, 1800, ComfortRating::Medium),
        route(TransportMode::Flight, 2.5, 5500, ComfortRating::High),
        route(TransportMode::Bus, 22.0, 1200, ComfortRating::Low),
        route(TransportMode::Car, 24.0, 3500, ComfortRating::Medium),
    ]
}

/// Mock route source for testing.
struct MockSource {
    routes: HashMap<(CityName, CityName), Vec<Route>>,
    call_count: Mutex<usize>,
    fail: bool,
}

impl MockSource {
    fn new() -> Self {
        Self {
            routes: HashMap::new(),
            call_count: Mutex::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    fn add(&mut self, origin: &str, destination: &str, routes: Vec<Route>) {
        self.routes.insert((name(origin), name(destination)), routes);
    }

    fn calls(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl RouteSource for MockSource {
    fn fetch_routes(
        &self,
        origin: &CityName,
        destination: &CityName,
    ) -> Result<Vec<Route>, SourceError> {
        *self.call_count.lock().unwrap() += 1;
        if self.fail {
            return Err(SourceError::Unavailable("pricing feed offline".into()));
        }
        Ok(self
            .routes
            .get(&(origin.clone(), destination.clone()))
            .cloned()
            .unwrap_or_default())
    }
}

fn source_with_mumbai_delhi() -> MockSource {
    let mut source = MockSource::new();
    source.add("Mumbai", "Delhi", mumbai_delhi());
    source
}

fn plan(
    source: &MockSource,
    origin: &str,
    destination: &str,
    pref: Preference,
) -> Result<PlanOutcome, PlanError> {
    let registry = india();
    let config = PlannerConfig::default();
    let planner = Planner::new(&registry, source, &config);
    planner.plan(&RouteQuery::new(origin, destination, pref)?)
}

#[test]
fn mumbai_delhi_recommendations() {
    let source = source_with_mumbai_delhi();

    let time = plan(&source, "Mumbai", "Delhi", Preference::TimeEfficiency).unwrap();
    assert_eq!(time.recommendation.mode(), TransportMode::Flight);

    let cost = plan(&source, "Mumbai", "Delhi", Preference::CostSavings).unwrap();
    assert_eq!(cost.recommendation.mode(), TransportMode::Bus);

    let comfort = plan(&source, "Mumbai", "Delhi", Preference::Comfort).unwrap();
    assert_eq!(comfort.recommendation.mode(), TransportMode::Flight);
}

#[test]
fn outcome_lists_all_routes_in_mode_order() {
    let mut source = MockSource::new();
    let mut reversed = mumbai_delhi();
    reversed.reverse();
    source.add("Mumbai", "Delhi", reversed);

    let outcome = plan(&source, "Mumbai", "Delhi", Preference::CostSavings).unwrap();
    let modes: Vec<TransportMode> = outcome.routes.iter().map(Route::mode).collect();
    assert_eq!(modes, TransportMode::ALL.to_vec());
}

#[test]
fn outcome_uses_registry_spelling() {
    let source = source_with_mumbai_delhi();
    let outcome = plan(&source, " mumbai", "DELHI", Preference::TimeEfficiency).unwrap();
    assert_eq!(outcome.origin.name.as_str(), "Mumbai");
    assert_eq!(outcome.destination.name.as_str(), "Delhi");
    assert_eq!(outcome.destination.state.as_deref(), Some("Delhi"));
}

#[test]
fn alternatives_limited_by_config() {
    let source = source_with_mumbai_delhi();
    let registry = india();
    let query = RouteQuery::new("Mumbai", "Delhi", Preference::TimeEfficiency).unwrap();

    let config = PlannerConfig::default();
    let outcome = Planner::new(&registry, &source, &config).plan(&query).unwrap();
    let alternatives: Vec<TransportMode> = outcome
        .recommendation
        .alternatives
        .iter()
        .map(Route::mode)
        .collect();
    assert_eq!(alternatives, vec![TransportMode::Train, TransportMode::Bus]);

    let config = PlannerConfig::new(0);
    let outcome = Planner::new(&registry, &source, &config).plan(&query).unwrap();
    assert!(outcome.recommendation.alternatives.is_empty());
    // The full comparison is unaffected
    assert_eq!(outcome.routes.len(), 4);
}

#[test]
fn justification_mentions_choice() {
    let source = source_with_mumbai_delhi();
    let outcome = plan(&source, "Mumbai", "Delhi", Preference::CostSavings).unwrap();
    assert_eq!(
        outcome.recommendation.justification,
        "It's the most economical option at only ₹1,200, saving ₹600 compared to the next cheapest option (Train)"
    );
    assert_eq!(outcome.recommendation.preference, Preference::CostSavings);
}

#[test]
fn same_city_is_invalid_for_every_preference() {
    let source = source_with_mumbai_delhi();
    for pref in Preference::ALL {
        let err = plan(&source, "Mumbai", "Mumbai", pref).unwrap_err();
        assert!(matches!(err, PlanError::InvalidQuery(_)), "{pref}");
    }
    // Rejected before the source is consulted
    assert_eq!(source.calls(), 0);
}

#[test]
fn same_city_ignores_case() {
    let source = MockSource::new();
    let err = plan(&source, "Delhi", "delhi", Preference::Comfort).unwrap_err();
    assert_eq!(
        err,
        PlanError::InvalidQuery("origin and destination are both Delhi".into())
    );
}

#[test]
fn same_unknown_city_is_invalid_not_unknown() {
    let source = MockSource::new();
    let err = plan(&source, "Paris", "paris", Preference::Comfort).unwrap_err();
    assert!(matches!(err, PlanError::InvalidQuery(_)));
}

#[test]
fn malformed_name_is_invalid_query() {
    let err = RouteQuery::new("  ", "Delhi", Preference::Comfort).unwrap_err();
    assert_eq!(
        err,
        PlanError::InvalidQuery("origin: invalid city name: must not be empty".into())
    );
}

#[test]
fn overlong_name_is_unknown_city() {
    let long = "Atlantis".repeat(9);
    let err = RouteQuery::new(&long, "Delhi", Preference::TimeEfficiency).unwrap_err();
    assert_eq!(err, PlanError::UnknownCity(long.clone()));

    let err = RouteQuery::new("Delhi", &format!("  {long} "), Preference::Comfort).unwrap_err();
    assert_eq!(err, PlanError::UnknownCity(long));
}

#[test]
fn control_character_name_is_unknown_city() {
    let err = RouteQuery::new("Mumbai", "Del\nhi", Preference::CostSavings).unwrap_err();
    assert_eq!(err, PlanError::UnknownCity("Del\nhi".into()));
}

#[test]
fn same_malformed_name_is_invalid_query() {
    let long = "Atlantis".repeat(9);
    let err = RouteQuery::new(&long, &long.to_uppercase(), Preference::Comfort).unwrap_err();
    assert!(matches!(err, PlanError::InvalidQuery(_)));
}

#[test]
fn unknown_origin() {
    let source = MockSource::new();
    let err = plan(&source, "Paris", "Delhi", Preference::TimeEfficiency).unwrap_err();
    assert_eq!(err, PlanError::UnknownCity("Paris".into()));
    assert_eq!(err.to_string(), "unknown city: Paris");
}

#[test]
fn unknown_destination() {
    let source = MockSource::new();
    let err = plan(&source, "Delhi", "Atlantis", Preference::TimeEfficiency).unwrap_err();
    assert_eq!(err, PlanError::UnknownCity("Atlantis".into()));
    assert_eq!(source.calls(), 0);
}

#[test]
fn missing_modes_are_omitted() {
    let mut source = MockSource::new();
    source.add(
        "Bangalore",
        "Chennai",
        vec![
            route(TransportMode::Bus, 7.0, 600, ComfortRating::Low),
            route(TransportMode::Train, 5.5, 750, ComfortRating::High),
        ],
    );

    let registry = india();
    let config = PlannerConfig::default();
    let planner = Planner::new(&registry, &source, &config);
    let routes = planner
        .compare_routes(&name("Bangalore"), &name("Chennai"))
        .unwrap();

    let modes: Vec<TransportMode> = routes.iter().map(Route::mode).collect();
    assert_eq!(modes, vec![TransportMode::Train, TransportMode::Bus]);
}

#[test]
fn empty_comparison_is_not_an_error() {
    let source = MockSource::new();
    let registry = india();
    let config = PlannerConfig::default();
    let planner = Planner::new(&registry, &source, &config);

    let routes = planner.compare_routes(&name("Pune"), &name("Ludhiana")).unwrap();
    assert!(routes.is_empty());
}

#[test]
fn empty_comparison_fails_recommendation() {
    let source = MockSource::new();
    let err = plan(&source, "Pune", "Ludhiana", Preference::CostSavings).unwrap_err();
    assert_eq!(err, PlanError::NoRoutesAvailable);
}

#[test]
fn recommend_empty_always_fails() {
    for pref in Preference::ALL {
        assert_eq!(recommend(&[], pref).unwrap_err(), PlanError::NoRoutesAvailable);
    }
}

#[test]
fn duplicate_modes_keep_first() {
    let mut source = MockSource::new();
    source.add(
        "Pune",
        "Nagpur",
        vec![
            route(TransportMode::Bus, 14.0, 900, ComfortRating::Low),
            route(TransportMode::Bus, 12.0, 500, ComfortRating::Medium),
        ],
    );

    let registry = india();
    let config = PlannerConfig::default();
    let planner = Planner::new(&registry, &source, &config);
    let routes = planner.compare_routes(&name("Pune"), &name("Nagpur")).unwrap();

    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].cost_inr(), 900);
}

#[test]
fn source_failure_surfaces() {
    let source = MockSource::failing();
    let err = plan(&source, "Mumbai", "Delhi", Preference::TimeEfficiency).unwrap_err();
    assert_eq!(
        err,
        PlanError::Source(SourceError::Unavailable("pricing feed offline".into()))
    );
}

#[test]
fn repeated_plans_are_identical() {
    let source = source_with_mumbai_delhi();
    for pref in Preference::ALL {
        let first = plan(&source, "Mumbai", "Delhi", pref).unwrap();
        let second = plan(&source, "Mumbai", "Delhi", pref).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn works_with_sample_table() {
    let table = crate::source::sample().unwrap();
    let registry = india();
    let config = PlannerConfig::default();
    let planner = Planner::new(&registry, &table, &config);

    let query = RouteQuery::new("Delhi", "Mumbai", Preference::Comfort).unwrap();
    let outcome = planner.plan(&query).unwrap();
    assert_eq!(outcome.routes.len(), 4);
    assert_eq!(outcome.recommendation.mode(), TransportMode::Flight);

    // Only one direction is seeded for Bangalore to Chennai
    let query = RouteQuery::new("Chennai", "Bangalore", Preference::Comfort).unwrap();
    assert_eq!(planner.plan(&query).unwrap_err(), PlanError::NoRoutesAvailable);
}

#[test]
fn concurrent_queries_agree() {
    let source = source_with_mumbai_delhi();
    let registry = india();
    let config = PlannerConfig::default();
    let planner = Planner::new(&registry, &source, &config);
    let query = RouteQuery::new("Mumbai", "Delhi", Preference::TimeEfficiency).unwrap();
    let expected = planner.plan(&query).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| planner.plan(&query).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn comfort(i: u8) -> ComfortRating {
        match i {
            0 => ComfortRating::Low,
            1 => ComfortRating::Medium,
            _ => ComfortRating::High,
        }
    }

    fn route_set() -> impl Strategy<Value = Vec<Route>> {
        (
            proptest::sample::subsequence(TransportMode::ALL.to_vec(), 0..=4),
            prop::collection::vec((1u32..40, 0u32..60, 0u8..3), 4),
        )
            .prop_map(|(modes, attrs)| {
                modes
                    .into_iter()
                    .zip(attrs)
                    .map(|(mode, (half_hours, fifties, c))| {
                        Route::new(mode, half_hours as f64 / 2.0, fifties * 50, 800.0, comfort(c))
                            .unwrap()
                    })
                    .collect()
            })
    }

    fn preference() -> impl Strategy<Value = Preference> {
        prop::sample::select(Preference::ALL.to_vec())
    }

    proptest! {
        /// The recommendation is one of the compared routes, and optimal
        /// for its preference
        #[test]
        fn sound_and_optimal(routes in route_set(), pref in preference()) {
            let mut source = MockSource::new();
            source.add("Kanpur", "Lucknow", routes);

            let registry = india();
            let config = PlannerConfig::default();
            let planner = Planner::new(&registry, &source, &config);
            let compared = planner.compare_routes(&name("Kanpur"), &name("Lucknow")).unwrap();

            match planner.recommend(&compared, pref) {
                Err(err) => {
                    prop_assert!(compared.is_empty());
                    prop_assert_eq!(err, PlanError::NoRoutesAvailable);
                }
                Ok(rec) => {
                    prop_assert!(compared.contains(&rec.route));
                    for other in &compared {
                        match pref {
                            Preference::TimeEfficiency => {
                                prop_assert!(rec.route.duration_hours() <= other.duration_hours())
                            }
                            Preference::CostSavings => {
                                prop_assert!(rec.route.cost_inr() <= other.cost_inr())
                            }
                            Preference::Comfort => {
                                prop_assert!(rec.route.comfort() >= other.comfort())
                            }
                        }
                    }
                }
            }
        }

        /// Same inputs, same answer
        #[test]
        fn idempotent(routes in route_set(), pref in preference()) {
            prop_assert_eq!(recommend(&routes, pref), recommend(&routes, pref));
        }

        /// Alternatives plus the choice cover every route exactly once
        #[test]
        fn alternatives_partition_routes(routes in route_set(), pref in preference()) {
            if let Ok(rec) = recommend(&routes, pref) {
                prop_assert_eq!(rec.alternatives.len() + 1, routes.len());
                prop_assert!(!rec.alternatives.iter().any(|r| r.mode() == rec.mode()));
            }
        }
    }
}
