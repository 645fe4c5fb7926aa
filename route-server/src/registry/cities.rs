//! City registry lookup.

use std::collections::HashMap;

use crate::domain::{City, CityName};

/// The set of cities the recommender supports.
///
/// Cities keep their registration order for listing. Lookups ignore case.
#[derive(Debug, Clone, Default)]
pub struct CityRegistry {
    cities: Vec<City>,
    index: HashMap<CityName, usize>,
}

impl CityRegistry {
    /// Create a registry from a list of cities.
    ///
    /// If a name appears more than once, the first entry wins.
    pub fn new(cities: impl IntoIterator<Item = City>) -> Self {
        let mut registry = Self::default();
        for city in cities {
            registry.insert(city);
        }
        registry
    }

    fn insert(&mut self, city: City) {
        if self.index.contains_key(&city.name) {
            return;
        }
        self.index.insert(city.name.clone(), self.cities.len());
        self.cities.push(city);
    }

    /// Check whether a city is supported.
    pub fn is_supported(&self, name: &CityName) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a city by name.
    pub fn get(&self, name: &CityName) -> Option<&City> {
        self.index.get(name).map(|&i| &self.cities[i])
    }

    /// All supported cities, in registration order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Supported city names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &CityName> {
        self.cities.iter().map(|c| &c.name)
    }

    /// Cities whose name starts with `prefix`, ignoring case.
    ///
    /// An empty prefix matches everything. At most `limit` cities are returned.
    pub fn search(&self, prefix: &str, limit: usize) -> Vec<&City> {
        let prefix = prefix.trim().to_lowercase();
        self.cities
            .iter()
            .filter(|c| c.name.as_str().to_lowercase().starts_with(&prefix))
            .take(limit)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Builder for creating a registry.
///
/// Provides a fluent API for adding cities from string literals.
/// Invalid names are skipped.
#[derive(Debug, Default)]
pub struct CityRegistryBuilder {
    inner: CityRegistry,
}

impl CityRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city in the given state.
    pub fn add(mut self, name: &str, state: &str) -> Self {
        if let Ok(name) = CityName::parse(name) {
            self.inner.insert(City::new(name).with_state(state));
        }
        self
    }

    pub fn build(self) -> CityRegistry {
        self.inner
    }
}
