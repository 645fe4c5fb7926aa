//! Planner configuration.

/// Configuration parameters for route recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Maximum number of runner-up routes to return with a recommendation.
    pub max_alternatives: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_alternatives: usize) -> Self {
        Self { max_alternatives }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_alternatives: 2,
        }
    }
}
