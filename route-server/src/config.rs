//! Server configuration.
//!
//! Read from `ROUTE_SERVER_*` environment variables; anything unset keeps
//! its default. Log filtering is configured separately through `RUST_LOG`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::planner::PlannerConfig;

pub const ADDR_VAR: &str = "ROUTE_SERVER_ADDR";
pub const ROUTES_FILE_VAR: &str = "ROUTE_SERVER_ROUTES_FILE";
pub const RELOAD_SECS_VAR: &str = "ROUTE_SERVER_RELOAD_SECS";
pub const MAX_ALTERNATIVES_VAR: &str = "ROUTE_SERVER_MAX_ALTERNATIVES";
pub const CACHE_TTL_SECS_VAR: &str = "ROUTE_SERVER_CACHE_TTL_SECS";

/// Error reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: &'static str,
}

/// Configuration for the route server binary.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Route data file. When unset the built-in sample table is served
    /// and nothing is reloaded.
    pub routes_file: Option<PathBuf>,

    /// How often to reload the routes file.
    pub reload_interval: Duration,

    pub planner: PlannerConfig,
    pub cache: CacheConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            routes_file: None,
            reload_interval: Duration::from_secs(300),
            planner: PlannerConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup function.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(ADDR_VAR) {
            config.bind_addr = value.trim().parse().map_err(|_| ConfigError {
                var: ADDR_VAR,
                value,
                reason: "expected host:port",
            })?;
        }

        if let Some(value) = get(ROUTES_FILE_VAR) {
            config.routes_file = Some(PathBuf::from(value.trim()));
        }

        if let Some(value) = get(RELOAD_SECS_VAR) {
            config.reload_interval = Duration::from_secs(positive_secs(RELOAD_SECS_VAR, value)?);
        }

        if let Some(value) = get(MAX_ALTERNATIVES_VAR) {
            let max_alternatives = value.trim().parse().map_err(|_| ConfigError {
                var: MAX_ALTERNATIVES_VAR,
                value,
                reason: "expected a non-negative integer",
            })?;
            config.planner = PlannerConfig::new(max_alternatives);
        }

        if let Some(value) = get(CACHE_TTL_SECS_VAR) {
            config.cache.ttl = Duration::from_secs(positive_secs(CACHE_TTL_SECS_VAR, value)?);
        }

        Ok(config)
    }
}

fn positive_secs(var: &'static str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError {
            var,
            value,
            reason: "expected a positive number of seconds",
        }),
    }
}
