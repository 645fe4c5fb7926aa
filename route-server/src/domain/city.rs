//! City name and city types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Longest city name we accept.
const MAX_NAME_LEN: usize = 64;

/// Error returned when parsing an invalid city name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city name: {reason}")]
pub struct InvalidCityName {
    reason: &'static str,
}

/// A validated city name.
///
/// Surrounding whitespace is trimmed. Equality and hashing ignore ASCII case,
/// so `"mumbai"` and `"Mumbai"` name the same city, while the original
/// spelling is kept for display.
///
/// # Examples
///
/// ```
/// use route_server::domain::CityName;
///
/// let a = CityName::parse("  Mumbai ").unwrap();
/// assert_eq!(a.as_str(), "Mumbai");
/// assert_eq!(a, CityName::parse("MUMBAI").unwrap());
///
/// assert!(CityName::parse("   ").is_err());
/// ```
#[derive(Clone)]
pub struct CityName {
    display: String,
    key: String,
}

impl CityName {
    /// Parse a city name from user or data input.
    pub fn parse(s: &str) -> Result<Self, InvalidCityName> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidCityName {
                reason: "must not be empty",
            });
        }

        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(InvalidCityName {
                reason: "must be at most 64 characters",
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(InvalidCityName {
                reason: "must not contain control characters",
            });
        }

        Ok(CityName {
            display: trimmed.to_string(),
            key: trimmed.to_ascii_lowercase(),
        })
    }

    /// Returns the name as originally spelled (trimmed).
    pub fn as_str(&self) -> &str {
        &self.display
    }
}

impl PartialEq for CityName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for CityName {}

impl Hash for CityName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityName({})", self.display)
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl Serialize for CityName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}

impl<'de> Deserialize<'de> for CityName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        CityName::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A supported city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// City name
    pub name: CityName,

    /// Indian state or union territory, for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl City {
    /// Create a city with no state information.
    pub fn new(name: CityName) -> Self {
        Self { name, state: None }
    }

    /// Attach the state the city lies in.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}
