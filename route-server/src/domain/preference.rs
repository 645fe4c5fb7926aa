//! Travel preference type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preference: {0} (expected time, cost or comfort)")]
pub struct InvalidPreference(pub String);

/// What the traveller cares about most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    /// Shortest journey time.
    #[default]
    TimeEfficiency,
    /// Lowest fare.
    CostSavings,
    /// Highest comfort rating.
    Comfort,
}

impl Preference {
    /// All preferences, in the order they are offered to users.
    pub const ALL: [Preference; 3] = [
        Preference::TimeEfficiency,
        Preference::CostSavings,
        Preference::Comfort,
    ];

    /// Display label, e.g. "Time Efficiency".
    pub fn label(&self) -> &'static str {
        match self {
            Preference::TimeEfficiency => "Time Efficiency",
            Preference::CostSavings => "Cost Savings",
            Preference::Comfort => "Comfort",
        }
    }

    /// Short query-string form: "time", "cost" or "comfort".
    pub fn key(&self) -> &'static str {
        match self {
            Preference::TimeEfficiency => "time",
            Preference::CostSavings => "cost",
            Preference::Comfort => "comfort",
        }
    }
}

impl FromStr for Preference {
    type Err = InvalidPreference;

    /// Accepts the short keys, the display labels, and snake_case names,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "time" | "time efficiency" | "time_efficiency" => Ok(Preference::TimeEfficiency),
            "cost" | "cost savings" | "cost_savings" => Ok(Preference::CostSavings),
            "comfort" => Ok(Preference::Comfort),
            _ => Err(InvalidPreference(s.to_string())),
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_time() {
        assert_eq!(Preference::default(), Preference::TimeEfficiency);
    }

    #[test]
    fn parse_keys_and_labels() {
        for pref in Preference::ALL {
            assert_eq!(pref.key().parse::<Preference>().unwrap(), pref);
            assert_eq!(pref.label().parse::<Preference>().unwrap(), pref);
            assert_eq!(
                pref.label().to_uppercase().parse::<Preference>().unwrap(),
                pref
            );
        }
    }

    #[test]
    fn parse_snake_case() {
        assert_eq!(
            "cost_savings".parse::<Preference>().unwrap(),
            Preference::CostSavings
        );
    }

    #[test]
    fn reject_unknown() {
        let err = "scenery".parse::<Preference>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown preference: scenery (expected time, cost or comfort)"
        );
    }
}
