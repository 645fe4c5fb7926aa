//! Comfort rating type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid comfort rating.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidComfort {
    #[error("unknown comfort rating: {0}")]
    Name(String),

    #[error("comfort score {0} is outside 1-5")]
    Score(u8),
}

/// How comfortable a route is. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComfortRating {
    Low,
    Medium,
    High,
}

impl ComfortRating {
    /// Convert a 1-5 comfort score to a rating.
    ///
    /// 1-2 is Low, 3 is Medium, 4-5 is High.
    pub fn from_score(score: u8) -> Result<Self, InvalidComfort> {
        match score {
            1 | 2 => Ok(ComfortRating::Low),
            3 => Ok(ComfortRating::Medium),
            4 | 5 => Ok(ComfortRating::High),
            _ => Err(InvalidComfort::Score(score)),
        }
    }

    /// Display name, e.g. "Medium".
    pub fn name(&self) -> &'static str {
        match self {
            ComfortRating::Low => "Low",
            ComfortRating::Medium => "Medium",
            ComfortRating::High => "High",
        }
    }
}

impl FromStr for ComfortRating {
    type Err = InvalidComfort;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(ComfortRating::Low),
            "medium" => Ok(ComfortRating::Medium),
            "high" => Ok(ComfortRating::High),
            _ => Err(InvalidComfort::Name(s.to_string())),
        }
    }
}

impl fmt::Display for ComfortRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
