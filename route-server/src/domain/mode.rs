//! Transport mode type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {0}")]
pub struct InvalidTransportMode(pub String);

/// A mode of intercity transport.
///
/// The declaration order (Train, Flight, Bus, Car) is significant: it is the
/// final tie-break when ranking routes, and the order in which routes are
/// listed for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Train,
    #[serde(alias = "plane")]
    Flight,
    Bus,
    #[serde(alias = "taxi")]
    Car,
}

impl TransportMode {
    /// All modes, in declaration order.
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Train,
        TransportMode::Flight,
        TransportMode::Bus,
        TransportMode::Car,
    ];

    /// Display name, e.g. "Flight".
    pub fn name(&self) -> &'static str {
        match self {
            TransportMode::Train => "Train",
            TransportMode::Flight => "Flight",
            TransportMode::Bus => "Bus",
            TransportMode::Car => "Car",
        }
    }

    /// Lowercase identifier used on the wire, e.g. "flight".
    pub fn id(&self) -> &'static str {
        match self {
            TransportMode::Train => "train",
            TransportMode::Flight => "flight",
            TransportMode::Bus => "bus",
            TransportMode::Car => "car",
        }
    }
}

impl FromStr for TransportMode {
    type Err = InvalidTransportMode;

    /// Case-insensitive; accepts "plane" for flights and "taxi" for cars.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "train" => Ok(TransportMode::Train),
            "flight" | "plane" => Ok(TransportMode::Flight),
            "bus" => Ok(TransportMode::Bus),
            "car" | "taxi" => Ok(TransportMode::Car),
            _ => Err(InvalidTransportMode(s.to_string())),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
