//! Journey requests.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Address;

/// One end of a journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Origin,
    Destination,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Origin => "origin",
            Side::Destination => "destination",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to price travel between two addresses.
///
/// Any other fields in the request payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    pub origin: Address,
    pub destination: Address,
}

impl Journey {
    pub fn new(origin: Address, destination: Address) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// The address at the given end of the journey.
    pub fn address(&self, side: Side) -> &Address {
        match side {
            Side::Origin => &self.origin,
            Side::Destination => &self.destination,
        }
    }
}
