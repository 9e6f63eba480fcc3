//! Dense arena identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a stop in the catalogue's stop arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StopId(pub usize);

/// Index of a route in the catalogue's route arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteId(pub usize);

impl StopId {
    /// Returns the arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl RouteId {
    /// Returns the arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stop#{}", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route#{}", self.0)
    }
}
