//! Stops.

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// A named stop with its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub name: String,
    pub coordinates: Coordinates,
}

impl Stop {
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }
}
