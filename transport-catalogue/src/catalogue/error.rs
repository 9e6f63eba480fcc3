//! Catalogue error types.

use crate::domain::StopId;

/// Integrity violations raised while building or querying the catalogue.
///
/// During ingest these are fatal for the run. Plain "not found" results
/// for queries are modelled as `Option`s instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogueError {
    /// A stop name was referenced before being added
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// A stop id does not belong to this catalogue
    #[error("stop id {0} is out of range")]
    InvalidStopId(StopId),

    /// A route was declared without any stops
    #[error("route {0} has no stops")]
    EmptyRoute(String),

    /// Neither direction of a road distance is known
    #[error("no road distance between {from} and {to} in either direction")]
    UnknownDistance { from: String, to: String },
}
