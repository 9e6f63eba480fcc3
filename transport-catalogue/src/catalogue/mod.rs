//! The transport catalogue: authoritative store of stops, routes and road
//! distances, plus the statistics computed from them.
//!
//! Ingest is append-only. Once the build phase finishes the catalogue is
//! treated as immutable and shared read-only with the router and the
//! snapshot codec.

mod error;
mod stats;
mod store;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::CatalogueError;
pub use stats::{RouteStatistics, StopBuses};
pub use store::TransportCatalogue;
